//! End-to-end submission flow against a mock collector.

use parking_lot::Mutex;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fopo_assessment::assessment::{FormSnapshot, ProgressReport};
use fopo_assessment::submission::{submit, ResultCache, SubmitError, TransmissionError, WebhookClient};
use fopo_assessment::view::{
    FormView, ERROR_NOTICE_TTL, RESULT_REVEAL_DELAY, SUCCESS_NOTICE_TTL, VALIDATION_NOTICE_TTL,
};
use fopo_assessment::{FopoLevel, ScoreSummary};

#[derive(Debug, Clone, PartialEq)]
enum ViewEvent {
    Busy(bool),
    Progress { percent: u8, submit_enabled: bool },
    ValidationErrors(Vec<String>),
    Success,
    Error(String),
    Results { score: u8, level: FopoLevel },
    ShowForm,
    ClearNotices,
    ScrollTop,
}

#[derive(Default)]
struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    fn new() -> Self {
        Self::default()
    }

    fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().clone()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().push(event);
    }
}

impl FormView for RecordingView {
    fn set_progress(&self, progress: &ProgressReport) {
        self.push(ViewEvent::Progress {
            percent: progress.percent,
            submit_enabled: progress.submit_enabled,
        });
    }

    fn set_submit_busy(&self, busy: bool) {
        self.push(ViewEvent::Busy(busy));
    }

    fn show_validation_errors(&self, messages: &[String]) {
        self.push(ViewEvent::ValidationErrors(messages.to_vec()));
    }

    fn show_submit_success(&self) {
        self.push(ViewEvent::Success);
    }

    fn show_submit_error(&self, description: &str) {
        self.push(ViewEvent::Error(description.to_string()));
    }

    fn show_results(&self, summary: &ScoreSummary) {
        self.push(ViewEvent::Results {
            score: summary.score,
            level: summary.level,
        });
    }

    fn show_form(&self) {
        self.push(ViewEvent::ShowForm);
    }

    fn clear_notices(&self) {
        self.push(ViewEvent::ClearNotices);
    }

    fn scroll_to_top(&self) {
        self.push(ViewEvent::ScrollTop);
    }
}

fn snapshot_with(values: &[u8], email: &str) -> FormSnapshot {
    let mut snapshot = FormSnapshot::default();
    for (slot, value) in snapshot.answers.iter_mut().zip(values) {
        *slot = Some(*value);
    }
    snapshot.additional.email = email.to_string();
    snapshot
}

fn cache_in(dir: &tempfile::TempDir) -> ResultCache {
    ResultCache::new(dir.path().join("last_result.json"))
}

#[tokio::test]
async fn successful_submission_delivers_caches_and_reveals_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collect"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let view = RecordingView::new();
    let webhook = WebhookClient::new(format!("{}/collect", server.uri()));
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);

    let snapshot = snapshot_with(&[5, 5, 5, 5, 4, 4, 3, 3, 3, 3], "x@y.com");
    let summary = submit(&snapshot, &view, &webhook, &cache).await.unwrap();
    assert_eq!(summary.score, 38);
    assert_eq!(summary.level, FopoLevel::High);

    // Success notice first, results only after the cache write, submit
    // re-enabled as the very last signal.
    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Busy(true),
            ViewEvent::Success,
            ViewEvent::Results { score: 38, level: FopoLevel::High },
            ViewEvent::ScrollTop,
            ViewEvent::Busy(false),
        ]
    );

    let stored = cache.load().expect("result cached after success");
    assert_eq!(stored.score, 38);
    assert_eq!(stored.level, FopoLevel::High);
    assert_eq!(stored.additional_data.email, "x@y.com");

    // The collector saw exactly the documented wire shape.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let mut keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["additionalData", "answers", "browserInfo", "level", "levelText", "score", "timestamp"]
    );
    assert_eq!(body["score"], 38);
    assert_eq!(body["level"], "high");
    assert_eq!(body["levelText"], "High FOPO");
    assert_eq!(body["answers"]["q1"], 5);
    assert_eq!(body["answers"]["q10"], 3);
    assert_eq!(body["additionalData"]["email"], "x@y.com");
    assert!(body["browserInfo"]["userAgent"].as_str().unwrap().contains("fopo-assessment"));
}

#[tokio::test]
async fn collector_500_surfaces_a_transmission_error_and_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let view = RecordingView::new();
    let webhook = WebhookClient::new(server.uri());
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);

    let snapshot = snapshot_with(&[1; 10], "a@b.com");
    let before = snapshot.clone();

    let err = submit(&snapshot, &view, &webhook, &cache).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Transmission(TransmissionError::Status(500))
    ));

    let events = view.events();
    assert_eq!(events[0], ViewEvent::Busy(true));
    assert!(matches!(&events[1], ViewEvent::Error(description) if description.contains("500")));
    assert_eq!(events[2], ViewEvent::Busy(false));
    assert_eq!(events.len(), 3);

    // No cached result, no results view, and the form data is untouched so
    // the user can simply resubmit.
    assert!(cache.load().is_none());
    assert!(!cache.path().exists());
    assert_eq!(snapshot, before);
}

#[tokio::test]
async fn resubmitting_the_same_form_after_a_failure_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let view = RecordingView::new();
    let webhook = WebhookClient::new(server.uri());
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);

    let snapshot = snapshot_with(&[2; 10], "retry@example.com");
    let err = submit(&snapshot, &view, &webhook, &cache).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transmission(_)));

    server.reset().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let summary = submit(&snapshot, &view, &webhook, &cache).await.unwrap();
    assert_eq!(summary.score, 20);
    assert_eq!(summary.level, FopoLevel::Low);
    assert_eq!(cache.load().unwrap().score, 20);
}

#[tokio::test]
async fn validation_failure_aborts_before_any_network_activity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let view = RecordingView::new();
    let webhook = WebhookClient::new(server.uri());
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);

    let snapshot = snapshot_with(&[4; 9], "a@b.com");
    let err = submit(&snapshot, &view, &webhook, &cache).await.unwrap_err();
    match err {
        SubmitError::Validation(messages) => {
            assert_eq!(messages, vec!["Question 10 has not been answered".to_string()]);
        }
        other => panic!("expected a validation failure, got {other:?}"),
    }

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Busy(true),
            ViewEvent::ValidationErrors(vec!["Question 10 has not been answered".to_string()]),
            ViewEvent::Busy(false),
        ]
    );
    assert!(cache.load().is_none());
}

// Progress and the submit affordance only care that an email is present;
// the shape check bites at submit time. A filled form with a malformed email
// reads 100% complete yet still cannot get past validation.
#[tokio::test]
async fn malformed_email_passes_progress_but_fails_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let snapshot = snapshot_with(&[3; 10], "not-an-email");
    let progress = ProgressReport::compute(&snapshot);
    assert_eq!(progress.percent, 100);
    assert!(progress.submit_enabled);

    let view = RecordingView::new();
    let webhook = WebhookClient::new(server.uri());
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);

    let err = submit(&snapshot, &view, &webhook, &cache).await.unwrap_err();
    match err {
        SubmitError::Validation(messages) => {
            assert_eq!(messages, vec!["Please provide a valid email address".to_string()]);
        }
        other => panic!("expected a validation failure, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_success_body_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("thanks, not json"))
        .expect(1)
        .mount(&server)
        .await;

    let view = RecordingView::new();
    let webhook = WebhookClient::new(server.uri());
    let dir = tempfile::tempdir().unwrap();
    let cache = cache_in(&dir);

    let snapshot = snapshot_with(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1], "a@b.com");
    let summary = submit(&snapshot, &view, &webhook, &cache).await.unwrap();
    assert_eq!(summary.score, 10);
    assert_eq!(summary.level, FopoLevel::Low);
    assert!(cache.load().is_some());
}

#[test]
fn notice_timing_constants_hold() {
    assert_eq!(VALIDATION_NOTICE_TTL.as_secs(), 5);
    assert_eq!(SUCCESS_NOTICE_TTL.as_secs(), 3);
    assert_eq!(ERROR_NOTICE_TTL.as_secs(), 10);
    assert_eq!(RESULT_REVEAL_DELAY.as_millis(), 1500);
}
