//! The submit flow: validate, score, assemble, deliver, then either reveal
//! the results view or surface the failure and return to an interactive
//! idle state. The submit affordance is disabled for the whole attempt and
//! re-enabled on every exit path.

use log::{info, warn};
use thiserror::Error;

use crate::assessment::scoring::{CompletedAnswers, ScoreSummary};
use crate::assessment::validation::validate;
use crate::assessment::{FormSnapshot, QUESTION_COUNT};
use crate::view::{FormView, RESULT_REVEAL_DELAY};

use super::payload::{StoredResult, SubmissionPayload};
use super::store::ResultCache;
use super::webhook::{TransmissionError, WebhookClient};

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("form validation failed with {} problem(s)", .0.len())]
    Validation(Vec<String>),
    #[error(transparent)]
    Transmission(#[from] TransmissionError),
}

// Scoped disable of the submit affordance; dropping the guard re-enables it
// no matter which path left the pipeline.
struct BusyGuard<'a> {
    view: &'a dyn FormView,
}

impl<'a> BusyGuard<'a> {
    fn engage(view: &'a dyn FormView) -> Self {
        view.set_submit_busy(true);
        Self { view }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.view.set_submit_busy(false);
    }
}

/// Run one submit attempt over a snapshot taken at the moment the user asked
/// to submit.
///
/// Validation failures abort before any network activity. The network is
/// touched exactly once; there is no retry and nothing is lost on failure,
/// the user can resubmit the same filled-in form. On success the outcome is
/// cached locally and, after a short pause for the success notice, the
/// results view takes over. The results transition only ever happens after
/// both the collector's 2xx and the cache write.
pub async fn submit(
    snapshot: &FormSnapshot,
    view: &dyn FormView,
    webhook: &WebhookClient,
    cache: &ResultCache,
) -> Result<ScoreSummary, SubmitError> {
    let _busy = BusyGuard::engage(view);

    info!(
        "📝 Submit requested ({}/{} questions answered)",
        snapshot.answered_questions(),
        QUESTION_COUNT
    );

    if let Err(messages) = validate(snapshot) {
        warn!("Validation failed with {} problem(s)", messages.len());
        view.show_validation_errors(&messages);
        return Err(SubmitError::Validation(messages));
    }

    let answers = match CompletedAnswers::try_from(snapshot) {
        Ok(answers) => answers,
        // Unreachable once validation has passed; kept as a validation
        // failure rather than a panic.
        Err(missing) => {
            let messages = vec![missing.to_string()];
            view.show_validation_errors(&messages);
            return Err(SubmitError::Validation(messages));
        }
    };

    let summary = ScoreSummary::from_answers(&answers);
    let payload = SubmissionPayload::assemble(snapshot, summary);
    info!("🧮 Scored submission: {}/50 ({})", summary.score, summary.level.label());

    if let Err(err) = webhook.deliver(&payload).await {
        view.show_submit_error(&err.to_string());
        return Err(err.into());
    }

    view.show_submit_success();

    let stored = StoredResult::from(&payload);
    if let Err(err) = cache.store(&stored) {
        // A missing local cache entry is not worth failing the submission over
        warn!("Could not store result locally: {:#}", err);
    }

    // Let the success notice land before swapping views
    tokio::time::sleep(RESULT_REVEAL_DELAY).await;
    view.show_results(&summary);
    view.scroll_to_top();

    info!("✅ Submission complete: {} ({})", summary.score, summary.level.as_str());
    Ok(summary)
}
