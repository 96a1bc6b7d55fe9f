use std::time::Duration;

use crate::assessment::progress::ProgressReport;
use crate::assessment::scoring::ScoreSummary;

/// How long a validation message panel stays up before self-dismissing.
pub const VALIDATION_NOTICE_TTL: Duration = Duration::from_secs(5);
/// How long the success notice stays up.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(3);
/// How long the submit-error notice stays up (dismissible early).
pub const ERROR_NOTICE_TTL: Duration = Duration::from_secs(10);
/// Pause between the success notice and the swap to the results view.
pub const RESULT_REVEAL_DELAY: Duration = Duration::from_millis(1500);

/// The capability set the logic core needs from whatever renders the form.
///
/// Everything here is a one-way signal; no call reads anything back. Timed
/// notices use the TTL constants above. Implementations decide what
/// "scroll to top" and friends mean for their medium.
pub trait FormView: Send + Sync {
    fn set_progress(&self, progress: &ProgressReport);
    /// Disable the submit affordance while a submission is in flight.
    fn set_submit_busy(&self, busy: bool);
    fn show_validation_errors(&self, messages: &[String]);
    fn show_submit_success(&self);
    fn show_submit_error(&self, description: &str);
    fn show_results(&self, summary: &ScoreSummary);
    fn show_form(&self);
    fn clear_notices(&self);
    fn scroll_to_top(&self);
}

/// View that swallows every signal. Useful for headless runs and as a
/// stand-in wherever no presentation is attached.
pub struct NullFormView;

impl FormView for NullFormView {
    fn set_progress(&self, _progress: &ProgressReport) {}
    fn set_submit_busy(&self, _busy: bool) {}
    fn show_validation_errors(&self, _messages: &[String]) {}
    fn show_submit_success(&self) {}
    fn show_submit_error(&self, _description: &str) {}
    fn show_results(&self, _summary: &ScoreSummary) {}
    fn show_form(&self) {}
    fn clear_notices(&self) {}
    fn scroll_to_top(&self) {}
}
