//! Submission notification port
//!
//! Defines how the submission client signals the presentation shell.

use coaching_domain::Notice;

/// Callback for submission lifecycle updates
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, toast, inline message, etc.)
pub trait SubmissionNotifier: Send + Sync {
    /// Called when the request is issued
    fn on_pending(&self);

    /// Called when the endpoint acknowledged the inquiry; the shell should
    /// clear the form and show `notice`
    fn on_success(&self, notice: &Notice);

    /// Called when delivery failed; the shell should keep the form contents
    /// and show `notice`
    fn on_error(&self, notice: &Notice);
}

/// No-op notifier for when nothing needs to be displayed
pub struct NoSubmissionNotifier;

impl SubmissionNotifier for NoSubmissionNotifier {
    fn on_pending(&self) {}
    fn on_success(&self, _notice: &Notice) {}
    fn on_error(&self, _notice: &Notice) {}
}
