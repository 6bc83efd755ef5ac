//! Submit Inquiry use case.
//!
//! Turns a validated [`Inquiry`] into exactly one request through the
//! [`InquiryTransport`] port and tracks the [`SubmissionPhase`]:
//!
//! ```text
//! Idle ──submit──▶ Pending ──2xx──▶ Success ──reset──▶ Idle
//!                     └──failure──▶ Error   ──reset──▶ Idle
//! ```
//!
//! There is no automatic retry and no deduplication. A second `submit`
//! while a request is in flight is ignored.

use crate::ports::inquiry_transport::{InquiryTransport, TransportError};
use crate::ports::submission_notifier::SubmissionNotifier;
use coaching_domain::{Acknowledgement, Inquiry, Notice, SubmissionPhase};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Result of a call to [`SubmitInquiryUseCase::submit`]
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The endpoint acknowledged the inquiry
    Delivered(Acknowledgement),
    /// The request failed; the caller should keep the inquiry for resubmission
    Failed(TransportError),
    /// Another submission was already pending; nothing was sent
    Ignored,
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered(_))
    }
}

/// Use case for submitting a contact inquiry.
///
/// Clones share the same phase, so a shell can hand a clone to a spawned
/// task and still observe `is_pending()`.
#[derive(Clone)]
pub struct SubmitInquiryUseCase {
    transport: Arc<dyn InquiryTransport>,
    phase: Arc<Mutex<SubmissionPhase>>,
}

impl SubmitInquiryUseCase {
    pub fn new(transport: Arc<dyn InquiryTransport>) -> Self {
        Self {
            transport,
            phase: Arc::new(Mutex::new(SubmissionPhase::Idle)),
        }
    }

    fn lock_phase(&self) -> MutexGuard<'_, SubmissionPhase> {
        self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current phase
    pub fn phase(&self) -> SubmissionPhase {
        *self.lock_phase()
    }

    pub fn is_pending(&self) -> bool {
        self.phase().is_pending()
    }

    /// Return to `Idle` after a settled submission.
    ///
    /// Has no effect while a request is pending.
    pub fn reset(&self) {
        let mut phase = self.lock_phase();
        if phase.is_settled() {
            debug!("Submission phase {} -> idle", *phase);
            *phase = SubmissionPhase::Idle;
        }
    }

    /// Submit an inquiry that already passed the validation schema.
    pub async fn submit(
        &self,
        inquiry: &Inquiry,
        notifier: &dyn SubmissionNotifier,
    ) -> SubmitOutcome {
        let pending = {
            let mut phase = self.lock_phase();
            if phase.is_pending() {
                debug!("Submission already pending; ignoring submit");
                return SubmitOutcome::Ignored;
            }
            *phase = SubmissionPhase::Pending;
            PendingGuard {
                phase: &self.phase,
                settled: false,
            }
        };

        notifier.on_pending();
        info!("Submitting inquiry from {}", inquiry.full_name());

        match self.transport.send(inquiry).await {
            Ok(ack) => {
                pending.settle(SubmissionPhase::Success);
                info!("Inquiry delivered: {}", ack.message);
                notifier.on_success(&Notice::confirmation());
                SubmitOutcome::Delivered(ack)
            }
            Err(e) => {
                pending.settle(SubmissionPhase::Error);
                warn!("Inquiry submission failed: {}", e);
                notifier.on_error(&Notice::failure());
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// Returns the phase to `Idle` if a pending `submit` is dropped before it settles
struct PendingGuard<'a> {
    phase: &'a Mutex<SubmissionPhase>,
    settled: bool,
}

impl PendingGuard<'_> {
    fn settle(mut self, outcome: SubmissionPhase) {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner()) = outcome;
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("Pending submission dropped; phase -> idle");
            *self.phase.lock().unwrap_or_else(|e| e.into_inner()) = SubmissionPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::submission_notifier::NoSubmissionNotifier;
    use async_trait::async_trait;
    use coaching_domain::{InquiryDraft, InquiryField, InquirySchema};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    // ==================== Test Mocks ====================

    struct MockTransport {
        responses: Mutex<VecDeque<Result<Acknowledgement, TransportError>>>,
        calls: AtomicUsize,
    }

    impl MockTransport {
        fn new(responses: Vec<Result<Acknowledgement, TransportError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl InquiryTransport for MockTransport {
        async fn send(&self, _inquiry: &Inquiry) -> Result<Acknowledgement, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::ConnectionError("no response".into())))
        }
    }

    /// Blocks in `send` until released
    struct GatedTransport {
        started: Notify,
        release: Notify,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl InquiryTransport for GatedTransport {
        async fn send(&self, _inquiry: &Inquiry) -> Result<Acknowledgement, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.started.notify_one();
            self.release.notified().await;
            Ok(Acknowledgement::accepted())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<String>>,
    }

    impl SubmissionNotifier for RecordingNotifier {
        fn on_pending(&self) {
            self.events.lock().unwrap().push("pending".into());
        }
        fn on_success(&self, notice: &Notice) {
            self.events
                .lock()
                .unwrap()
                .push(format!("success: {}", notice.title));
        }
        fn on_error(&self, notice: &Notice) {
            self.events
                .lock()
                .unwrap()
                .push(format!("error: {}", notice.title));
        }
    }

    fn ada() -> Inquiry {
        let draft = InquiryDraft::new()
            .with(InquiryField::FirstName, "Ada")
            .with(InquiryField::LastName, "Lovelace")
            .with(InquiryField::Email, "ada@example.com")
            .with(
                InquiryField::Message,
                "I would like to discuss executive coaching.",
            );
        InquirySchema::validate(&draft).unwrap()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_successful_submission() {
        let transport = Arc::new(MockTransport::new(vec![Ok(Acknowledgement::accepted())]));
        let use_case = SubmitInquiryUseCase::new(transport.clone());
        let notifier = RecordingNotifier::default();

        assert_eq!(use_case.phase(), SubmissionPhase::Idle);
        let outcome = use_case.submit(&ada(), &notifier).await;

        assert!(outcome.is_delivered());
        assert_eq!(use_case.phase(), SubmissionPhase::Success);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *notifier.events.lock().unwrap(),
            vec!["pending".to_string(), "success: Message sent!".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rejected_submission_moves_to_error() {
        let transport = Arc::new(MockTransport::new(vec![Err(TransportError::Rejected {
            status: 400,
            message: "Invalid form data".into(),
        })]));
        let use_case = SubmitInquiryUseCase::new(transport);
        let notifier = RecordingNotifier::default();

        let outcome = use_case.submit(&ada(), &notifier).await;

        match outcome {
            SubmitOutcome::Failed(e) => assert_eq!(e.status(), Some(400)),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(use_case.phase(), SubmissionPhase::Error);
        assert_eq!(notifier.events.lock().unwrap().last().unwrap(), "error: Error");
    }

    #[tokio::test]
    async fn test_resubmit_after_error_without_automatic_retry() {
        let transport = Arc::new(MockTransport::new(vec![
            Err(TransportError::ConnectionError("refused".into())),
            Ok(Acknowledgement::accepted()),
        ]));
        let use_case = SubmitInquiryUseCase::new(transport.clone());

        let first = use_case.submit(&ada(), &NoSubmissionNotifier).await;
        assert!(!first.is_delivered());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);

        let second = use_case.submit(&ada(), &NoSubmissionNotifier).await;
        assert!(second.is_delivered());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_submit_while_pending_is_ignored() {
        let transport = Arc::new(GatedTransport {
            started: Notify::new(),
            release: Notify::new(),
            calls: AtomicUsize::new(0),
        });
        let use_case = SubmitInquiryUseCase::new(transport.clone());

        let in_flight = {
            let use_case = use_case.clone();
            tokio::spawn(async move { use_case.submit(&ada(), &NoSubmissionNotifier).await })
        };
        transport.started.notified().await;

        assert!(use_case.is_pending());
        let second = use_case.submit(&ada(), &NoSubmissionNotifier).await;
        assert!(matches!(second, SubmitOutcome::Ignored));

        // reset has no effect while pending
        use_case.reset();
        assert!(use_case.is_pending());

        transport.release.notify_one();
        let first = in_flight.await.unwrap();
        assert!(first.is_delivered());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let transport = Arc::new(MockTransport::new(vec![Ok(Acknowledgement::accepted())]));
        let use_case = SubmitInquiryUseCase::new(transport);

        use_case.submit(&ada(), &NoSubmissionNotifier).await;
        assert_eq!(use_case.phase(), SubmissionPhase::Success);

        use_case.reset();
        assert_eq!(use_case.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_dropped_submission_returns_to_idle() {
        let transport = Arc::new(GatedTransport {
            started: Notify::new(),
            release: Notify::new(),
            calls: AtomicUsize::new(0),
        });
        let use_case = SubmitInquiryUseCase::new(transport.clone());

        let in_flight = {
            let use_case = use_case.clone();
            tokio::spawn(async move { use_case.submit(&ada(), &NoSubmissionNotifier).await })
        };
        transport.started.notified().await;
        assert!(use_case.is_pending());

        in_flight.abort();
        assert!(in_flight.await.unwrap_err().is_cancelled());
        assert_eq!(use_case.phase(), SubmissionPhase::Idle);

        // A later submit goes out instead of being ignored
        transport.release.notify_one();
        let retry = use_case.submit(&ada(), &NoSubmissionNotifier).await;
        assert!(retry.is_delivered());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }
}
