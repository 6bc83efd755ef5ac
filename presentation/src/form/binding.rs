//! Contact form binding
//!
//! Holds what the visitor typed, the inline errors from the last submit
//! attempt, and the submission client. A shell renders from it and forwards
//! change and submit events to it.

use coaching_application::{SubmissionNotifier, SubmitInquiryUseCase, SubmitOutcome};
use coaching_domain::{InquiryDraft, InquiryField, InquirySchema, SubmissionPhase, ValidationErrors};
use std::collections::BTreeMap;

const SUBMIT_LABEL: &str = "Send Message";
const PENDING_LABEL: &str = "Sending...";

/// Result of [`ContactForm::submit`]
#[derive(Debug)]
pub enum FormSubmitResult {
    /// Local validation failed; nothing was sent
    Invalid(ValidationErrors),
    /// The inquiry went through the submission client
    Submitted(SubmitOutcome),
}

impl FormSubmitResult {
    pub fn is_delivered(&self) -> bool {
        matches!(self, FormSubmitResult::Submitted(outcome) if outcome.is_delivered())
    }
}

/// State behind the contact form
pub struct ContactForm {
    draft: InquiryDraft,
    errors: BTreeMap<InquiryField, String>,
    client: SubmitInquiryUseCase,
}

impl ContactForm {
    pub fn new(client: SubmitInquiryUseCase) -> Self {
        Self {
            draft: InquiryDraft::new(),
            errors: BTreeMap::new(),
            client,
        }
    }

    /// Start from pre-filled values (e.g. command-line arguments)
    pub fn with_draft(mut self, draft: InquiryDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn value(&self, field: InquiryField) -> &str {
        self.draft.get(field)
    }

    /// Inline error shown under `field`, if any
    pub fn error(&self, field: InquiryField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Fields currently showing an error, in form order
    pub fn errors(&self) -> impl Iterator<Item = (InquiryField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    /// Change handler for one input.
    ///
    /// A field already showing an error is checked again, so the message
    /// follows the edit and disappears once the value is valid. Editing also
    /// dismisses a settled result.
    pub fn set_value(&mut self, field: InquiryField, value: impl Into<String>) {
        self.draft.set(field, value);
        if self.errors.contains_key(&field) {
            match InquirySchema::validate_field(field, self.draft.get(field)).first() {
                Some(violation) => {
                    self.errors.insert(field, violation.message(field));
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }
        self.client.reset();
    }

    /// Validate and, if valid, send the inquiry.
    pub async fn submit(&mut self, notifier: &dyn SubmissionNotifier) -> FormSubmitResult {
        let inquiry = match InquirySchema::validate(&self.draft) {
            Ok(inquiry) => inquiry,
            Err(errors) => {
                self.errors = errors
                    .fields()
                    .into_iter()
                    .filter_map(|field| errors.first_message(field).map(|m| (field, m)))
                    .collect();
                return FormSubmitResult::Invalid(errors);
            }
        };
        self.errors.clear();

        let outcome = self.client.submit(&inquiry, notifier).await;
        if outcome.is_delivered() {
            self.draft.clear();
        }
        FormSubmitResult::Submitted(outcome)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.client.phase()
    }

    pub fn is_pending(&self) -> bool {
        self.client.is_pending()
    }

    /// Caption of the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
