//! Form submission: validate, post to the relay, fall back to mail.

use log::{error, info};

use super::mail_fallback::{build_mailto, MailHandoff};
use super::notifier::Notifier;
use super::relay::Relay;
use super::submission::FormSubmission;
use crate::error::{TransportError, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The relay accepted the post.
    Delivered,
    /// The relay failed and the mail client was opened instead.
    FallbackOpened(TransportError),
}

impl SubmitOutcome {
    /// Both outcomes are reported as a success to the visitor.
    pub fn confirmation(&self, submission: &FormSubmission) -> &'static str {
        match (self, submission.is_quiz()) {
            (SubmitOutcome::Delivered, false) => "✅ Message sent! We'll contact you within 1 hour. We'll also text you at the number provided.",
            (SubmitOutcome::FallbackOpened(_), false) => "✅ Message sent via fallback method! We'll contact you shortly.",
            (SubmitOutcome::Delivered, true) => "Your Personalized Approval Plan has been sent! We'll also text you shortly.",
            (SubmitOutcome::FallbackOpened(_), true) => "Please check your email and phone for our response.",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            SubmitOutcome::Delivered => "Success! Check Your Email & Phone.",
            SubmitOutcome::FallbackOpened(_) => "Success! We'll contact you shortly.",
        }
    }
}

/// Runs one submission. Validation failures return before anything is sent;
/// every other path resolves to an outcome the caller can show as success.
pub async fn submit<R, M, N>(
    submission: &FormSubmission,
    relay: &R,
    mail: &M,
    notifier: &N,
) -> Result<SubmitOutcome, ValidationError>
where
    R: Relay + ?Sized,
    M: MailHandoff + ?Sized,
    N: Notifier + ?Sized,
{
    submission.validate()?;

    match relay.post(submission).await {
        Ok(()) => {
            info!("{:?} form delivered", submission.kind);
            notifier.notify(submission);
            Ok(SubmitOutcome::Delivered)
        }
        Err(e) => {
            error!("Form submission error: {}", e);
            mail.open(&build_mailto(submission));
            Ok(SubmitOutcome::FallbackOpened(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submission::{LeadDetails, QuizFields};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct StubRelay {
        result: Result<(), TransportError>,
        calls: Cell<usize>,
    }

    impl StubRelay {
        fn ok() -> Self {
            Self { result: Ok(()), calls: Cell::new(0) }
        }

        fn failing(error: TransportError) -> Self {
            Self { result: Err(error), calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl Relay for StubRelay {
        async fn post(&self, _submission: &FormSubmission) -> Result<(), TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingMail {
        opened: RefCell<Vec<String>>,
    }

    impl MailHandoff for RecordingMail {
        fn open(&self, mailto: &str) {
            self.opened.borrow_mut().push(mailto.to_string());
        }
    }

    #[derive(Default)]
    struct CountingNotifier {
        calls: Cell<usize>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, _submission: &FormSubmission) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn valid_contact() -> FormSubmission {
        FormSubmission::contact(LeadDetails {
            name: "Dana Whitfield".to_string(),
            email: "dana@example.com".to_string(),
            phone: "312-555-0199".to_string(),
            service: "Approval Partner Program".to_string(),
            message: String::new(),
        })
    }

    #[test]
    fn test_delivered_notifies_and_skips_fallback() {
        let relay = StubRelay::ok();
        let mail = RecordingMail::default();
        let notifier = CountingNotifier::default();

        let outcome = block_on(submit(&valid_contact(), &relay, &mail, &notifier));

        assert_eq!(outcome, Ok(SubmitOutcome::Delivered));
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(notifier.calls.get(), 1);
        assert!(mail.opened.borrow().is_empty());
    }

    #[test]
    fn test_failed_relay_opens_mail_once() {
        let relay = StubRelay::failing(TransportError::Status(500));
        let mail = RecordingMail::default();
        let notifier = CountingNotifier::default();
        let submission = valid_contact();

        let outcome = block_on(submit(&submission, &relay, &mail, &notifier)).unwrap();

        assert_eq!(outcome, SubmitOutcome::FallbackOpened(TransportError::Status(500)));
        assert_eq!(mail.opened.borrow().len(), 1);
        assert!(mail.opened.borrow()[0].starts_with("mailto:approvalhub466@gmail.com?subject="));
        assert_eq!(notifier.calls.get(), 0);
        assert!(outcome.confirmation(&submission).starts_with("✅ Message sent via fallback"));
    }

    #[test]
    fn test_network_error_is_treated_like_bad_status() {
        let relay = StubRelay::failing(TransportError::Network("TypeError: Failed to fetch".to_string()));
        let mail = RecordingMail::default();
        let notifier = CountingNotifier::default();

        let outcome = block_on(submit(&valid_contact(), &relay, &mail, &notifier)).unwrap();

        assert!(matches!(outcome, SubmitOutcome::FallbackOpened(TransportError::Network(_))));
        assert_eq!(mail.opened.borrow().len(), 1);
    }

    #[test]
    fn test_invalid_form_never_reaches_relay() {
        let relay = StubRelay::ok();
        let mail = RecordingMail::default();
        let notifier = CountingNotifier::default();
        let mut submission = valid_contact();
        submission.details.email = String::new();

        let err = block_on(submit(&submission, &relay, &mail, &notifier)).unwrap_err();

        assert!(err.has("email"));
        assert_eq!(relay.calls.get(), 0);
        assert!(mail.opened.borrow().is_empty());
        assert_eq!(notifier.calls.get(), 0);
    }

    #[test]
    fn test_quiz_lead_confirmation() {
        let relay = StubRelay::ok();
        let mail = RecordingMail::default();
        let notifier = CountingNotifier::default();
        let submission = FormSubmission::quiz_lead(
            valid_contact().details,
            QuizFields {
                quiz_concern: "income".to_string(),
                quiz_timeline: "flexible".to_string(),
                quiz_recommendation: "Total Turnaround Package".to_string(),
            },
        );

        let outcome = block_on(submit(&submission, &relay, &mail, &notifier)).unwrap();

        assert_eq!(outcome.headline(), "Success! Check Your Email & Phone.");
        assert!(outcome.confirmation(&submission).contains("Personalized Approval Plan"));
    }

    #[test]
    fn test_quiz_lead_fallback_confirmation() {
        let relay = StubRelay::failing(TransportError::Network("offline".to_string()));
        let mail = RecordingMail::default();
        let notifier = CountingNotifier::default();
        let submission = FormSubmission::quiz_lead(
            valid_contact().details,
            QuizFields {
                quiz_concern: "history".to_string(),
                quiz_timeline: "asap".to_string(),
                quiz_recommendation: "Rental Résumé Builder".to_string(),
            },
        );

        let outcome = block_on(submit(&submission, &relay, &mail, &notifier)).unwrap();

        assert!(matches!(outcome, SubmitOutcome::FallbackOpened(_)));
        assert_eq!(outcome.headline(), "Success! We'll contact you shortly.");
        assert_eq!(
            outcome.confirmation(&submission),
            "Please check your email and phone for our response."
        );
        assert_eq!(mail.opened.borrow().len(), 1);
        assert!(mail.opened.borrow()[0].contains("subject=New%20Quiz%20Lead"));
        assert_eq!(notifier.calls.get(), 0);
    }
}
