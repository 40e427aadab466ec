use chrono::Utc;
use log::info;

use super::submission::FormSubmission;
use crate::config;

/// Follow-up text message sent after a lead is delivered.
/// Implementations swallow their own failures.
pub trait Notifier {
    fn notify(&self, submission: &FormSubmission);
}

/// Records what would be texted. No provider is wired up yet.
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn notify(&self, submission: &FormSubmission) {
        if let Some((phone, message)) = sms_for(submission) {
            info!(
                "[{}] SMS would be sent to {}: {}",
                Utc::now().to_rfc3339(),
                phone,
                message
            );
        }
    }
}

/// Recipient and text for a submission, or None when there is no phone.
pub fn sms_for(submission: &FormSubmission) -> Option<(String, String)> {
    let d = &submission.details;
    let phone = d.phone.trim();
    if phone.is_empty() {
        return None;
    }
    let name = match d.name.trim() {
        "" => "there",
        name => name,
    };
    let message = if submission.is_quiz() {
        format!(
            "Hi {}! Thanks for your interest in {}. We've received your quiz results and will contact you shortly about your personalized approval plan. Need immediate help? Call {}",
            name,
            config::BUSINESS_NAME,
            config::CONTACT_PHONE_DISPLAY
        )
    } else {
        let service = match d.service.trim() {
            "" => "our services",
            service => service,
        };
        format!(
            "Hi {}! Thanks for contacting {} about {}. We'll call you within 1 hour. For immediate assistance, call {}",
            name,
            config::BUSINESS_NAME,
            service,
            config::CONTACT_PHONE_DISPLAY
        )
    };
    Some((phone.to_string(), message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submission::{LeadDetails, QuizFields};

    #[test]
    fn test_no_phone_no_text() {
        let submission = FormSubmission::contact(LeadDetails {
            name: "Lee".to_string(),
            ..Default::default()
        });
        assert_eq!(sms_for(&submission), None);
    }

    #[test]
    fn test_contact_text_names_service() {
        let submission = FormSubmission::contact(LeadDetails {
            name: "Lee".to_string(),
            phone: " 7735550101 ".to_string(),
            service: "Rental Résumé Builder".to_string(),
            ..Default::default()
        });
        let (phone, message) = sms_for(&submission).unwrap();
        assert_eq!(phone, "7735550101");
        assert!(message.starts_with("Hi Lee! Thanks for contacting The Approval Hub about Rental Résumé Builder."));
        assert!(message.ends_with("+1 (773) 916-6126"));
    }

    #[test]
    fn test_defaults_for_blank_name_and_service() {
        let submission = FormSubmission::contact(LeadDetails {
            phone: "7735550101".to_string(),
            ..Default::default()
        });
        let (_, message) = sms_for(&submission).unwrap();
        assert!(message.starts_with("Hi there!"));
        assert!(message.contains("about our services."));
    }

    #[test]
    fn test_quiz_text() {
        let submission = FormSubmission::quiz_lead(
            LeadDetails {
                name: "Kim".to_string(),
                phone: "7735550101".to_string(),
                ..Default::default()
            },
            QuizFields::default(),
        );
        let (_, message) = sms_for(&submission).unwrap();
        assert!(message.contains("personalized approval plan"));
    }
}
