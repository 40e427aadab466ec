use log::{info, warn};
use web_sys::window;

use super::submission::FormSubmission;
use crate::config;

/// Hands a prepared `mailto:` link to whatever composes mail locally.
/// Delivery can't be confirmed from here.
pub trait MailHandoff {
    fn open(&self, mailto: &str);
}

/// Navigates the window to the link so the default mail client opens.
pub struct BrowserMailHandoff;

impl MailHandoff for BrowserMailHandoff {
    fn open(&self, mailto: &str) {
        match window() {
            Some(window) => {
                if window.location().set_href(mailto).is_err() {
                    warn!("Browser refused to open the mail client");
                } else {
                    info!("Opened mail client fallback");
                }
            }
            None => warn!("No window available for mail fallback"),
        }
    }
}

pub fn fallback_body(submission: &FormSubmission) -> String {
    let d = &submission.details;
    let mut body = format!(
        "New {} Submission - Fallback Method\n\
         ============================================\n\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n",
        if submission.is_quiz() { "Quiz Lead" } else { "Contact Form" },
        d.name.trim(),
        d.email.trim(),
        d.phone.trim(),
    );
    if let Some(quiz) = &submission.quiz {
        body.push_str(&format!(
            "Concern: {}\nTimeline: {}\nRecommended: {}\n",
            quiz.quiz_concern, quiz.quiz_timeline, quiz.quiz_recommendation
        ));
    } else {
        body.push_str(&format!("Service: {}\n\nMessage:\n{}\n", d.service, d.message));
    }
    body.push_str("\nThis was sent via the fallback method as the form relay may be having issues.\n");
    body
}

pub fn build_mailto(submission: &FormSubmission) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(&submission.kind.subject()),
        urlencoding::encode(&fallback_body(submission)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submission::{LeadDetails, QuizFields};

    fn details() -> LeadDetails {
        LeadDetails {
            name: "Sam Ortiz".to_string(),
            email: "sam@example.com".to_string(),
            phone: "773-555-0188".to_string(),
            service: "Total Turnaround Package".to_string(),
            message: "Evicted in 2021 & need help".to_string(),
        }
    }

    #[test]
    fn test_mailto_is_encoded() {
        let link = build_mailto(&FormSubmission::contact(details()));
        assert!(link.starts_with(
            "mailto:approvalhub466@gmail.com?subject=New%20Contact%20Form%20-%20The%20Approval%20Hub&body="
        ));
        let body = link.split("&body=").nth(1).unwrap();
        assert!(!body.contains(' '));
        assert!(!body.contains('&'));
        assert!(!body.contains('\n'));
        assert!(body.contains("Sam%20Ortiz"));
    }

    #[test]
    fn test_contact_body_has_message() {
        let body = fallback_body(&FormSubmission::contact(details()));
        assert!(body.contains("Service: Total Turnaround Package"));
        assert!(body.contains("Message:\nEvicted in 2021 & need help"));
        assert!(!body.contains("Concern:"));
    }

    #[test]
    fn test_quiz_body_has_answers() {
        let submission = FormSubmission::quiz_lead(
            details(),
            QuizFields {
                quiz_concern: "history".to_string(),
                quiz_timeline: "asap".to_string(),
                quiz_recommendation: "Rental Résumé Builder".to_string(),
            },
        );
        let body = fallback_body(&submission);
        assert!(body.starts_with("New Quiz Lead Submission"));
        assert!(body.contains("Concern: history\nTimeline: asap\nRecommended: Rental Résumé Builder"));
        assert!(build_mailto(&submission).contains("subject=New%20Quiz%20Lead"));
    }
}
