use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::field::{FieldKind, FormField};
use super::mail_fallback::BrowserMailHandoff;
use super::notifier::LoggingNotifier;
use super::pipeline::{submit, SubmitOutcome};
use super::relay::FormRelay;
use super::submission::{check_field, FormKind, FormSubmission, LeadDetails};
use crate::components::scroll::scroll_to_section;
use crate::error::ValidationError;

const SERVICES: &[&str] = &[
    "Rental Résumé Builder",
    "Approval Partner Program",
    "Total Turnaround Package",
    "Not sure yet",
];

#[derive(Clone, Debug, PartialEq)]
pub enum Banner {
    Success(&'static str),
    Error(String),
}

/// Per-field messages currently shown under the inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<String> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| m.clone())
    }

    pub fn set(&mut self, field: &'static str, message: Option<String>) {
        self.0.retain(|(f, _)| *f != field);
        if let Some(message) = message {
            self.0.push((field, message));
        }
    }
}

impl From<&ValidationError> for FieldErrors {
    fn from(err: &ValidationError) -> Self {
        FieldErrors(err.fields.iter().map(|f| (f.field, f.message.clone())).collect())
    }
}

/// Field marks plus the summary banner shown when a form fails validation.
pub fn validation_feedback(err: &ValidationError) -> (FieldErrors, Banner) {
    (FieldErrors::from(err), Banner::Error(err.to_string()))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let details = use_state(LeadDetails::default);
    let errors = use_state(FieldErrors::default);
    let banner = use_state(|| None::<Banner>);
    let is_submitting = use_state(|| false);

    let on_input = {
        let details = details.clone();
        let errors = errors.clone();
        Callback::from(move |(field, value): (&'static str, String)| {
            let mut next = (*details).clone();
            next.set(field, value);
            details.set(next);
            let mut cleared = (*errors).clone();
            cleared.set(field, None);
            errors.set(cleared);
        })
    };

    let on_blur = {
        let details = details.clone();
        let errors = errors.clone();
        Callback::from(move |field: &'static str| {
            let mut next = (*errors).clone();
            next.set(field, check_field(field, details.get(field), FormKind::Contact.is_required(field)));
            errors.set(next);
        })
    };

    let onsubmit = {
        let details = details.clone();
        let errors = errors.clone();
        let banner = banner.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let submission = FormSubmission::contact((*details).clone());
            if let Err(err) = submission.validate() {
                let (marks, summary) = validation_feedback(&err);
                errors.set(marks);
                banner.set(Some(summary));
                return;
            }

            is_submitting.set(true);
            banner.set(None);
            let details = details.clone();
            let errors = errors.clone();
            let banner = banner.clone();
            let is_submitting = is_submitting.clone();
            spawn_local(async move {
                let result = submit(
                    &submission,
                    &FormRelay::default(),
                    &BrowserMailHandoff,
                    &LoggingNotifier,
                )
                .await;
                match result {
                    Ok(outcome) => {
                        info!("Contact form finished: {:?}", outcome);
                        if outcome == SubmitOutcome::Delivered {
                            details.set(LeadDetails::default());
                        }
                        errors.set(FieldErrors::default());
                        banner.set(Some(Banner::Success(outcome.confirmation(&submission))));
                        scroll_to_section("contact");
                    }
                    Err(err) => {
                        let (marks, summary) = validation_feedback(&err);
                        errors.set(marks);
                        banner.set(Some(summary));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let field = |name: &'static str, label: &'static str, kind: FieldKind, placeholder: &'static str| {
        html! {
            <FormField
                {name}
                {label}
                {kind}
                {placeholder}
                value={details.get(name).to_string()}
                required={FormKind::Contact.is_required(name)}
                error={errors.get(name)}
                on_input={on_input.clone()}
                on_blur={on_blur.clone()}
            />
        }
    };

    html! {
        <form id="contactForm" class="contact-form" novalidate=true {onsubmit}>
            <div class="form-row">
                {field("name", "Full Name", FieldKind::Text, "Your full name")}
                {field("email", "Email", FieldKind::Email, "you@example.com")}
            </div>
            <div class="form-row">
                {field("phone", "Phone", FieldKind::Tel, "(773) 555-0123")}
                {field("service", "Service", FieldKind::Select(SERVICES), "")}
            </div>
            {field("message", "Tell us about your situation", FieldKind::TextArea, "Anything we should know?")}
            <button id="submitButton" type="submit" class="btn btn-primary" disabled={*is_submitting}>
                {if *is_submitting { "Sending..." } else { "Get My Free Consultation" }}
            </button>
            {
                match &*banner {
                    Some(Banner::Success(message)) => html! {
                        <div id="formMessage" class="form-message success">{*message}</div>
                    },
                    Some(Banner::Error(message)) => html! {
                        <div id="formMessage" class="form-message error">{message}</div>
                    },
                    None => html! {},
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submission::QuizFields;
    use crate::quiz::recommendation::Tier;

    #[test]
    fn test_services_cover_every_tier() {
        for tier in Tier::ALL {
            assert!(SERVICES.contains(&tier.name()));
        }
    }

    #[test]
    fn test_field_errors_replace_and_clear() {
        let mut errors = FieldErrors::default();
        errors.set("email", Some("bad".to_string()));
        errors.set("email", Some("worse".to_string()));
        assert_eq!(errors.get("email"), Some("worse".to_string()));
        errors.set("email", None);
        assert_eq!(errors, FieldErrors::default());
    }

    #[test]
    fn test_required_matches_contact_validation() {
        let err = FormSubmission::contact(LeadDetails::default())
            .validate()
            .unwrap_err();
        let marked = FieldErrors::from(&err);
        for field in FormKind::Contact.required() {
            assert!(marked.get(field).is_some(), "{} not marked", field);
        }
        assert!(marked.get("message").is_none());
    }

    #[test]
    fn test_failed_quiz_lead_gets_marks_and_summary() {
        let submission = FormSubmission::quiz_lead(
            LeadDetails {
                name: "Rae Collins".to_string(),
                ..Default::default()
            },
            QuizFields::default(),
        );
        let err = submission.validate().unwrap_err();
        let (marks, summary) = validation_feedback(&err);
        assert_eq!(summary, Banner::Error("Please fix the errors above.".to_string()));
        assert!(marks.get("email").is_some());
        assert!(marks.get("phone").is_some());
        assert!(marks.get("name").is_none());
    }
}
