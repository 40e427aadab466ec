use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FieldError, ValidationError};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
// Digits with the usual separators, optional leading +
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9()\-.\s]{7,20}$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    QuizLead,
}

impl FormKind {
    pub fn subject(&self) -> String {
        match self {
            FormKind::Contact => format!("New Contact Form - {}", crate::config::BUSINESS_NAME),
            FormKind::QuizLead => format!("New Quiz Lead - {}", crate::config::BUSINESS_NAME),
        }
    }

    pub fn required(&self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &["name", "email", "phone", "service"],
            FormKind::QuizLead => &["name", "email", "phone"],
        }
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required().contains(&field)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl LeadDetails {
    pub fn get(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "service" => &self.service,
            "message" => &self.message,
            _ => "",
        }
    }

    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "service" => self.service = value,
            "message" => self.message = value,
            _ => log::warn!("Ignoring unknown form field {}", field),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizFields {
    pub quiz_concern: String,
    pub quiz_timeline: String,
    pub quiz_recommendation: String,
}

/// Everything sent for one form post. Lives only for the duration of a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    pub kind: FormKind,
    pub details: LeadDetails,
    pub quiz: Option<QuizFields>,
}

impl FormSubmission {
    pub fn contact(details: LeadDetails) -> Self {
        Self {
            kind: FormKind::Contact,
            details,
            quiz: None,
        }
    }

    pub fn quiz_lead(details: LeadDetails, quiz: QuizFields) -> Self {
        Self {
            kind: FormKind::QuizLead,
            details,
            quiz: Some(quiz),
        }
    }

    pub fn is_quiz(&self) -> bool {
        self.kind == FormKind::QuizLead
    }

    /// Field set in the order the relay receives it.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let d = &self.details;
        let mut fields = vec![
            ("name", d.name.trim().to_string()),
            ("email", d.email.trim().to_string()),
            ("phone", d.phone.trim().to_string()),
        ];
        if self.kind == FormKind::Contact {
            fields.push(("service", d.service.clone()));
            fields.push(("message", d.message.clone()));
        }
        if let Some(quiz) = &self.quiz {
            fields.push(("quiz_concern", quiz.quiz_concern.clone()));
            fields.push(("quiz_timeline", quiz.quiz_timeline.clone()));
            fields.push(("quiz_recommendation", quiz.quiz_recommendation.clone()));
        }
        fields.push(("_subject", self.kind.subject()));
        fields
    }

    /// `application/x-www-form-urlencoded` body for the relay.
    pub fn encode_body(&self) -> String {
        self.fields()
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields: Vec<FieldError> = self
            .kind
            .required()
            .iter()
            .filter_map(|field| {
                check_field(field, self.details.get(field), true).map(|message| FieldError {
                    field: *field,
                    message,
                })
            })
            .collect();

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }
}

/// Constraint check for one field, as run on blur and before submitting.
/// Returns the message to show under the field.
pub fn check_field(field: &str, value: &str, required: bool) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return required.then(|| "This field is required".to_string());
    }
    match field {
        "email" if !EMAIL_RE.is_match(value) => {
            Some("Please enter a valid email address".to_string())
        }
        "phone" if !PHONE_RE.is_match(value) || digit_count(value) < 10 => {
            Some("Please enter a valid phone number".to_string())
        }
        "name" if value.chars().count() < 2 => {
            Some("Please enter your full name".to_string())
        }
        _ => None,
    }
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}
