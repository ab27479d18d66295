//! Contact form: validation and simulated submission.
//!
//! There is no backend to deliver to; a fixed delay stands in for the
//! network call. Spam is caught by a decoy field that stays hidden from
//! human visitors and is "accepted" without ever reaching the simulated
//! delivery.

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// A per-field validation failure. The display strings are the canonical
/// English messages; pages render their localized equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Validation results, one slot per validated field so each error renders
/// inline next to its field and fields are corrected independently.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.message.is_none()
    }
}

/// The contact form's field values. `honeypot` is the decoy field: rendered
/// invisibly, left empty by humans, filled in by naive bots.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub honeypot: String,
}

/// What a submission attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was submitted.
    Invalid(ValidationErrors),
    /// The message was accepted. The form is cleared, except for the spam
    /// path, which pretends success without touching anything.
    Sent,
    /// Simulated delivery failed; the form keeps its data for a retry.
    Failed,
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

fn phone_regex() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    PHONE_RE.get_or_init(|| {
        Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").expect("valid regex")
    })
}

impl ContactForm {
    /// Whether the decoy field was filled in.
    pub fn is_spam(&self) -> bool {
        !self.honeypot.trim().is_empty()
    }

    /// Check required fields and the email/phone formats. Phone is optional;
    /// it is only validated when supplied.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(FieldError::Required);
        }

        if self.email.trim().is_empty() {
            errors.email = Some(FieldError::Required);
        } else if !email_regex().is_match(&self.email) {
            errors.email = Some(FieldError::InvalidEmail);
        }

        if self.message.trim().is_empty() {
            errors.message = Some(FieldError::Required);
        }

        if !self.phone.is_empty() && !phone_regex().is_match(&self.phone) {
            errors.phone = Some(FieldError::InvalidPhone);
        }

        errors
    }

    /// Run the full submission flow: spam short-circuit, validation, then
    /// the simulated delivery. Clears the form only on a real success.
    pub async fn submit(&mut self, delay: Duration) -> SubmitOutcome {
        if self.is_spam() {
            // Pretend success so the bot learns nothing.
            info!("Dropping spam contact submission");
            return SubmitOutcome::Sent;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            return SubmitOutcome::Invalid(errors);
        }

        let delivery = simulate_delivery(delay).await;
        self.finish(delivery)
    }

    fn finish(&mut self, delivery: anyhow::Result<()>) -> SubmitOutcome {
        match delivery {
            Ok(()) => {
                info!("Contact message from {:?} accepted", self.email);
                *self = ContactForm::default();
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Contact form delivery failed: {e:#}");
                SubmitOutcome::Failed
            }
        }
    }
}

/// Stand-in for the backend call the reference site never makes: wait the
/// configured delay, then report success.
async fn simulate_delivery(delay: Duration) -> anyhow::Result<()> {
    tokio::time::sleep(delay).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::time::Instant;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            subject: "Spreader inquiry".to_string(),
            message: "Please send a quote for the XL-2000.".to_string(),
            honeypot: "".to_string(),
        }
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_required_fields() {
        let form = ContactForm::default();
        let errors = form.validate();

        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.email, Some(FieldError::Required));
        assert_eq!(errors.message, Some(FieldError::Required));
        assert_eq!(errors.phone, None);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let form = ContactForm {
            name: "   ".to_string(),
            message: "\t\n".to_string(),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.message, Some(FieldError::Required));
    }

    #[test]
    fn test_email_format() {
        for bad in ["not-an-email", "a@b", "a b@c.com", "@example.com", "a@.com "] {
            let form = ContactForm {
                email: bad.to_string(),
                ..valid_form()
            };
            assert_eq!(
                form.validate().email,
                Some(FieldError::InvalidEmail),
                "{bad:?} should be rejected"
            );
        }

        for good in ["ada@example.com", "a.b+c@mail.example.co.uk"] {
            let form = ContactForm {
                email: good.to_string(),
                ..valid_form()
            };
            assert_eq!(form.validate().email, None, "{good:?} should be accepted");
        }
    }

    #[test]
    fn test_phone_is_optional_but_validated_when_present() {
        let mut form = valid_form();
        assert_eq!(form.validate().phone, None);

        for good in ["1234567890", "(123) 456-7890", "123-456-7890", "123.456.789012"] {
            form.phone = good.to_string();
            assert_eq!(form.validate().phone, None, "{good:?} should be accepted");
        }

        for bad in ["12", "phone me", "12 3456 7890"] {
            form.phone = bad.to_string();
            assert_eq!(
                form.validate().phone,
                Some(FieldError::InvalidPhone),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_field_errors_are_independent() {
        let form = ContactForm {
            name: "".to_string(),
            email: "broken".to_string(),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.email, Some(FieldError::InvalidEmail));
        assert_eq!(errors.message, None);
    }

    // ==================== Submission Tests ====================

    #[tokio::test]
    async fn test_invalid_form_never_submits() {
        let mut form = ContactForm::default();
        let outcome = form.submit(Duration::from_millis(1)).await;

        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.name, Some(FieldError::Required));
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_successful_submission_clears_form() {
        let mut form = valid_form();
        let outcome = form.submit(Duration::from_millis(1)).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(form, ContactForm::default());
    }

    #[tokio::test]
    async fn test_submission_waits_for_the_simulated_delay() {
        let mut form = valid_form();
        let start = Instant::now();
        let outcome = form.submit(Duration::from_millis(100)).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_spam_is_accepted_immediately() {
        let mut form = ContactForm {
            honeypot: "https://spam.example".to_string(),
            ..ContactForm::default()
        };

        // Even an otherwise-invalid form reports success, with no delay.
        let start = Instant::now();
        let outcome = form.submit(Duration::from_secs(5)).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_failed_delivery_keeps_form_data() {
        let mut form = valid_form();
        let outcome = form.finish(Err(anyhow!("simulated outage")));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form, valid_form());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::InvalidPhone.to_string(),
            "Please enter a valid phone number"
        );
    }
}
