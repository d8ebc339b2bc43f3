//! Contact form validation and the simulated submission round trip.
//!
//! Validation reports the first failing field, mirroring the site's
//! one-toast-at-a-time behavior. Submission is a tick-driven countdown
//! standing in for the network call; it delivers a receipt exactly once.

use serde::{Deserialize, Serialize};

/// Simulated network latency in seconds.
pub const SUBMIT_LATENCY: f32 = 2.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your phone number.")]
    MissingPhone,
    #[error("Please enter a subject.")]
    MissingSubject,
    #[error("Please enter your message.")]
    MissingMessage,
}

fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

impl ContactForm {
    /// Field checks in display order; the first failure wins.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::MissingName);
        }
        if self.email.trim().is_empty() || !is_valid_email(self.email.trim()) {
            return Err(FieldError::InvalidEmail);
        }
        if self.phone.trim().is_empty() {
            return Err(FieldError::MissingPhone);
        }
        if self.subject.trim().is_empty() {
            return Err(FieldError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            return Err(FieldError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub title: String,
    pub detail: String,
}

impl Receipt {
    fn delivered() -> Self {
        Self {
            title: "Message Sent Successfully!".to_string(),
            detail: "Thank you for contacting us. We'll get back to you within 24 hours."
                .to_string(),
        }
    }
}

/// An in-flight simulated submission.
#[derive(Clone, Debug)]
pub struct Submission {
    form: ContactForm,
    remaining: f32,
    delivered: bool,
}

impl Submission {
    /// Validate the form and start the countdown.
    pub fn send(form: &ContactForm) -> Result<Self, FieldError> {
        form.validate()?;
        log::debug!("contact submission started for {}", form.email);
        Ok(Self {
            form: form.clone(),
            remaining: SUBMIT_LATENCY,
            delivered: false,
        })
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    /// Advance the countdown; yields the receipt on exactly one tick.
    pub fn tick(&mut self, dt: f32) -> Option<Receipt> {
        if self.delivered {
            return None;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.delivered = true;
            return Some(Receipt::delivered());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jordan Lee".to_string(),
            email: "jordan@example.edu".to_string(),
            phone: "+1 (234) 567-8900".to_string(),
            subject: "Admissions".to_string(),
            message: "I would like to know more about the data science program.".to_string(),
        }
    }

    #[test]
    fn first_failing_field_wins() {
        let mut form = ContactForm::default();
        assert_eq!(form.validate(), Err(FieldError::MissingName));
        form.name = "Jordan".to_string();
        assert_eq!(form.validate(), Err(FieldError::InvalidEmail));
        form.email = "not-an-email".to_string();
        assert_eq!(form.validate(), Err(FieldError::InvalidEmail));
        form.email = "jordan@example.edu".to_string();
        assert_eq!(form.validate(), Err(FieldError::MissingPhone));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("admissions@eduverse.edu"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@.c"));
    }

    #[test]
    fn submission_delivers_once() {
        let mut submission = Submission::send(&valid_form()).unwrap();
        assert!(submission.tick(1.0).is_none());
        let receipt = submission.tick(1.0).expect("delivers at the latency mark");
        assert_eq!(receipt.title, "Message Sent Successfully!");
        assert!(submission.is_delivered());
        assert!(submission.tick(1.0).is_none());
    }

    #[test]
    fn invalid_form_never_starts() {
        assert!(Submission::send(&ContactForm::default()).is_err());
    }
}
