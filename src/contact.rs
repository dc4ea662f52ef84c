use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// How long the form shows "Sending..." before reporting success.
pub const SENDING_DELAY: Duration = Duration::from_millis(1000);
/// How long the success message stays up before the form goes back to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("Couldn't open your mail client")]
    Navigation,
    #[error("A message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => return Err(ContactError::InvalidEmail(email.to_string())),
        }
        Ok(())
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// Builds `mailto:<address>?subject=..&body=..`, falling back to
    /// `default_subject` when the subject field is blank.
    pub fn mailto(&self, address: &str, default_subject: &str) -> Result<String, ContactError> {
        self.validate()?;
        let subject = if self.subject.trim().is_empty() {
            default_subject
        } else {
            &self.subject
        };
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            address,
            urlencoding::encode(subject),
            urlencoding::encode(&self.body())
        ))
    }
}

/// Form values plus the submission lifecycle:
/// `Idle -> Loading -> Success -> Idle`, with `Error` on a failed submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub form: ContactForm,
    status: SubmitStatus,
    error: Option<ContactError>,
}

impl Submission {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn error(&self) -> Option<&ContactError> {
        self.error.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.status == SubmitStatus::Loading
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        if self.status == SubmitStatus::Error {
            self.status = SubmitStatus::Idle;
            self.error = None;
        }
    }

    /// Validates and enters `Loading`, returning the URI to navigate to.
    pub fn begin(&mut self, address: &str, default_subject: &str) -> Result<String, ContactError> {
        if self.is_busy() {
            return Err(ContactError::Busy);
        }
        match self.form.mailto(address, default_subject) {
            Ok(uri) => {
                self.status = SubmitStatus::Loading;
                self.error = None;
                Ok(uri)
            }
            Err(e) => {
                self.fail(e.clone());
                Err(e)
            }
        }
    }

    pub fn fail(&mut self, err: ContactError) {
        self.status = SubmitStatus::Error;
        self.error = Some(err);
    }

    /// `Loading -> Success`, clearing the fields. Ignored in any other state.
    pub fn finish(&mut self) {
        if self.status != SubmitStatus::Loading {
            return;
        }
        self.status = SubmitStatus::Success;
        self.form = ContactForm::default();
    }

    /// `Success -> Idle`. Ignored in any other state.
    pub fn reset(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "someone@example.com";
    const DEFAULT_SUBJECT: &str = "Contact from Portfolio";

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jo".to_string(),
            email: "jo@x.io".to_string(),
            subject: "Hello there".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn test_mailto_uri() {
        let uri = filled().mailto(ADDRESS, DEFAULT_SUBJECT).unwrap();
        assert_eq!(
            uri,
            "mailto:someone@example.com?subject=Hello%20there\
             &body=Name%3A%20Jo%0AEmail%3A%20jo%40x.io%0A%0AMessage%3A%0AHi"
        );
    }

    #[test]
    fn test_mailto_encodes_reserved_characters() {
        let mut form = filled();
        form.subject = "Q&A = 100%?".to_string();
        form.message = "a&b=c".to_string();
        let uri = form.mailto(ADDRESS, DEFAULT_SUBJECT).unwrap();
        let (_, query) = uri.split_once('?').unwrap();
        let parts: Vec<&str> = query.split('&').collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "subject=Q%26A%20%3D%20100%25%3F");
        assert!(parts[1].ends_with("a%26b%3Dc"));
    }

    #[test]
    fn test_blank_subject_uses_default() {
        let mut form = filled();
        form.subject = "   ".to_string();
        let uri = form.mailto(ADDRESS, DEFAULT_SUBJECT).unwrap();
        assert!(uri.contains("?subject=Contact%20from%20Portfolio&"));
    }

    #[test]
    fn test_required_fields() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.set(field, "");
            assert_eq!(
                form.mailto(ADDRESS, DEFAULT_SUBJECT),
                Err(ContactError::MissingField(field))
            );
        }
        let mut form = filled();
        form.set(Field::Subject, "");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_invalid_email() {
        for email in ["nope", "@x.io", "jo@", "a@b@c"] {
            let mut form = filled();
            form.set(Field::Email, email);
            assert_eq!(
                form.validate(),
                Err(ContactError::InvalidEmail(email.to_string()))
            );
        }
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut sub = Submission {
            form: filled(),
            ..Default::default()
        };
        assert_eq!(sub.status(), SubmitStatus::Idle);

        let uri = sub.begin(ADDRESS, DEFAULT_SUBJECT).unwrap();
        assert!(uri.starts_with("mailto:someone@example.com?"));
        assert_eq!(sub.status(), SubmitStatus::Loading);
        assert!(sub.is_busy());
        // Double submit while sending is rejected and keeps the form
        assert_eq!(sub.begin(ADDRESS, DEFAULT_SUBJECT), Err(ContactError::Busy));
        assert_eq!(sub.status(), SubmitStatus::Loading);
        assert_eq!(sub.form, filled());

        sub.finish();
        assert_eq!(sub.status(), SubmitStatus::Success);
        assert_eq!(sub.form, ContactForm::default());

        sub.reset();
        assert_eq!(sub.status(), SubmitStatus::Idle);
        assert!(sub.error().is_none());
    }

    #[test]
    fn test_submission_error_state() {
        let mut sub = Submission::default();
        let err = sub.begin(ADDRESS, DEFAULT_SUBJECT).unwrap_err();
        assert_eq!(err, ContactError::MissingField(Field::Name));
        assert_eq!(sub.status(), SubmitStatus::Error);
        assert_eq!(sub.error(), Some(&err));
        assert_eq!(err.to_string(), "Name is required");

        // Stale timers don't move an errored form
        sub.finish();
        sub.reset();
        assert_eq!(sub.status(), SubmitStatus::Error);

        sub.edit(Field::Name, "Jo");
        assert_eq!(sub.status(), SubmitStatus::Idle);
        assert!(sub.error().is_none());

        sub.form = filled();
        sub.begin(ADDRESS, DEFAULT_SUBJECT).unwrap();
        sub.fail(ContactError::Navigation);
        assert_eq!(sub.status(), SubmitStatus::Error);
        assert_eq!(sub.form, filled());
    }
}
