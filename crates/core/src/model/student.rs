use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudentError {
    #[error("email cannot be empty")]
    EmptyEmail,

    #[error("email must contain an @")]
    InvalidEmail,
}

/// The signed-in student record.
///
/// Emails are stored trimmed and lowercased. When no display name is given,
/// the local part of the email is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    email: String,
    name: String,
}

impl Student {
    /// Creates a student from a raw email and an optional display name.
    ///
    /// # Errors
    ///
    /// Returns `StudentError` if the email is blank or has no `@`.
    pub fn new(email: impl Into<String>, name: Option<String>) -> Result<Self, StudentError> {
        let email = email.into().trim().to_lowercase();
        if email.is_empty() {
            return Err(StudentError::EmptyEmail);
        }
        if !email.contains('@') {
            return Err(StudentError::InvalidEmail);
        }

        let fallback = email.split('@').next().unwrap_or(&email).to_owned();
        let name = name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or(fallback);

        Ok(Self { email, name })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_email() {
        let student = Student::new("  Ada@Example.COM ", Some("Ada".into())).unwrap();
        assert_eq!(student.email(), "ada@example.com");
        assert_eq!(student.name(), "Ada");
    }

    #[test]
    fn name_falls_back_to_local_part() {
        let student = Student::new("ada.lovelace@example.com", None).unwrap();
        assert_eq!(student.name(), "ada.lovelace");

        let student = Student::new("ada@example.com", Some("   ".into())).unwrap();
        assert_eq!(student.name(), "ada");
    }

    #[test]
    fn rejects_bad_email() {
        assert_eq!(Student::new("  ", None), Err(StudentError::EmptyEmail));
        assert_eq!(Student::new("nope", None), Err(StudentError::InvalidEmail));
    }
}
