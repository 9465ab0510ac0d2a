use std::env;
use std::sync::Arc;

use tracing::info;

use academy_core::Clock;
use academy_core::model::Student;
use storage::repository::SessionRepository;

use crate::error::AuthError;

/// The allow-list roster plus the shared platform password.
///
/// There is deliberately no hashing: this mirrors the platform's gate, a
/// fixed password handed to an approved cohort, not account security.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    allowed_emails: Vec<String>,
    shared_password: String,
}

impl AuthConfig {
    /// The built-in cohort roster.
    #[must_use]
    pub fn default_roster() -> Self {
        Self {
            allowed_emails: vec!["aerthea.branch@gmail.com".to_owned()],
            shared_password: "1323345tzxc".to_owned(),
        }
    }

    /// Reads `ACADEMY_ROSTER` (comma-separated emails) and
    /// `ACADEMY_PASSWORD`, falling back to the built-in roster.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default_roster();
        let allowed_emails = env::var("ACADEMY_ROSTER")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|email| email.trim().to_lowercase())
                    .filter(|email| !email.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|emails| !emails.is_empty())
            .unwrap_or(defaults.allowed_emails);
        let shared_password =
            env::var("ACADEMY_PASSWORD").unwrap_or(defaults.shared_password);
        Self {
            allowed_emails,
            shared_password,
        }
    }

    #[must_use]
    pub fn new(allowed_emails: Vec<String>, shared_password: impl Into<String>) -> Self {
        Self {
            allowed_emails: allowed_emails
                .into_iter()
                .map(|email| email.trim().to_lowercase())
                .collect(),
            shared_password: shared_password.into(),
        }
    }

    #[must_use]
    pub fn is_allowed(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.allowed_emails.iter().any(|allowed| *allowed == email)
    }
}

/// Sign-in, registration, and sign-out against the session record.
#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
    clock: Clock,
    sessions: Arc<dyn SessionRepository>,
}

impl AuthService {
    #[must_use]
    pub fn new(config: AuthConfig, clock: Clock, sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            config,
            clock,
            sessions,
        }
    }

    /// Validates the allow-list and password, then persists the student.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthorized` for an unlisted email,
    /// `AuthError::WrongPassword` for a bad password, and storage or
    /// validation errors otherwise.
    pub async fn sign_in(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Student, AuthError> {
        if !self.config.is_allowed(email) {
            return Err(AuthError::NotAuthorized);
        }
        if password != self.config.shared_password {
            return Err(AuthError::WrongPassword);
        }

        let name = Some(name.to_owned()).filter(|n| !n.trim().is_empty());
        let student = Student::new(email, name)?;
        self.sessions
            .store_student(&student, self.clock.now())
            .await?;
        info!(email = student.email(), "student signed in");
        Ok(student)
    }

    /// Sign-in plus a confirm-password equality check.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordMismatch` when the confirmation differs,
    /// plus everything `sign_in` can return.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Student, AuthError> {
        if !self.config.is_allowed(email) {
            return Err(AuthError::NotAuthorized);
        }
        if password != self.config.shared_password {
            return Err(AuthError::WrongPassword);
        }
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        self.sign_in(name, email, password).await
    }

    /// # Errors
    ///
    /// Returns `AuthError::Storage` on storage failure.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.sessions.clear_student().await?;
        info!("student signed out");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AuthError::Storage` on storage failure.
    pub async fn current_student(&self) -> Result<Option<Student>, AuthError> {
        Ok(self.sessions.current_student().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    fn service() -> AuthService {
        AuthService::new(
            AuthConfig::default_roster(),
            fixed_clock(),
            Arc::new(InMemoryRepository::new()),
        )
    }

    #[tokio::test]
    async fn unlisted_email_is_rejected() {
        let err = service()
            .sign_in("Mallory", "mallory@example.com", "1323345tzxc")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::NotAuthorized));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let err = service()
            .sign_in("", "aerthea.branch@gmail.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WrongPassword));
    }

    #[tokio::test]
    async fn sign_in_persists_the_student() {
        let service = service();
        let student = service
            .sign_in("", "  Aerthea.Branch@Gmail.com ", "1323345tzxc")
            .await
            .unwrap();
        assert_eq!(student.email(), "aerthea.branch@gmail.com");
        assert_eq!(student.name(), "aerthea.branch");

        let current = service.current_student().await.unwrap();
        assert_eq!(current, Some(student));

        service.sign_out().await.unwrap();
        assert_eq!(service.current_student().await.unwrap(), None);
    }

    #[tokio::test]
    async fn register_checks_confirmation() {
        let err = service()
            .register(
                "Aerthea",
                "aerthea.branch@gmail.com",
                "1323345tzxc",
                "1323345tzx",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));

        let student = service()
            .register(
                "Aerthea Branch",
                "aerthea.branch@gmail.com",
                "1323345tzxc",
                "1323345tzxc",
            )
            .await
            .unwrap();
        assert_eq!(student.name(), "Aerthea Branch");
    }

    #[test]
    fn roster_matching_is_case_insensitive() {
        let config = AuthConfig::new(vec!["Student@School.edu".into()], "pw");
        assert!(config.is_allowed(" student@school.EDU "));
        assert!(!config.is_allowed("other@school.edu"));
    }
}
