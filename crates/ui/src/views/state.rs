use dioxus::prelude::*;

use services::{AnalysisError, AuthError};

/// User-facing failure categories; the strings are shown verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotAuthorized,
    WrongPassword,
    PasswordMismatch,
    AnalysisDisabled,
    AnalysisTooShort,
    AnalysisUnreadable,
    AnalysisFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::NotAuthorized => "You are not authorized to access this platform.",
            ViewError::WrongPassword => "Incorrect password.",
            ViewError::PasswordMismatch => "Passwords do not match.",
            ViewError::AnalysisDisabled => {
                "Resume analysis is not configured. Set ACADEMY_ANALYZE_URL to enable it."
            }
            ViewError::AnalysisTooShort => {
                "Could not extract enough text from your resume. Please provide a longer, \
                 text-based resume."
            }
            ViewError::AnalysisUnreadable => {
                "Could not analyze your resume. Please provide a higher quality, text-based \
                 resume."
            }
            ViewError::AnalysisFailed => "An error occurred during analysis.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }

    #[must_use]
    pub fn from_auth(error: &AuthError) -> Self {
        match error {
            AuthError::NotAuthorized => ViewError::NotAuthorized,
            AuthError::WrongPassword => ViewError::WrongPassword,
            AuthError::PasswordMismatch => ViewError::PasswordMismatch,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn from_analysis(error: &AnalysisError) -> Self {
        match error {
            AnalysisError::Disabled => ViewError::AnalysisDisabled,
            AnalysisError::TextTooShort => ViewError::AnalysisTooShort,
            AnalysisError::Unreadable => ViewError::AnalysisUnreadable,
            _ => ViewError::AnalysisFailed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_the_verbatim_gate_strings() {
        assert_eq!(
            ViewError::from_auth(&AuthError::NotAuthorized).message(),
            "You are not authorized to access this platform."
        );
        assert_eq!(
            ViewError::from_auth(&AuthError::WrongPassword).message(),
            "Incorrect password."
        );
        assert_eq!(
            ViewError::from_auth(&AuthError::PasswordMismatch).message(),
            "Passwords do not match."
        );
    }

    #[test]
    fn analysis_errors_keep_their_specific_messages() {
        assert_eq!(
            ViewError::from_analysis(&AnalysisError::Disabled),
            ViewError::AnalysisDisabled
        );
        assert_eq!(
            ViewError::from_analysis(&AnalysisError::TextTooShort),
            ViewError::AnalysisTooShort
        );
        assert_eq!(
            ViewError::from_analysis(&AnalysisError::Unreadable),
            ViewError::AnalysisUnreadable
        );
    }
}
