#![forbid(unsafe_code)]

pub mod analysis_service;
pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod feedback;
pub mod progress_service;

pub use academy_core::Clock;

pub use analysis_service::{AnalysisConfig, AnalysisService};
pub use app_services::AppServices;
pub use auth_service::{AuthConfig, AuthService};
pub use error::{AnalysisError, AppServicesError, AuthError, ProgressServiceError};
pub use feedback::ParsedFeedback;
pub use progress_service::ProgressService;
