mod courses;
mod dashboard;
mod guard;
mod home;
mod lesson;
mod login;
mod register;
mod resume;
mod state;
mod verification;
pub mod widgets;

pub use courses::CoursesView;
pub use dashboard::DashboardView;
pub use guard::{RequireStudent, use_current_student};
pub use home::HomeView;
pub use lesson::LessonView;
pub use login::LoginView;
pub use register::RegisterView;
pub use resume::ResumeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use verification::VerificationView;
