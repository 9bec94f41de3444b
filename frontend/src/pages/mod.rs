pub mod attendance;
pub mod dashboard;
pub mod home;
pub mod sign_in;

pub use attendance::CustomerAttendancePage;
pub use dashboard::CustomerDashboardPage;
pub use home::HomePage;
pub use sign_in::SignInPage;
