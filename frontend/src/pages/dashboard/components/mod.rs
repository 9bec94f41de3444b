pub mod activity;
pub mod membership;
pub mod status;

pub use activity::RecentActivity;
pub use membership::MembershipCard;
pub use status::CheckInCard;
