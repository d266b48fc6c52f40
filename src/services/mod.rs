pub mod lift_block;
pub mod nutrition;
pub mod schedule;
pub mod session_builder;
pub mod validator;

pub use nutrition::calculate_daily_needs;
pub use schedule::generate_weekly_plan;
