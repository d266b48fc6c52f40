pub mod nutrition;
pub mod plan;
pub mod profile;
pub mod session;
