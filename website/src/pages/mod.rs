pub mod blog;
pub mod home;
pub mod not_found;
