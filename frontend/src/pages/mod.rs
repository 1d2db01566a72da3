pub mod auth;
pub mod blogs;
