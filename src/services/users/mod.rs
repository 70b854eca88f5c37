pub mod user_service;
#[cfg(test)]
pub mod fixtures;

pub use user_service::{LoginResult, UserService};
