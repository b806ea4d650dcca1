//! Orchestration services for the account module.

mod auth;
mod users;

pub use auth::{AuthError, AuthResult, AuthService, LoginRequest, RegisterRequest};
pub use users::{
    UpdateProfileRequest, UserService, UserServiceError, UserServiceResult,
};
