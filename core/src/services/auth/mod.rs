//! Authentication service module
//!
//! Registration, login and the two password operations. Registration hands
//! off to the verification service to mail the confirmation link.

mod config;
mod service;
mod types;


pub use config::AuthServiceConfig;
pub use service::AuthService;
pub use types::RegisterInput;
