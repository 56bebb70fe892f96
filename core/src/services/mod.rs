//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod setting;
pub mod token;
pub mod user;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, RegisterInput};
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use setting::{SettingInput, SettingService};
pub use token::{TokenService, TokenServiceConfig};
pub use user::UserService;
pub use verification::{
    CredentialIssuer, MailDeliveryTrait, MailMessage, MailTemplate, RateLimitStatus, RateLimiterTrait,
    VerificationService, VerificationServiceConfig,
};
