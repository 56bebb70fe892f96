//! Domain entities representing core business objects.

pub mod account;
pub mod address;
pub mod identifier;
pub mod session;
pub mod setting;
pub mod verification_token;

pub use account::{Account, AccountUpdate, ProfileUpdate};
pub use address::UserAddress;
pub use identifier::{generate_prefix_code, generate_setting_code, USER_ADDRESS_PREFIX, USER_PREFIX};
pub use session::{SessionClaims, SessionCredential};
pub use setting::{NewSetting, Setting, SettingContentType, SettingUpdate};
pub use verification_token::{
    ActorType, VerificationPurpose, VerificationToken, DEFAULT_EXPIRATION_MINUTES, TOKEN_LENGTH,
};
