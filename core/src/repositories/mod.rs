pub mod account;
pub mod address;
pub mod setting;
pub mod verification;

pub use account::{AccountRepository, MockAccountRepository};
pub use address::{AddressRepository, MockAddressRepository};
pub use setting::{MockSettingRepository, SettingPage, SettingRepository};
pub use verification::{MockVerificationRepository, VerificationRepository};
