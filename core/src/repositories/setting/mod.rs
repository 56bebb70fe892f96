//! Setting repository module.

mod r#trait;
pub use r#trait::{SettingPage, SettingRepository};

mod mock;
pub use mock::MockSettingRepository;

#[cfg(test)]
mod tests;
