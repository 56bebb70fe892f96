//! Settings service module

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::SettingService;
pub use types::SettingInput;
