//! Address repository module.

mod r#trait;
pub use r#trait::AddressRepository;

mod mock;
pub use mock::MockAddressRepository;

#[cfg(test)]
mod tests;
