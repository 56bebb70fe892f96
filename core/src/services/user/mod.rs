//! Profile and address management for signed-in users

mod service;

#[cfg(test)]
mod tests;

pub use service::UserService;
