//! Password hashing behind a trait so services can be tested without bcrypt's cost

mod hasher;

pub use hasher::{BcryptPasswordHasher, PasswordHasher};
