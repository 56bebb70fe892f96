//! Value objects representing immutable domain concepts.

pub mod auth_session;
pub mod setting_query;

pub use auth_session::AuthSession;
pub use setting_query::{SettingQuery, SORTABLE_COLUMNS};
