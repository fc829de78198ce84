//! `SeaORM` Entity prelude

pub use super::client::Entity as Client;
pub use super::guest::Entity as Guest;
