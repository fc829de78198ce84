//! `SeaORM` Entity definitions for the invitation store.

pub mod prelude;

pub mod client;
pub mod guest;
