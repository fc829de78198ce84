//! Wire-level DTOs shared by the HTTP API.
//!
//! Identifiers are carried as their 24 character hexadecimal text encoding; conversion
//! to the server's `RecordId` happens at the controller boundary.

pub mod api;
pub mod client;
pub mod guest;
