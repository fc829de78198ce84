//! Service layer between controllers and repositories.
//!
//! Services construct repositories over the shared connection, turn missing
//! records into `NotFound`, and apply the request-level rules that sit above a
//! single store call (guest client defaulting, empty list translation).

pub mod client;
pub mod guest;
