//! Store repository layer for clients and guests.
//!
//! Repositories hold a borrowed `DatabaseConnection`, run every statement inside a
//! bounded operation scope (see [`scope`]), and convert entity models into domain
//! models before returning them. The guest repository reaches clients only through
//! the narrow [`client::ClientLookup`] interface.

pub mod client;
pub mod guest;
pub mod scope;

#[cfg(test)]
mod test;
