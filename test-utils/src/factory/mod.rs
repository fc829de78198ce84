//! Factory methods for creating test data.
//!
//! Factories insert client and guest records with sensible defaults, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let client = factory::create_client(&db).await?;
//! let guest = factory::create_guest(&db, &client.id).await?;
//!
//! let (client, guests) = factory::helpers::create_client_with_guests(&db, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let client = factory::client::ClientFactory::new(&db)
//!     .name("Acme")
//!     .invitation_types("wedding")
//!     .build()
//!     .await?;
//! ```

pub mod client;
pub mod guest;
pub mod helpers;

pub use client::create_client;
pub use guest::create_guest;
