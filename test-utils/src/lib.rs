//! Invitations Test Utils
//!
//! Provides shared testing utilities for the invitations backend. This crate offers a
//! builder pattern for creating test contexts backed by in-memory SQLite databases, plus
//! factories that insert client and guest records with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Record factories for clients and guests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_guests() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_invitation_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let client = factory::create_client(db).await?;
//!     let guest = factory::create_guest(db, &client.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
