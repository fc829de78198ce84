//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for store operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and the data layer
//! - **Data Layer** (`data/`) - Bounded store operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models, record ids and acknowledgments
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Cross-origin policy
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the store connection)
//! - **Startup** (`startup`) - Tracing setup, store connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** decodes the body, parses ids, builds params, calls the service
//! 3. **Service** applies business rules and calls one or more repositories
//! 4. **Data** runs each store call inside a timeout scope and converts entities
//! 5. **Controller** converts the domain result to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
