//! Persistence layer: the `enquiries` table behind a pooled connection.
//!
//! [`store::EnquiryStore`] wraps a `sqlx::AnyPool` so one code path serves
//! MySQL in production and SQLite in the test suite; the backend is chosen
//! by the connection URL scheme. The schema is bootstrapped idempotently
//! at startup, and every insert runs in its own transaction.

pub mod models;
pub mod schema;
pub mod store;
