//! # enquiry-service
//!
//! REST backend that captures contact-form enquiries into a relational
//! store.
//!
//! The service exposes a single business endpoint, `POST /enquiry`, which
//! validates a JSON contact form and persists it as one row in the
//! `enquiries` table. Two form variants exist: one carries a `phone`
//! field and answers with a confirmation message, the other carries an
//! `interest` field and echoes the submitted data. The active variant is
//! chosen by configuration at startup.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── CORS / Trace / Timeout layers
//!     ├── REST Handlers (api/)
//!     │
//!     ├── EnquiryStore (persistence/)
//!     │
//!     └── MySQL or SQLite (sqlx AnyPool)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod persistence;
