//! Pool-backed store for enquiry rows.

use std::sync::Once;
use std::time::Duration;

use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

use super::models::{Enquiry, NewEnquiry};
use super::schema::DbBackend;
use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Registers the compiled-in sqlx `Any` drivers exactly once per process.
static DRIVERS: Once = Once::new();

/// Row tuple for `SELECT … FROM enquiries`, in column order.
type EnquiryRow = (
    i64,
    String,
    String,
    Option<String>,
    String,
    String,
    Option<String>,
    String,
);

/// Database-backed store for [`Enquiry`] records using `sqlx::AnyPool`.
///
/// Cloning is cheap (the pool is shared). Constructed once at startup and
/// injected into the HTTP layer through application state; the pool is the
/// only shared resource in the service.
#[derive(Debug, Clone)]
pub struct EnquiryStore {
    pool: AnyPool,
    backend: DbBackend,
}

impl EnquiryStore {
    /// Connects to the database named by the configuration.
    ///
    /// The backend is chosen by the URL scheme. Pool sizing and the
    /// acquire timeout come from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] for an unsupported URL scheme and
    /// [`ServiceError::Persistence`] when the connection cannot be
    /// established. Callers treat either as fatal at startup; there is no
    /// retry.
    pub async fn connect(config: &ServiceConfig) -> Result<Self, ServiceError> {
        DRIVERS.call_once(sqlx::any::install_default_drivers);

        let backend = DbBackend::from_url(&config.database_url)?;

        let pool = AnyPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        Ok(Self { pool, backend })
    }

    /// Creates the `enquiries` table if it does not exist yet.
    ///
    /// Idempotent; called once at startup before the server accepts
    /// requests.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), ServiceError> {
        sqlx::query(self.backend.create_table_sql())
            .execute(&self.pool)
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        Ok(())
    }

    /// Inserts a new enquiry and returns the stored row.
    ///
    /// Runs in a single transaction: insert, read back the assigned id on
    /// the same connection, reload the row, commit. On any failure the
    /// transaction is dropped and rolls back, so no partial row ever
    /// becomes visible, and the pooled connection is returned either way.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn insert(&self, record: &NewEnquiry) -> Result<Enquiry, ServiceError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        sqlx::query(
            "INSERT INTO enquiries (name, email, phone, company, employees, interest, message) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.name.as_str())
        .bind(record.email.as_str())
        .bind(record.phone.as_deref())
        .bind(record.company.as_str())
        .bind(record.employees.as_str())
        .bind(record.interest.as_deref())
        .bind(record.message.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        let id: i64 = sqlx::query_scalar(self.backend.last_insert_id_sql())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        let row = sqlx::query_as::<_, EnquiryRow>(
            "SELECT id, name, email, phone, company, employees, interest, message \
             FROM enquiries WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        Ok(row_to_enquiry(row))
    }

    /// Fetches a stored enquiry by id, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Enquiry>, ServiceError> {
        let row = sqlx::query_as::<_, EnquiryRow>(
            "SELECT id, name, email, phone, company, employees, interest, message \
             FROM enquiries WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ServiceError::Persistence(e.to_string()))?;

        Ok(row.map(row_to_enquiry))
    }

    /// Returns the number of stored enquiries.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::Persistence`] on database failure.
    pub async fn count(&self) -> Result<i64, ServiceError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM enquiries")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))
    }

    /// Returns the backend this store connected to.
    #[must_use]
    pub const fn backend(&self) -> DbBackend {
        self.backend
    }

    /// Returns a reference to the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Closes the pool, waiting for checked-out connections to return.
    ///
    /// Called once during graceful shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Maps a `SELECT` row tuple onto the [`Enquiry`] model, field by field.
fn row_to_enquiry(row: EnquiryRow) -> Enquiry {
    let (id, name, email, phone, company, employees, interest, message) = row;
    Enquiry {
        id,
        name,
        email,
        phone,
        company,
        employees,
        interest,
        message,
    }
}
