//! The write boundary.
//!
//! Every create, update and delete runs through [`with_transaction`]. The
//! operation receives a connection borrowed from an open transaction; if it
//! returns an error of any kind the transaction is rolled back and the error
//! is reported as [`CoreError::Persistence`]. The connection goes back to the
//! pool when the transaction is dropped, whatever the outcome.

use futures::future::BoxFuture;
use fyyur_core::error::CoreError;
use sqlx::{PgConnection, PgPool};

/// Run `op` inside a transaction, committing only if it succeeds.
///
/// Failures to begin or commit are folded into the same
/// [`CoreError::Persistence`] outcome as failures raised by `op` itself.
///
/// ```ignore
/// let venue = with_transaction(&pool, move |conn| {
///     async move { Ok(VenueRepo::create(conn, &input).await?) }.boxed()
/// })
/// .await?;
/// ```
pub async fn with_transaction<T, F>(pool: &PgPool, op: F) -> Result<T, CoreError>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, anyhow::Result<T>>,
{
    let mut tx = pool.begin().await.map_err(|e| failure(e.into()))?;

    match op(&mut *tx).await {
        Ok(value) => {
            tx.commit().await.map_err(|e| failure(e.into()))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "Rollback failed");
            }
            Err(failure(err))
        }
    }
}

fn failure(err: anyhow::Error) -> CoreError {
    tracing::warn!(error = %format!("{err:#}"), "Write transaction rolled back");
    CoreError::Persistence(err.to_string())
}
