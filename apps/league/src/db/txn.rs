use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::debug;

/// Boxed future borrowing the transaction it runs in.
pub type TxnFuture<'c, R, E> = Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>;

/// Run `f` inside one transaction: commit on `Ok`, roll back on `Err`.
///
/// The closure receives the open transaction and must return a boxed future,
/// e.g. `with_txn(db, move |txn| Box::pin(async move { ... }))`.
pub async fn with_txn<R, E, F>(db: &DatabaseConnection, f: F) -> Result<R, E>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R, E>,
    E: From<DbErr>,
{
    let txn = db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rollback_err) = txn.rollback().await {
                debug!(error = %rollback_err, "txn.rollback_failed");
            }
            Err(err)
        }
    }
}
