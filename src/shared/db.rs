// src/shared/db.rs
//
// Every repository call is bounded by this timeout, scoped to the single
// request. Elapsing it is reported as a store failure; there is no retry.
use std::future::Future;
use std::time::Duration;

pub const STORE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, thiserror::Error)]
#[error("store call exceeded {:?}", STORE_TIMEOUT)]
pub struct StoreTimeout;

pub async fn with_store_timeout<F, T, E>(fut: F) -> Result<Result<T, E>, StoreTimeout>
where
    F: Future<Output = Result<T, E>>,
{
    tokio::time::timeout(STORE_TIMEOUT, fut)
        .await
        .map_err(|_| StoreTimeout)
}
