use crate::listing::{ApplyOutcome, ListingController, ListingState};
use catalog_models::Selector;
use catalog_sources::ContentGateway;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A listing that several tasks can drive at once.
///
/// The lock is only held to issue and to apply a request, never across the
/// gateway call, so a selector switch can overtake a slower earlier fetch.
/// The controller's generation check then drops the late response.
#[derive(Clone)]
pub struct SharedListing {
    inner: Arc<Mutex<ListingController>>,
    gateway: Arc<dyn ContentGateway>,
}

impl SharedListing {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ListingController::new())),
            gateway,
        }
    }

    pub async fn select(&self, selector: impl Into<Selector>) -> ApplyOutcome {
        let request = self.inner.lock().await.initialize(selector);
        let result = self.gateway.fetch(&request.selector, request.page).await;
        self.inner.lock().await.apply(&request, result)
    }

    pub async fn load_next(&self) -> Option<ApplyOutcome> {
        let request = self.inner.lock().await.load_next()?;
        let result = self.gateway.fetch(&request.selector, request.page).await;
        Some(self.inner.lock().await.apply(&request, result))
    }

    pub async fn snapshot(&self) -> ListingState {
        self.inner.lock().await.state().clone()
    }

    pub async fn generation(&self) -> u64 {
        self.inner.lock().await.generation()
    }

    pub async fn reset(&self) {
        self.inner.lock().await.reset();
    }
}
