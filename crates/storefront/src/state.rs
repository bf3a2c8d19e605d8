//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use charkha_core::ProductId;

use crate::assistant::Assistant;
use crate::config::StorefrontConfig;
use crate::payments::PaymentGateway;
use crate::store::{OrderStore, ProductStore};

/// Recommendation cache TTL; model output for a user is reused briefly
/// instead of being refetched per render.
const RECOMMENDATION_TTL: Duration = Duration::from_secs(5 * 60);
const RECOMMENDATION_CACHE_CAPACITY: u64 = 1_000;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the capability implementations (stores, payment
/// gateway, assistant).
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    products: Arc<dyn ProductStore>,
    orders: Arc<dyn OrderStore>,
    gateway: Arc<dyn PaymentGateway>,
    assistant: Arc<dyn Assistant>,
    recommendation_cache: Cache<String, Vec<ProductId>>,
}

impl AppState {
    /// Create a new application state from its capability parts.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        products: Arc<dyn ProductStore>,
        orders: Arc<dyn OrderStore>,
        gateway: Arc<dyn PaymentGateway>,
        assistant: Arc<dyn Assistant>,
    ) -> Self {
        let recommendation_cache = Cache::builder()
            .max_capacity(RECOMMENDATION_CACHE_CAPACITY)
            .time_to_live(RECOMMENDATION_TTL)
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                orders,
                gateway,
                assistant,
                recommendation_cache,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the product catalog store.
    #[must_use]
    pub fn products(&self) -> &dyn ProductStore {
        self.inner.products.as_ref()
    }

    /// Get the order store.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderStore {
        self.inner.orders.as_ref()
    }

    /// Get the payment gateway.
    #[must_use]
    pub fn gateway(&self) -> &dyn PaymentGateway {
        self.inner.gateway.as_ref()
    }

    /// Get the AI assistant.
    #[must_use]
    pub fn assistant(&self) -> &dyn Assistant {
        self.inner.assistant.as_ref()
    }

    /// Get the per-user recommendation cache.
    #[must_use]
    pub fn recommendation_cache(&self) -> &Cache<String, Vec<ProductId>> {
        &self.inner.recommendation_cache
    }
}
