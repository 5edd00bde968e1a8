use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::middleware::rate_limit::RateLimitState;
use crate::services::explainer::Explainer;
use crate::store::Store;

pub type StoreExplainer = Explainer<Arc<Store>>;

#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
    explainer: Arc<StoreExplainer>,
    rate_limit: Arc<RateLimitState>,
    config: Arc<Config>,
    shutdown_tx: broadcast::Sender<()>,
    started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<Store>, config: &Config, shutdown_tx: broadcast::Sender<()>) -> Self {
        let explainer = Arc::new(
            Explainer::new(store.clone(), Catalog::builtin())
                .with_search_limit(config.search.limit),
        );
        let rate_limit = Arc::new(RateLimitState::new(
            config.rate_limit.window_secs,
            config.rate_limit.max_requests,
        ));

        Self {
            store,
            explainer,
            rate_limit,
            config: Arc::new(config.clone()),
            shutdown_tx,
            started_at: Instant::now(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn explainer(&self) -> &StoreExplainer {
        &self.explainer
    }

    pub fn rate_limit(&self) -> &Arc<RateLimitState> {
        &self.rate_limit
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shutdown_rx(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
