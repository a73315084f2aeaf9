//! # Session Store
//!
//! Owns the cached wallets, orders and rates of the current user and loads
//! them from the remote API.
//!
//! A load fans out the three fetches as separate tasks. A failing fetch only
//! empties its own field. Every load takes a generation number first; when the
//! results come back they are applied only if no newer load has started, so
//! overlapping loads resolve to the newest one and never interleave.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::User;
use uuid::Uuid;

use super::state::{DegradedField, SessionField, SessionState, LOAD_ERROR_MESSAGE};
use crate::core::{ExchangeApi, Result};

/// What happened to the results of one `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Results written to the state.
    Applied,
    /// A newer load started meanwhile; results were dropped.
    Superseded,
    /// The fan-out itself failed; prior data was kept.
    Failed,
}

pub struct SessionStore {
    api: Arc<dyn ExchangeApi>,
    state: Arc<RwLock<SessionState>>,
    generation: AtomicU64,
}

impl SessionStore {
    pub fn new(api: Arc<dyn ExchangeApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(SessionState::default())),
            generation: AtomicU64::new(0),
        }
    }

    /// Shared handle to the live state, for readers that poll it.
    pub fn state(&self) -> Arc<RwLock<SessionState>> {
        Arc::clone(&self.state)
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Remember the registered user. Nothing is sent to the remote.
    ///
    /// The user's `telegram_id` becomes the session identity; data cached for
    /// a different identity is dropped first.
    pub fn set_user(&self, user: User) {
        let mut state = self.state.write();
        if state.telegram_id != Some(user.telegram_id) {
            state.clear_data();
            state.telegram_id = Some(user.telegram_id);
        }
        state.user = Some(user);
    }

    /// Load wallets, orders and rates for `telegram_id`.
    #[tracing::instrument(skip(self), fields(trace_id = %Uuid::new_v4()))]
    pub async fn load(&self, telegram_id: i64) -> LoadOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write();
            if state.telegram_id != Some(telegram_id) {
                if state.telegram_id.is_some() {
                    tracing::info!(previous = ?state.telegram_id, "Identity changed, clearing cached data");
                }
                state.clear_data();
                state.telegram_id = Some(telegram_id);
            }
            state.loading = true;
            state.error = None;
        }

        tracing::debug!(generation, "Loading session data");

        let wallets = {
            let api = Arc::clone(&self.api);
            tokio::spawn(async move { api.list_wallets(telegram_id).await })
        };
        let orders = {
            let api = Arc::clone(&self.api);
            tokio::spawn(async move { api.list_exchange_orders(telegram_id).await })
        };
        let rates = {
            let api = Arc::clone(&self.api);
            tokio::spawn(async move { api.list_rates().await })
        };

        let joined = tokio::try_join!(wallets, orders, rates);

        let mut state = self.state.write();
        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            tracing::debug!(generation, latest, "Discarding results of superseded load");
            return LoadOutcome::Superseded;
        }

        match joined {
            Ok((wallets, orders, rates)) => {
                let mut degraded = Vec::new();
                state.wallets = settle(SessionField::Wallets, wallets, &mut degraded);
                state.orders = settle(SessionField::Orders, orders, &mut degraded);
                state.rates = settle(SessionField::Rates, rates, &mut degraded);
                state.degraded = degraded;
                state.loading = false;

                tracing::info!(
                    wallets = state.wallets.len(),
                    orders = state.orders.len(),
                    rates = state.rates.len(),
                    degraded = state.degraded.len(),
                    "Session data loaded"
                );
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, "Session load aborted");
                state.error = Some(LOAD_ERROR_MESSAGE.to_string());
                state.loading = false;
                LoadOutcome::Failed
            }
        }
    }

    /// Re-run [`load`](Self::load) for the last identity.
    ///
    /// Returns `false` without doing anything when nothing was loaded yet.
    pub async fn reload(&self) -> bool {
        let telegram_id = self.state.read().telegram_id;
        match telegram_id {
            Some(telegram_id) => {
                self.load(telegram_id).await;
                true
            }
            None => {
                tracing::debug!("Reload requested before any load");
                false
            }
        }
    }
}

/// Unwrap one fetch result, degrading a failure to an empty list.
fn settle<T>(field: SessionField, result: Result<Vec<T>>, degraded: &mut Vec<DegradedField>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(field = field.name(), error = %e, "Fetch failed, using empty list");
            degraded.push(DegradedField::new(field, &e));
            Vec::new()
        }
    }
}
