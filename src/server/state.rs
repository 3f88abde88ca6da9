/**
 * Application State
 *
 * The router state holds exactly one shared resource: the document store
 * handle. It is constructed once at process start and injected into
 * handlers; there is no process-wide singleton and no other shared
 * mutable state.
 *
 * The `FromRef` implementation lets handlers extract `State<Store>`
 * directly instead of taking the whole `AppState`.
 */

use axum::extract::FromRef;

use crate::store::Store;

/// Shared state for the router.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle
    pub store: Store,
}

impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
