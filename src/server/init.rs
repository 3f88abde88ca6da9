/**
 * App Construction
 *
 * Assembles the application from an already-connected store handle:
 * state first, then the router. Kept separate from `main` so tests can
 * build the same app against an in-memory store.
 */

use axum::Router;

use crate::routes::create_router;
use crate::server::state::AppState;
use crate::store::Store;

/// Build the Axum app around a connected store handle.
pub fn create_app(store: Store) -> Router {
    tracing::info!("initializing askboard router");
    create_router(AppState { store })
}
