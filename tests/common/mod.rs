use axum_test::TestServer;
use robosvc_api::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Builds the AppState under test on the per-test database.
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Spins up an in-process server over the full router.
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = robosvc_api::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
