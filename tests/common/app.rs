use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::Router;

use kurdlearn_backend::config::Config;
use kurdlearn_backend::routes::build_router;
use kurdlearn_backend::state::AppState;
use kurdlearn_backend::store::Store;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

/// Fresh app over a temporary store with the standard seed applied. Each test
/// gets its own isolated store, so suites can run concurrently.
pub fn spawn_test_app() -> TestApp {
    let config = Config {
        host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
        port: 3000,
        log_level: "info".to_string(),
        enable_file_logs: false,
        log_dir: "./logs".to_string(),
        sled_path: String::new(),
        ephemeral_store: true,
        cors_origin: "http://localhost:5173".to_string(),
    };

    let store = Arc::new(Store::open_temporary().expect("open temporary store"));
    store.run_seed().expect("seed reference data");

    let state = AppState::new(store, &config);
    let app = build_router(state.clone());

    TestApp { app, state }
}
