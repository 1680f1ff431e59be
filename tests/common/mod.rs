//! Shared test utilities.

#![allow(dead_code)]

use hello_mvi::ui::greeting::{GreetingViewState, StateSubscription};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Upper bound for anything the fold task should finish promptly.
pub const STEP_TIMEOUT: Duration = Duration::from_secs(2);

/// Wait for the next state, failing the test if none arrives in time.
pub async fn next_state(states: &mut StateSubscription) -> GreetingViewState {
    tokio::time::timeout(STEP_TIMEOUT, states.next())
        .await
        .expect("timed out waiting for state")
        .expect("state stream closed")
}

/// Wait for the next state and return its label text.
pub async fn next_message(states: &mut StateSubscription) -> String {
    next_state(states).await.hello_message
}

/// Assert that no further state arrives within a short window.
pub async fn assert_quiet(states: &mut StateSubscription) {
    let extra = tokio::time::timeout(Duration::from_millis(100), states.next()).await;
    assert!(extra.is_err(), "unexpected state: {extra:?}");
}

/// Write `content` to `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
