use gearshift::Player;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness. Set `RUST_LOG=gearshift=debug`
/// to see them.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fresh player with logging hooked up.
#[allow(dead_code)]
pub fn new_player() -> Player {
    init_tracing();
    Player::new()
}
