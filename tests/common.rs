#![allow(dead_code)]
use chrono::NaiveDateTime;
use rreporter::utils::date::parse_datetime;
use rreporter::{BasicReporter, Reporter, Timeframe};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route library logs to the test output (`RUST_LOG=debug cargo test`)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn dt(s: &str) -> NaiveDateTime {
    parse_datetime(s).unwrap_or_else(|| panic!("bad datetime in test: {s}"))
}

/// Reporter with timeframe and range already set
pub fn reporter(tf: Timeframe, since: &str, till: &str) -> BasicReporter {
    init_tracing();
    let mut r = BasicReporter::new();
    r.set_timeframe(tf).set_since(dt(since)).set_till(dt(till));
    r
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn temp_config(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rreporter.conf", name));
    fs::remove_file(&path).ok();
    path
}
