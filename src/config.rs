//! Environment-driven tunables, read once per process.

use std::path::PathBuf;
use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

static PARALLEL_BATCH_MIN: OnceLock<usize> = OnceLock::new();

/// Smallest batch that [`crate::pipeline::decode_batch`] spreads over the rayon pool.
pub fn parallel_batch_min() -> usize {
    *PARALLEL_BATCH_MIN.get_or_init(|| parse_env_usize("BOLETO_PARALLEL_BATCH_MIN", 256).max(1))
}

static COMPANY_TABLE_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Company table file named by `BOLETO_COMPANY_TABLE`, if any.
pub fn company_table_path() -> Option<PathBuf> {
    COMPANY_TABLE_PATH
        .get_or_init(|| parse_env_path("BOLETO_COMPANY_TABLE"))
        .clone()
}
