//! Optional parallel fan-out for computing child value hashes before the
//! canonical left fold (§5).
//!
//! `fuse`'s associativity (invariant #3) means the *set* of child hashes
//! can be computed in any order or on any number of threads without
//! changing the final folded result — only the fold itself is fixed
//! left-to-right. This module governs *how* child hashes are computed,
//! never *what* they are; it carries no effect on identity.
//!
//! Thread-pool enablement is read from a single environment variable,
//! following the usual `rayon` convention of an env-gated opt-in rather
//! than a config file.

use std::env;

const THREADS_ENV: &str = "DACITE_RAYON_THREADS";

/// Threshold below which parallel fan-out isn't worth the overhead.
const PAR_THRESHOLD: usize = 64;

/// Runtime configuration for parallel child-hash fan-out.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub enabled: bool,
}

impl Config {
    /// Read `DACITE_RAYON_THREADS` from the environment. A value of `0` (or
    /// an unset/unparseable variable) disables fan-out even when the
    /// `rayon` feature is compiled in; any positive value enables it
    /// (rayon's own global pool controls the actual thread count).
    pub fn from_env() -> Self {
        let enabled = env::var(THREADS_ENV)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|n| n > 0)
            .unwrap_or(cfg!(feature = "rayon"));
        Config { enabled }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enabled: cfg!(feature = "rayon"),
        }
    }
}

/// Map `f` over `items`, in parallel when the `rayon` feature is enabled,
/// the config allows it, and there are enough items to make it worthwhile;
/// sequential otherwise. The result order always matches `items`' order.
pub fn map_items<T, R, F>(items: &[T], config: Config, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    #[cfg(feature = "rayon")]
    {
        if config.enabled && items.len() >= PAR_THRESHOLD {
            use rayon::prelude::*;
            return items.par_iter().map(|item| f(item)).collect();
        }
    }
    #[cfg(not(feature = "rayon"))]
    {
        let _ = config;
    }
    items.iter().map(|item| f(item)).collect()
}
