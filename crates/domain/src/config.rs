// crates/domain/src/config.rs
use ordered_collect_shared_kernel::{CollectError, Result};
use serde::{Deserialize, Serialize};

/// Inputs shorter than this are folded on the calling thread.
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 10;

/// How a reduction is executed. It never changes what a reduction produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Worker threads used by the parallel driver. `1` forces sequential.
    pub jobs: usize,
    /// Minimum input length before the parallel driver splits the work.
    pub min_parallel_len: usize,
}

impl ExecutionConfig {
    /// Configuration that always folds on the calling thread.
    pub fn sequential() -> Self {
        Self { jobs: 1, ..Self::default() }
    }

    pub fn with_jobs(jobs: usize) -> Self {
        Self { jobs, ..Self::default() }
    }

    /// # Errors
    ///
    /// Returns [`CollectError::InvalidConfiguration`] when `jobs` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(CollectError::InvalidConfiguration {
                reason: "jobs must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Whether an input of `len` elements should be split across workers.
    pub fn runs_parallel(&self, len: usize) -> bool {
        self.jobs > 1 && len >= self.min_parallel_len.max(2)
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            jobs: num_cpus::get().max(1),
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }
}
