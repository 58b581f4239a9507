//! Executors for batch compilation.
//!
//! Every document in a batch is compiled by its own engine run with its own
//! placeholder table, so documents can be handed to any executor without
//! further synchronisation.
//!
//! ## Available Executors
//!
//! - [`SyncExecutor`]: One document after another
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon`)

mod sync;

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;
pub use sync::SyncExecutor;

use std::fmt::Debug;

/// Runs a batch of independent work items.
///
/// # Implementations
///
/// - `SyncExecutor`: Sequential, on the calling thread
/// - `RayonExecutor`: Rayon's global pool (feature-gated)
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item. Results are in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// How many items this executor can work on at once.
    fn parallelism(&self) -> usize;

    /// Returns a human-readable name for this executor (for logging/debugging).
    fn name(&self) -> &'static str;
}
