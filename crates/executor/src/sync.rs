use crate::Executor;

/// Compiles documents one after another on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        log::trace!("Running {} item(s) sequentially", items.len());
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_executor_processes_items_in_order() {
        let results = SyncExecutor.execute_all(vec![3, 1, 2], |x| x * 10);
        assert_eq!(results, vec![30, 10, 20]);
        assert_eq!(SyncExecutor.parallelism(), 1);
    }

    #[test]
    fn sync_executor_collects_errors_in_place() {
        let results: Vec<Result<u32, String>> = SyncExecutor.execute_all(vec!["1", "x", "3"], |s| {
            s.parse::<u32>().map_err(|e| e.to_string())
        });
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2], Ok(3));
    }

    #[test]
    fn sync_executor_empty_input() {
        let results: Vec<usize> = SyncExecutor.execute_all(Vec::<String>::new(), |s| s.len());
        assert!(results.is_empty());
    }
}
