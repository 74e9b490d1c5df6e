//! Panel lifecycle bookkeeping
//!
//! Every mounted panel owns a `Mount`. It carries a process-unique id that
//! outcomes are addressed to, the abort handles of the tasks the panel has
//! spawned, and the sequence number of the latest load. Dropping the mount
//! aborts whatever is still in flight.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::AbortHandle;

static NEXT_MOUNT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one mounted panel instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    fn next() -> Self {
        Self(NEXT_MOUNT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Lifecycle state of a mounted panel
#[derive(Debug)]
pub struct Mount {
    id: MountId,
    tasks: Vec<AbortHandle>,
    latest_load: u64,
}

impl Mount {
    pub fn new() -> Self {
        Self {
            id: MountId::next(),
            tasks: Vec::new(),
            latest_load: 0,
        }
    }

    pub fn id(&self) -> MountId {
        self.id
    }

    /// Remember a spawned task so it can be aborted on unmount
    pub fn track(&mut self, handle: AbortHandle) {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(handle);
    }

    /// Number of tracked tasks that have not finished yet
    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    /// Issue the sequence number for a new load
    pub fn next_load(&mut self) -> u64 {
        self.latest_load += 1;
        self.latest_load
    }

    /// Sequence number of the most recently issued load (0 before any)
    pub fn latest_load(&self) -> u64 {
        self.latest_load
    }

    /// Whether `seq` belongs to the most recently issued load
    pub fn is_latest_load(&self, seq: u64) -> bool {
        seq == self.latest_load
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Mount::new();
        let b = Mount::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_only_latest_load_is_current() {
        let mut mount = Mount::new();
        let first = mount.next_load();
        let second = mount.next_load();

        assert!(second > first);
        assert!(!mount.is_latest_load(first));
        assert!(mount.is_latest_load(second));
    }

    #[test]
    fn test_drop_aborts_tasks() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();

        let handle = runtime.spawn(std::future::pending::<()>());
        let mut mount = Mount::new();
        mount.track(handle.abort_handle());
        assert_eq!(mount.in_flight(), 1);

        drop(mount);

        let err = runtime.block_on(handle).unwrap_err();
        assert!(err.is_cancelled());
    }
}
