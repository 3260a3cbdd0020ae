//! CPU baseline cache
//!
//! CPU usage requires delta measurements between two time points, so the
//! accounting handle for each process has to survive from one cycle to
//! the next. Handles for identifiers that disappear are evicted every
//! cycle, which also keeps a reused identifier from inheriting a stale
//! baseline.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Per-process CPU handles keyed by PID
#[derive(Debug)]
pub struct CpuBaselineCache<H> {
    handles: HashMap<u32, H>,
}

impl<H> CpuBaselineCache<H> {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    /// Returns the cached handle for `pid`, creating one with `open` if
    /// none exists. A failed `open` leaves the cache unchanged.
    pub fn get_or_open<E>(
        &mut self,
        pid: u32,
        open: impl FnOnce(u32) -> Result<H, E>,
    ) -> Result<&mut H, E> {
        match self.handles.entry(pid) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(open(pid)?)),
        }
    }

    /// Drops handles whose PID is not in `live`. Returns how many went.
    pub fn evict_absent(&mut self, live: &HashSet<u32>) -> usize {
        let before = self.handles.len();
        self.handles.retain(|pid, _| live.contains(pid));
        before - self.handles.len()
    }

    #[cfg(test)]
    pub fn contains(&self, pid: u32) -> bool {
        self.handles.contains_key(&pid)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

impl<H> Default for CpuBaselineCache<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_open_reuses_handle() {
        let mut cache: CpuBaselineCache<u32> = CpuBaselineCache::new();
        let mut opened = 0;
        for _ in 0..3 {
            let h = cache
                .get_or_open(7, |_| -> Result<u32, ()> {
                    opened += 1;
                    Ok(0)
                })
                .unwrap();
            *h += 1;
        }
        assert_eq!(opened, 1);
        assert_eq!(cache.get_or_open(7, |_| Err::<u32, ()>(())), Ok(&mut 3));
    }

    #[test]
    fn test_failed_open_is_not_cached() {
        let mut cache: CpuBaselineCache<u32> = CpuBaselineCache::new();
        assert!(cache.get_or_open(1, |_| Err::<u32, &str>("denied")).is_err());
        assert!(!cache.contains(1));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_evict_absent() {
        let mut cache: CpuBaselineCache<()> = CpuBaselineCache::new();
        for pid in [1, 2, 3] {
            cache.get_or_open(pid, |_| Ok::<(), ()>(())).unwrap();
        }
        let live: HashSet<u32> = [2].into_iter().collect();
        assert_eq!(cache.evict_absent(&live), 2);
        assert!(cache.contains(2));
        assert!(!cache.contains(1));
        assert!(!cache.contains(3));
    }
}
