//! Process-lifetime cache of documentation indexes
//!
//! One outcome is recorded per assembly name: either the built index or the
//! failure that stopped the build. Both outcomes are terminal — there is no
//! invalidation and no retry — so a sidecar file is read and parsed at most
//! once per process, and a broken or absent file costs I/O only once.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::assembly::AssemblyRef;
use crate::doc_index::{DocIndex, ParseMode};
use crate::error::{DocsError, DocsResult};

#[derive(Debug, Clone)]
enum CacheSlot {
    Built(Arc<DocIndex>),
    Failed(DocsError),
}

/// Cache of one `DocIndex` (or one recorded failure) per assembly name
#[derive(Debug, Default)]
pub struct DocIndexCache {
    slots: Mutex<HashMap<String, CacheSlot>>,
}

impl DocIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the assembly's index, building it on first use
    ///
    /// The lock is held across the build, so concurrent first-time lookups
    /// for the same assembly cannot parse the sidecar file twice. A recorded
    /// failure is replayed on every later call without touching the file
    /// system.
    pub fn get_or_load(
        &self,
        assembly: &AssemblyRef,
        mode: ParseMode,
    ) -> DocsResult<Arc<DocIndex>> {
        let mut slots = self
            .slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(slot) = slots.get(&assembly.name) {
            return match slot {
                CacheSlot::Built(index) => Ok(Arc::clone(index)),
                CacheSlot::Failed(err) => Err(err.clone()),
            };
        }

        match DocIndex::load(assembly, mode) {
            Ok(index) => {
                let index = Arc::new(index);
                slots.insert(assembly.name.clone(), CacheSlot::Built(Arc::clone(&index)));
                Ok(index)
            }
            Err(err) => {
                log::warn!(
                    "Documentation index build failed for {}: {}",
                    assembly.name,
                    err
                );
                slots.insert(assembly.name.clone(), CacheSlot::Failed(err.clone()));
                Err(err)
            }
        }
    }

    /// Number of assemblies with a recorded outcome, built or failed
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
