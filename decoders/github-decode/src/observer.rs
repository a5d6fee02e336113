//! Decode observers
//!
//! Observers are told about every sequence of entities a bulk decode
//! produces. Notification is synchronous and follows registration order.
//! A failing observer is logged and skipped: it can neither stop the
//! remaining observers nor change the decode result.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{error, warn};

use crate::schema::SchemaEntity;

/// Receives every successfully bulk-decoded sequence
///
/// Any `Fn(&[&dyn SchemaEntity]) -> anyhow::Result<()>` closure is an observer.
pub trait DecodeObserver: Send + Sync {
    fn on_decoded(&self, entities: &[&dyn SchemaEntity]) -> anyhow::Result<()>;
}

impl<F> DecodeObserver for F
where
    F: Fn(&[&dyn SchemaEntity]) -> anyhow::Result<()> + Send + Sync,
{
    fn on_decoded(&self, entities: &[&dyn SchemaEntity]) -> anyhow::Result<()> {
        self(entities)
    }
}

/// Append-only list of observers
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RwLock<Vec<Arc<dyn DecodeObserver>>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer after all existing ones
    pub fn register(&self, observer: impl DecodeObserver + 'static) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(observer));
    }

    pub fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notify every observer, in registration order
    ///
    /// Observers run on a snapshot taken before the first call, so an
    /// observer may register further observers; those are notified from the
    /// next decode on. Returns the number of observers that failed.
    pub fn notify(&self, entities: &[&dyn SchemaEntity]) -> usize {
        let snapshot: Vec<Arc<dyn DecodeObserver>> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let mut failures = 0;
        for (index, observer) in snapshot.iter().enumerate() {
            match panic::catch_unwind(AssertUnwindSafe(|| observer.on_decoded(entities))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    failures += 1;
                    warn!(observer = index, error = %e, "decode observer failed");
                }
                Err(_) => {
                    failures += 1;
                    error!(observer = index, "decode observer panicked");
                }
            }
        }
        failures
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}
