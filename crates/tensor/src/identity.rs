//! Tensor identity providers
//!
//! Hosts that track tensors by id inject a provider; the default mints random
//! UUIDs. Hosts wanting the original sequential-id scheme use the counter
//! provider instead of a hidden process-wide global.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of default tensor ids
pub trait IdProvider: Send + Sync {
    /// Mint a fresh id, unique within the provider's scope
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Sequential ids from an atomic counter
#[derive(Debug, Default)]
pub struct CounterProvider {
    next: AtomicU64,
}

impl CounterProvider {
    /// Start counting from `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdProvider for CounterProvider {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
