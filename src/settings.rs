//! Process-wide system settings and their store.
//!
//! Two admin-mutable percentages feed the margin model: the wrap rate
//! and the minimum-profit rate. The store keeps them as a single
//! versioned snapshot behind an atomic swap so calculations read the
//! latest committed value without blocking admin updates.

use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The default wrap rate, in percent.
pub const DEFAULT_WRAP_RATE: Decimal = Decimal::from_parts(55, 0, 0, false, 0);

/// The default minimum-profit rate, in percent.
pub const DEFAULT_MINIMUM_PROFIT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// A versioned snapshot of the global pricing percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    /// Employer-side cost loading applied to salary, in percent.
    pub wrap_rate: Decimal,
    /// Minimum profit layered on salary plus wrap, in percent.
    pub minimum_profit_rate: Decimal,
    /// Monotonic version, incremented on every committed update.
    pub version: u64,
}

impl SystemSettings {
    /// Creates a version-1 snapshot with the given percentages.
    pub fn new(wrap_rate: Decimal, minimum_profit_rate: Decimal) -> Self {
        Self {
            wrap_rate,
            minimum_profit_rate,
            version: 1,
        }
    }
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_RATE, DEFAULT_MINIMUM_PROFIT_RATE)
    }
}

/// A partial update to the system settings.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    /// New wrap rate, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_rate: Option<Decimal>,
    /// New minimum-profit rate, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_profit_rate: Option<Decimal>,
}

/// The shared settings store.
///
/// Readers clone the current `Arc` snapshot and drop the lock before
/// computing, so a calculation in flight during an update legitimately
/// sees either the old or the new snapshot, never a torn one. Writers
/// replace the whole snapshot and bump its version in one commit.
#[derive(Debug)]
pub struct SettingsStore {
    current: RwLock<Arc<SystemSettings>>,
}

impl SettingsStore {
    /// Creates a store holding the default settings.
    pub fn new() -> Self {
        Self::with_settings(SystemSettings::default())
    }

    /// Creates a store seeded with the given snapshot.
    pub fn with_settings(settings: SystemSettings) -> Self {
        Self {
            current: RwLock::new(Arc::new(settings)),
        }
    }

    /// Returns the current settings snapshot.
    pub fn get(&self) -> Arc<SystemSettings> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Applies a partial update, committing a new versioned snapshot.
    ///
    /// Returns the snapshot that was committed.
    pub fn update(&self, update: SettingsUpdate) -> Arc<SystemSettings> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let previous = guard.as_ref();
        let next = Arc::new(SystemSettings {
            wrap_rate: update.wrap_rate.unwrap_or(previous.wrap_rate),
            minimum_profit_rate: update
                .minimum_profit_rate
                .unwrap_or(previous.minimum_profit_rate),
            version: previous.version + 1,
        });

        info!(
            version = next.version,
            wrap_rate = %next.wrap_rate,
            minimum_profit_rate = %next.minimum_profit_rate,
            "System settings updated"
        );

        *guard = next.clone();
        next
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
