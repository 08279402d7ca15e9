//! Selection state
//!
//! The user's in-progress pick: an ordered, symbol-unique, capacity-bounded
//! list of stocks. Requests that would exceed capacity or repeat a symbol
//! are refused without error; the mutators report whether anything changed.

pub mod picker;

pub use picker::StockPicker;

use crate::catalog::Stock;
use serde::{Deserialize, Serialize};

/// Smallest configurable selection capacity
pub const MIN_CAPACITY: usize = 3;

/// Largest configurable selection capacity
pub const MAX_CAPACITY: usize = 5;

/// Placeholder images assigned to selection slots 1-5
pub const DEFAULT_SLOT_IMAGES: [&str; MAX_CAPACITY] = [
    "/images/slot-1.png",
    "/images/slot-2.png",
    "/images/slot-3.png",
    "/images/slot-4.png",
    "/images/slot-5.png",
];

/// A selected stock with its display image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedStock {
    #[serde(flatten)]
    pub stock: Stock,

    /// Image reference chosen by the slot the stock was added into
    pub src: String,
}

impl SelectedStock {
    pub fn symbol(&self) -> &str {
        &self.stock.symbol
    }
}

/// When the "proceed" action is enabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitGate {
    /// Always enabled
    Always,
    /// Enabled once at least one stock is selected
    #[default]
    NonEmpty,
    /// Enabled only when every slot is filled
    Full,
}

impl SubmitGate {
    pub fn allows(&self, len: usize, capacity: usize) -> bool {
        match self {
            SubmitGate::Always => true,
            SubmitGate::NonEmpty => len > 0,
            SubmitGate::Full => len == capacity,
        }
    }
}

/// Selection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Maximum number of selected stocks (3..=5)
    pub capacity: usize,

    pub gate: SubmitGate,

    /// Image reference per slot; needs at least `capacity` entries
    pub slot_images: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_CAPACITY,
            gate: SubmitGate::default(),
            slot_images: DEFAULT_SLOT_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SelectionConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_gate(mut self, gate: SubmitGate) -> Self {
        self.gate = gate;
        self
    }
}

/// Ordered, deduplicated, capacity-bounded selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<SelectedStock>,
    config: SelectionConfig,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

impl Selection {
    /// Create an empty selection
    ///
    /// Capacity is clamped to `MIN_CAPACITY..=MAX_CAPACITY`. Slots without
    /// a configured image get the matching [`DEFAULT_SLOT_IMAGES`] entry.
    pub fn new(mut config: SelectionConfig) -> Self {
        config.capacity = config.capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
        let configured = config.slot_images.len();
        if configured < config.capacity {
            config.slot_images.extend(
                DEFAULT_SLOT_IMAGES[configured..config.capacity]
                    .iter()
                    .map(|s| s.to_string()),
            );
        }
        Self {
            entries: Vec::with_capacity(config.capacity),
            config,
        }
    }

    pub fn entries(&self) -> &[SelectedStock] {
        &self.entries
    }

    pub fn symbols(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.stock.symbol.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.config.capacity
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.iter().any(|e| e.stock.symbol == symbol)
    }

    /// Append `stock` unless the selection is full or already holds its
    /// symbol. Returns true if the stock was added.
    pub fn add(&mut self, stock: &Stock) -> bool {
        if self.is_full() || self.contains(&stock.symbol) {
            tracing::trace!(
                symbol = %stock.symbol,
                len = self.len(),
                "selection add refused"
            );
            return false;
        }

        let slot = self.entries.len();
        let src = self.config.slot_images.get(slot).cloned().unwrap_or_default();
        self.entries.push(SelectedStock {
            stock: stock.clone(),
            src,
        });
        tracing::trace!(symbol = %stock.symbol, slot, "selection add");
        true
    }

    /// Remove the entry with `symbol`, keeping the order of the rest.
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, symbol: &str) -> bool {
        match self.entries.iter().position(|e| e.stock.symbol == symbol) {
            Some(idx) => {
                self.entries.remove(idx);
                tracing::trace!(symbol, "selection remove");
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the configured gate enables submission
    pub fn can_submit(&self) -> bool {
        self.config.gate.allows(self.entries.len(), self.config.capacity)
    }
}
