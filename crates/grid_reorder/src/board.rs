use core::fmt::{self, Display, Formatter};
use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::drag::DropResult;
use crate::error::GridError;
use crate::item::{Item, default_items};
use crate::partition::{Line, line_count, partition};
use crate::reorder::{BoundaryRule, reorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    items_per_line: usize,
    pub boundary_rule: BoundaryRule,
}

impl GridConfig {
    pub const MIN_ITEMS_PER_LINE: usize = 1;

    pub fn new(items_per_line: usize, boundary_rule: BoundaryRule) -> Self {
        Self {
            items_per_line: items_per_line.max(Self::MIN_ITEMS_PER_LINE),
            boundary_rule,
        }
    }

    pub const fn items_per_line(&self) -> usize {
        self.items_per_line
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(3, BoundaryRule::default())
    }
}

/// The session's flat order and line width.
///
/// Line count and line views are derived on every read, so they can never
/// disagree with the flat order or the configured width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    seed: Vec<Item>,
    items: Vec<Item>,
    config: GridConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(default_items(), GridConfig::default())
    }
}

impl Board {
    pub fn new(seed: Vec<Item>, config: GridConfig) -> Self {
        Self {
            items: seed.clone(),
            seed,
            config,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub const fn config(&self) -> GridConfig {
        self.config
    }

    pub const fn items_per_line(&self) -> usize {
        self.config.items_per_line
    }

    pub const fn line_count(&self) -> usize {
        line_count(self.items.len(), self.config.items_per_line)
    }

    pub fn lines(&self) -> Vec<Line<'_, Item>> {
        partition(&self.items, self.config.items_per_line)
    }

    pub const fn set_boundary_rule(&mut self, rule: BoundaryRule) {
        self.config.boundary_rule = rule;
    }

    pub fn increase_items_per_line(&mut self) -> bool {
        self.set_items_per_line(self.config.items_per_line + 1)
    }

    /// Floors at one item per line. Returns `false` when already there.
    pub fn decrease_items_per_line(&mut self) -> bool {
        self.set_items_per_line(self.config.items_per_line.saturating_sub(1))
    }

    fn set_items_per_line(&mut self, items_per_line: usize) -> bool {
        let items_per_line = items_per_line.max(GridConfig::MIN_ITEMS_PER_LINE);
        if items_per_line == self.config.items_per_line {
            return false;
        }
        self.config.items_per_line = items_per_line;
        info!(
            "{items_per_line} items per line, {} lines",
            self.line_count()
        );
        true
    }

    /// Applies a completed gesture. Returns whether the order changed.
    pub fn apply_drop(&mut self, drop: &DropResult) -> Result<bool, GridError> {
        let (source, destination) = drop.positions().inspect_err(|err| {
            warn!("rejected drop: {err}");
        })?;

        let reordered = reorder(
            &self.items,
            self.config.items_per_line,
            source,
            destination,
            self.config.boundary_rule,
        )
        .inspect_err(|err| warn!("rejected drop: {err}"))?;

        match reordered {
            Cow::Borrowed(_) => Ok(false),
            Cow::Owned(items) => {
                self.items = items;
                info!("moved {source:?} to {destination:?}: {self}");
                Ok(true)
            }
        }
    }

    /// Restores the seed order. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        if self.items == self.seed {
            return false;
        }
        self.items.clone_from(&self.seed);
        info!("order reset");
        true
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (row, line) in self.lines().iter().enumerate() {
            if row > 0 {
                write!(f, " | ")?;
            }
            let labels: Vec<&str> = line.items().iter().map(|item| item.label.as_str()).collect();
            write!(f, "{}", labels.join(" "))?;
        }
        Ok(())
    }
}
