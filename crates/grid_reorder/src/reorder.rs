use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drag::DragPosition;
use crate::error::GridError;
use crate::item::Item;

/// How a destination in another line is turned into a linear index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoundaryRule {
    /// Head slot of a foreign, non-first line maps straight through. Its last
    /// slot maps one lower, since the moved item no longer occupies a place
    /// ahead of it.
    #[default]
    Positional,
    /// A foreign slot names the item the tile is dropped in front of. The
    /// index drops by one exactly when the source sat before that item.
    InsertBefore,
}

/// Source and destination in the flat order. `destination` is expressed in
/// post-removal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPair {
    pub source: usize,
    pub destination: usize,
}

impl IndexPair {
    pub const fn is_noop(self) -> bool {
        self.source == self.destination
    }
}

/// Maps a gesture to linear indices.
///
/// The source must name an existing item through a position inside its line.
/// A present destination always yields a pair: it is clamped into the
/// insertion range `0..=len - 1`, including destinations too far out to index.
pub fn compute_indices(
    len: usize,
    items_per_line: usize,
    source: DragPosition,
    destination: DragPosition,
    rule: BoundaryRule,
) -> Result<IndexPair, GridError> {
    assert!(items_per_line >= 1, "items per line must be at least 1");

    if source.position >= items_per_line {
        return Err(GridError::PositionOutsideLine {
            position: source.position,
            items_per_line,
        });
    }
    let source_index = source
        .linear_index(items_per_line)
        .filter(|&index| index < len)
        .ok_or(GridError::SourceOutOfRange {
            index: source
                .line
                .saturating_mul(items_per_line)
                .saturating_add(source.position),
            len,
        })?;

    let base = destination
        .linear_index(items_per_line)
        .unwrap_or(usize::MAX);
    let crosses_lines = source.line != destination.line;

    let adjusted = match rule {
        BoundaryRule::Positional
            if crosses_lines
                && destination.line > 0
                && destination.position != 0
                && destination.position == items_per_line - 1 =>
        {
            base - 1
        }
        BoundaryRule::InsertBefore if crosses_lines => {
            let before = base.min(len);
            if source_index < before { before - 1 } else { before }
        }
        _ => base,
    };

    let destination_index = adjusted.min(len.saturating_sub(1));
    debug!(
        "{source:?} -> {destination:?} maps to {source_index} -> {destination_index} ({rule:?})"
    );

    Ok(IndexPair {
        source: source_index,
        destination: destination_index,
    })
}

/// Rewrites every `order` field to `position + 1`.
pub fn renumber(items: &mut [Item]) {
    for (position, item) in items.iter_mut().enumerate() {
        item.order = position as u32 + 1;
    }
}

/// Moves the item under `source` to `destination`.
///
/// Returns the input untouched when the gesture was cancelled or lands on the
/// slot it started from. Otherwise returns a fresh, renumbered collection; the
/// input is never modified.
pub fn reorder<'a>(
    items: &'a [Item],
    items_per_line: usize,
    source: DragPosition,
    destination: Option<DragPosition>,
    rule: BoundaryRule,
) -> Result<Cow<'a, [Item]>, GridError> {
    let Some(destination) = destination else {
        debug!("drop from {source:?} cancelled");
        return Ok(Cow::Borrowed(items));
    };

    let pair = compute_indices(items.len(), items_per_line, source, destination, rule)?;
    if pair.is_noop() {
        return Ok(Cow::Borrowed(items));
    }

    let mut reordered = items.to_vec();
    let moved = reordered.remove(pair.source);
    reordered.insert(pair.destination, moved);
    renumber(&mut reordered);

    Ok(Cow::Owned(reordered))
}
