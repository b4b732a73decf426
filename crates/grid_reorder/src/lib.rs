//! Index mapping and reordering for tiles wrapped across fixed-width lines.
//!
//! The flat order is the only source of truth. Lines are views computed from it
//! on demand, and every successful drop produces a fresh, renumbered collection.

mod board;
mod drag;
mod error;
mod item;
mod partition;
mod reorder;

pub use board::{Board, GridConfig};
pub use drag::{DragPosition, DropLocation, DropResult, LineId};
pub use error::GridError;
pub use item::{Item, ItemId, TileColor, default_items};
pub use partition::{Line, flatten, line_count, locate, partition};
pub use reorder::{BoundaryRule, IndexPair, compute_indices, renumber, reorder};

pub mod prelude {
    pub use crate::{
        Board, BoundaryRule, DragPosition, DropLocation, DropResult, GridConfig, GridError, Item,
        LineId, TileColor,
    };
}
