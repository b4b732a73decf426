use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumCount, EnumIter, IntoEnumIterator};

/// Stable identifier of an item. Never changes while the item lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display-only tile color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    Green,
    Red,
    Blue,
    Yellow,
    Purple,
    Teal,
    Gray,
    Rose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    /// Dense 1-based rank in the flat order. Only the reorder engine writes it.
    pub order: u32,
    pub color: TileColor,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        order: u32,
        color: TileColor,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            label: label.into(),
            order,
            color,
        }
    }
}

/// The seed collection the session starts from: `A` to `H`, one color each.
pub fn default_items() -> Vec<Item> {
    TileColor::iter()
        .zip('A'..='H')
        .enumerate()
        .map(|(index, (color, label))| {
            Item::new(
                format!("item-{index}"),
                label.to_string(),
                index as u32 + 1,
                color,
            )
        })
        .collect()
}
