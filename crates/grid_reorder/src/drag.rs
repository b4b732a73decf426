use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

const LINE_PREFIX: &str = "line-";

/// A slot in the grid, as reported by the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DragPosition {
    pub line: usize,
    pub position: usize,
}

impl DragPosition {
    pub const fn new(line: usize, position: usize) -> Self {
        Self { line, position }
    }

    /// Linear index under the plain row-major mapping, without boundary
    /// adjustment. `None` when it does not fit in a `usize`.
    pub const fn linear_index(self, items_per_line: usize) -> Option<usize> {
        match self.line.checked_mul(items_per_line) {
            Some(line_start) => line_start.checked_add(self.position),
            None => None,
        }
    }
}

/// Identifier of a drop container, `line-<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub usize);

impl Display for LineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{LINE_PREFIX}{}", self.0)
    }
}

impl FromStr for LineId {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(LINE_PREFIX)
            .filter(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|suffix| suffix.parse().ok())
            .map(Self)
            .ok_or_else(|| GridError::InvalidContainerId(s.to_owned()))
    }
}

/// One end of a gesture: the container dropped into and the index inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub container_id: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(line: usize, index: usize) -> Self {
        Self {
            container_id: LineId(line).to_string(),
            index,
        }
    }

    pub fn to_position(&self) -> Result<DragPosition, GridError> {
        let LineId(line) = self.container_id.parse()?;
        Ok(DragPosition::new(line, self.index))
    }
}

/// A completed gesture. `destination` is `None` when the drop landed outside every line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropResult {
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

impl DropResult {
    pub fn positions(&self) -> Result<(DragPosition, Option<DragPosition>), GridError> {
        let source = self.source.to_position()?;
        let destination = self
            .destination
            .as_ref()
            .map(DropLocation::to_position)
            .transpose()?;
        Ok((source, destination))
    }
}
