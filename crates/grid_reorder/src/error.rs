use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("container id `{0}` is not of the form `line-<index>`")]
    InvalidContainerId(String),

    #[error("position {position} is outside a line of {items_per_line} items")]
    PositionOutsideLine {
        position: usize,
        items_per_line: usize,
    },

    #[error("source index {index} is out of range for {len} items")]
    SourceOutOfRange { index: usize, len: usize },
}
