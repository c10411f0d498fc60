use alloc::string::String;

use crate::Edge;

/// Rejected engine configuration.
///
/// Returned by [`crate::InView::new`] before any listener is attached.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A string offset that is not a percentage (it must end in `%`).
    #[error("offset for `{edge}` must be a number, a function, or a percentage string (got {value:?})")]
    InvalidOffset { edge: Edge, value: String },
    /// A percentage offset without a leading integer (e.g. `"abc%"`).
    #[error("offset for `{edge}` has no leading integer percentage (got {value:?})")]
    InvalidPercentage { edge: Edge, value: String },
    #[error("unknown offset percentage mode {0:?} (expected \"parent\" or \"self\")")]
    UnknownPercentageMode(String),
}
