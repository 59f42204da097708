//! Marker Kind Value Object
//!
//! The three named references a deployment root carries.

use serde::Serialize;

/// One of the reference markers under the deployment root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    /// The live revision
    Current,
    /// The last revision that completed deployment
    Done,
    /// The revision a deployment round is working on
    InProgress,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 3] = [MarkerKind::Current, MarkerKind::Done, MarkerKind::InProgress];

    /// File name of the marker relative to the deployment root.
    pub fn file_name(&self) -> &'static str {
        match self {
            MarkerKind::Current => "current",
            MarkerKind::Done => ".done",
            MarkerKind::InProgress => ".in-progress",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Current => "current",
            MarkerKind::Done => "done",
            MarkerKind::InProgress => "in-progress",
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
