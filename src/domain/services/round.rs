//! Deploy round inference
//!
//! Derives where a deployment round stands from the three recorded marker
//! ids. Resuming or aborting an interrupted round is left to the caller.

use serde::Serialize;

use crate::domain::value_objects::RevisionId;

/// Recorded ids of the three markers at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkerSnapshot {
    pub current: Option<RevisionId>,
    pub done: Option<RevisionId>,
    pub in_progress: Option<RevisionId>,
}

/// Where a deployment round stands: `idle → in_progress → current → done`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "rev", rename_all = "kebab-case")]
pub enum DeployRound {
    /// Nothing recorded yet
    Idle,
    /// A revision is marked in progress but not yet live or done
    InProgress(RevisionId),
    /// A revision is live but has not been marked done
    Promoted(RevisionId),
    /// The live revision (if any) completed
    Done(RevisionId),
}

impl MarkerSnapshot {
    /// The in-progress id, when it differs from both current and done.
    ///
    /// After a restart this means the previous round never finished.
    pub fn interrupted(&self) -> Option<&RevisionId> {
        let in_progress = self.in_progress.as_ref()?;
        if self.current.as_ref() == Some(in_progress) || self.done.as_ref() == Some(in_progress) {
            return None;
        }
        Some(in_progress)
    }

    pub fn round(&self) -> DeployRound {
        if let Some(rev) = self.interrupted() {
            return DeployRound::InProgress(rev.clone());
        }
        match (&self.current, &self.done) {
            (None, None) => DeployRound::Idle,
            (Some(current), Some(done)) if current == done => DeployRound::Done(done.clone()),
            (Some(current), _) => DeployRound::Promoted(current.clone()),
            (None, Some(done)) => DeployRound::Done(done.clone()),
        }
    }
}

impl DeployRound {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployRound::Idle => "idle",
            DeployRound::InProgress(_) => "in-progress",
            DeployRound::Promoted(_) => "promoted",
            DeployRound::Done(_) => "done",
        }
    }
}
