//! Text views
//!
//! Plain-text rendering of use case results. JSON output serializes the
//! same structs directly.

use crate::application::{PruneResult, StatusReport};
use crate::domain::services::DeployRound;
use crate::domain::value_objects::RevisionId;

pub fn render_status(report: &StatusReport) -> String {
    let mut lines = vec![format!("root: {}", report.root.display())];
    if let Some(env) = &report.environment {
        lines.push(format!("environment: {}", env));
    }
    if let Some(config_rev) = &report.config_rev {
        lines.push(format!("config rev: {}", config_rev));
    }
    lines.push(format!("round: {}", render_round(&report.round)));
    lines.push(format!("current: {}", or_dash(report.current.as_ref())));
    lines.push(format!("done: {}", or_dash(report.done.as_ref())));
    lines.push(format!("in progress: {}", or_dash(report.in_progress.as_ref())));
    if let Some(rev) = &report.interrupted {
        lines.push(format!("warning: round for {} never finished", rev));
    }
    if report.current.is_some() && report.current_dir.is_none() {
        lines.push("warning: current points at a missing revision".to_string());
    }
    lines.push(format!("retention: keep {}", report.retention));

    if report.revisions.is_empty() {
        lines.push("revisions: none".to_string());
    } else {
        lines.push("revisions:".to_string());
        for rev in &report.revisions {
            let flags: Vec<&str> = [
                (rev.live, "live"),
                (rev.done, "done"),
                (rev.prunable, "prunable"),
            ]
            .into_iter()
            .filter_map(|(set, flag)| set.then_some(flag))
            .collect();
            if flags.is_empty() {
                lines.push(format!("  {}", rev.name));
            } else {
                lines.push(format!("  {} ({})", rev.name, flags.join(", ")));
            }
        }
    }
    lines.join("\n")
}

pub fn render_round(round: &DeployRound) -> String {
    match round {
        DeployRound::Idle => round.as_str().to_string(),
        DeployRound::InProgress(rev) | DeployRound::Promoted(rev) | DeployRound::Done(rev) => {
            format!("{} {}", round.as_str(), rev)
        }
    }
}

pub fn render_prune(result: &PruneResult) -> String {
    if result.removed.is_empty() && result.failed.is_empty() {
        return "nothing to prune".to_string();
    }
    let verb = if result.dry_run { "would prune" } else { "pruned" };
    let mut lines: Vec<String> = result
        .removed
        .iter()
        .map(|path| format!("{} {}", verb, path.display()))
        .collect();
    lines.extend(
        result
            .failed
            .iter()
            .map(|f| format!("failed to prune {}: {}", f.path.display(), f.error)),
    );
    lines.join("\n")
}

fn or_dash(id: Option<&RevisionId>) -> String {
    id.map_or_else(|| "-".to_string(), RevisionId::to_string)
}
