//! Contract tests for deploy rounds and pruning working together.

#![cfg(unix)]

use crate::common::*;
use revroot::application::{DeployRoundUseCase, PruneOptions, PruneUseCase, StatusUseCase};
use revroot::{DeployRound, RetentionWidth};

/// CONTRACT: after many completed rounds and a prune, exactly K revisions
/// remain and the live one is among them.
#[test]
fn contract_repeated_rounds_then_prune_keep_live_revision() {
    let env = TestRoot::new();
    let store = env.store().with_retention(RetentionWidth::new(2).unwrap());
    let round = DeployRoundUseCase::new(&store);

    for n in 1..=5 {
        let rev = format!("r{n}");
        round.begin(&rev).unwrap();
        env.provision(&rev);
        round.promote(&rev).unwrap();
        round.finish(&rev).unwrap();
    }

    let result = PruneUseCase::new(&store)
        .execute(&PruneOptions::new())
        .unwrap();

    assert_eq!(result.removed.len(), 3);
    assert_eq!(
        store.rev_dirs().unwrap(),
        vec![env.path("revs/r5"), env.path("revs/r4")]
    );
    assert_eq!(store.current_rev_dir().unwrap(), Some(env.path("revs/r5")));
}

/// CONTRACT: a rolled-back live revision older than the window survives pruning.
#[test]
fn contract_rollback_target_survives_prune() {
    let env = TestRoot::new();
    let store = env.store().with_retention(RetentionWidth::new(1).unwrap());
    for rev in ["r1", "r2", "r3"] {
        env.provision(rev);
    }
    store.mark_rev_current("r1").unwrap();
    store.mark_rev_done("r1").unwrap();

    let result = PruneUseCase::new(&store)
        .execute(&PruneOptions::new())
        .unwrap();

    assert_eq!(result.removed, vec![env.path("revs/r2")]);
    assert!(env.path("revs/r1").is_dir());
    assert!(env.path("revs/r3").is_dir());
}

/// CONTRACT: a crash between begin and finish is visible to the next process.
#[test]
fn contract_interrupted_round_is_detected_after_restart() {
    let env = TestRoot::new();
    {
        let store = env.store();
        let round = DeployRoundUseCase::new(&store);
        round.begin("r1").unwrap();
        env.provision("r1");
        round.promote("r1").unwrap();
        round.finish("r1").unwrap();
        round.begin("r2").unwrap();
    }

    let store = env.store();
    let report = StatusUseCase::new(&store).execute().unwrap();

    assert_eq!(report.interrupted.map(|id| id.to_string()).as_deref(), Some("r2"));
    assert!(matches!(report.round, DeployRound::InProgress(_)));
    assert_eq!(store.current_rev_dir().unwrap(), Some(env.path("revs/r1")));
}
