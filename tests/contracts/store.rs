//! Contract tests for path resolution, markers, retention and promotion.

use std::fs;

use crate::common::*;
use revroot::{RetentionWidth, StoreError};

/// CONTRACT: setup then cleanup leaves the scratch directory present and empty.
#[test]
fn contract_setup_then_cleanup_empties_scratch() {
    let env = TestRoot::new();
    let store = env.store();
    store.setup().unwrap();
    env.write_file("tmp/upload.tar", "partial");
    env.write_file("tmp/staging/app.conf", "x");

    store.paths().cleanup().unwrap();

    let tmp = store.paths().temp_dir();
    assert!(tmp.is_dir());
    assert_eq!(fs::read_dir(&tmp).unwrap().count(), 0);
}

/// CONTRACT: `path(a, b)` is the root joined with `a` then `b`.
#[test]
fn contract_path_joins_segments_under_root() {
    let env = TestRoot::new();
    let store = env.store();

    assert_eq!(
        store.paths().path(["revs", "abc"]),
        env.root().join("revs").join("abc")
    );
    assert_eq!(store.paths().path(Vec::<&str>::new()), env.root());
}

#[cfg(unix)]
mod links {
    use super::*;

    /// CONTRACT: with no config revision, markers name bare revision directories.
    #[test]
    fn contract_bare_markers_resolve_to_revs_dir() {
        let env = TestRoot::new();
        let store = env.store();
        env.provision("A");
        env.provision("B");

        store.mark_rev_current("A").unwrap();
        store.mark_rev_done("B").unwrap();

        assert_eq!(store.current_config_rev().unwrap(), None);
        assert_eq!(store.current_rev_dir().unwrap(), Some(store.revs_dir().join("A")));
        assert_eq!(store.done_rev_dir().unwrap(), Some(store.revs_dir().join("B")));
    }

    /// CONTRACT: an active config revision prefixes the directory name.
    #[test]
    fn contract_config_rev_addresses_compound_directory() {
        let env = TestRoot::new();
        let mut store = env.store();
        store.use_config_rev("C").unwrap();
        env.provision("C_D");

        store.mark_rev_current("D").unwrap();

        assert_eq!(store.current_rev_dir().unwrap(), Some(store.revs_dir().join("C_D")));
        assert_eq!(store.current_config_rev().unwrap().as_deref(), Some("C"));
    }

    /// CONTRACT: markers are read back by a fresh store over the same root.
    #[test]
    fn contract_markers_persist_across_store_instances() {
        let env = TestRoot::new();
        env.provision("r1");
        env.store().mark_rev_current("r1").unwrap();
        env.store().mark_rev_done("r1").unwrap();

        let reopened = env.store();

        assert_eq!(reopened.rev_current().unwrap().map(|id| id.to_string()).as_deref(), Some("r1"));
        assert_eq!(reopened.rev_done().unwrap(), reopened.rev_current().unwrap());
    }

    /// CONTRACT: 9 revisions, current = 2nd, done = 4th, keep 5 → [3rd, 1st].
    #[test]
    fn contract_retention_excludes_window_current_and_done() {
        let env = TestRoot::new();
        let store = env.store();
        let dirs: Vec<_> = (1..=9).map(|n| env.provision(&format!("rev{n}"))).collect();
        store.mark_rev_current("rev2").unwrap();
        store.mark_rev_done("rev4").unwrap();

        let candidates: Vec<_> = store.find_old_rev_dirs().unwrap().collect();

        assert_eq!(candidates, vec![dirs[2].clone(), dirs[0].clone()]);
    }

    /// CONTRACT: candidates never include the newest K, whatever K is.
    #[test]
    fn contract_retention_width_is_honoured() {
        let env = TestRoot::new();
        let store = env.store().with_retention(RetentionWidth::new(3).unwrap());
        let dirs: Vec<_> = (1..=4).map(|n| env.provision(&format!("r{n}"))).collect();

        let candidates: Vec<_> = store.find_old_rev_dirs().unwrap().collect();

        assert_eq!(candidates, vec![dirs[0].clone()]);
    }

    /// CONTRACT: linking a missing path creates a reference to the revision.
    #[test]
    fn contract_link_creates_reference() {
        let env = TestRoot::new();
        let store = env.store();
        let rev = env.provision("r1");
        let link = env.path("www/docroot");

        let moved = store.link_path_to_rev(&link, "r1", false).unwrap();

        assert_eq!(moved, None);
        assert_eq!(fs::read_link(&link).unwrap(), rev);
    }

    /// CONTRACT: backup moves existing content aside under a new name.
    #[test]
    fn contract_link_with_backup_preserves_original() {
        let env = TestRoot::new();
        let store = env.store();
        let rev = env.provision("r1");
        env.write_file("docroot/index.html", "old");
        let link = env.path("docroot");

        let moved = store.link_path_to_rev(&link, "r1", true).unwrap().unwrap();

        assert_eq!(fs::read_link(&link).unwrap(), rev);
        assert_ne!(moved, link);
        assert_eq!(fs::read_to_string(moved.join("index.html")).unwrap(), "old");
    }

    /// CONTRACT: without backup, existing content is refused and left alone.
    #[test]
    fn contract_link_without_backup_refuses_content() {
        let env = TestRoot::new();
        let store = env.store();
        env.provision("r1");
        env.write_file("docroot/index.html", "old");
        let link = env.path("docroot");

        let err = store.link_path_to_rev(&link, "r1", false).unwrap_err();

        assert!(matches!(err, StoreError::AlreadyExists { .. }));
        assert!(fs::symlink_metadata(&link).unwrap().is_dir());
        assert_eq!(fs::read_to_string(link.join("index.html")).unwrap(), "old");
    }

    /// CONTRACT: rebinding an existing reference needs no backup.
    #[test]
    fn contract_relink_replaces_reference() {
        let env = TestRoot::new();
        let store = env.store();
        env.provision("r1");
        let r2 = env.provision("r2");
        let link = env.path("docroot");
        store.link_path_to_rev(&link, "r1", false).unwrap();

        store.link_path_to_rev(&link, "r2", false).unwrap();

        assert_eq!(fs::read_link(&link).unwrap(), r2);
    }
}
