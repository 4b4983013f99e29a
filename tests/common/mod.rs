//! Builds small on-disk repositories with a known release layout.

#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// Repository whose release branches fork off one development line.
///
/// ```text
/// a0 ── a1 ── fix ── a3 ── d4            develop
///  │     │     │      └─── r20           release/2.0
///  │     │     ├────────── r11           release-1.1
///  │     │     └────────── r05           release/0.5 (backport, contains fix)
///  │     └──────────────── r10           release/1.0
///  └────────────────────── (a0)          release/0.9
/// ```
pub struct Fixture {
    pub dir: TempDir,
    pub repo: Repository,
    pub fix: Oid,
    pub before_fix: Oid,
    pub develop_tip: Oid,
}

pub fn commit(repo: &Repository, parents: &[Oid], message: &str) -> Oid {
    let sig = Signature::now("Release Bot", "bot@example.com").unwrap();
    let tree_id = repo.treebuilder(None).unwrap().write().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents: Vec<_> = parents.iter().map(|p| repo.find_commit(*p).unwrap()).collect();
    let parent_refs: Vec<_> = parents.iter().collect();
    repo.commit(None, &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// Create the fixture, placing branches under `ref_prefix`
/// (e.g. "refs/remotes/origin/" or "refs/heads/").
pub fn fixture(ref_prefix: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    let a0 = commit(&repo, &[], "initial");
    let a1 = commit(&repo, &[a0], "feature work");
    let fix = commit(&repo, &[a1], "fix: null check in parser");
    let a3 = commit(&repo, &[fix], "more work");
    let d4 = commit(&repo, &[a3], "develop tip");

    let r10 = commit(&repo, &[a1], "release 1.0");
    let r11 = commit(&repo, &[fix], "release 1.1");
    let r20 = commit(&repo, &[a3], "release 2.0");
    let r05 = commit(&repo, &[fix], "backport to 0.5");

    for (name, oid) in [
        ("develop", d4),
        ("release/0.9", a0),
        ("release/0.5", r05),
        ("release/1.0", r10),
        ("release-1.1", r11),
        ("release/2.0", r20),
        ("release/next", d4),
    ] {
        repo.reference(&format!("{}{}", ref_prefix, name), oid, true, "fixture")
            .unwrap();
    }

    Fixture {
        dir,
        repo,
        fix,
        before_fix: a1,
        develop_tip: d4,
    }
}
