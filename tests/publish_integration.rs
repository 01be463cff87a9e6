//! Integration tests for the publish driver.
//!
//! These tests use real git repositories created via tempfile to verify
//! that the publisher works correctly against actual git state, pushing to
//! local bare remotes.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use scaffold::git::{PublishOutcome, Publisher};

/// Test fixture with a staging directory and a bare remote.
struct PublishFixture {
    dir: TempDir,
}

impl PublishFixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("staging")).unwrap();
        git2::Repository::init_bare(dir.path().join("remote.git"))
            .expect("failed to init bare remote");
        Self { dir }
    }

    fn staging(&self) -> PathBuf {
        self.dir.path().join("staging")
    }

    fn remote_url(&self) -> String {
        self.dir.path().join("remote.git").display().to_string()
    }

    fn write(&self, path: &str, content: &str) {
        let full = self.staging().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    fn publisher(&self) -> Publisher {
        Publisher::new("test-bot", "test-bot@example.com", "unused-token")
    }

    /// Resolve `refs/heads/main` in the bare remote.
    fn remote_main(&self) -> Option<git2::Oid> {
        let repo = git2::Repository::open_bare(self.dir.path().join("remote.git")).ok()?;
        repo.find_reference("refs/heads/main")
            .ok()
            .and_then(|r| r.target())
    }

    /// Read a file from the remote's main tree.
    fn remote_file(&self, path: &str) -> Option<String> {
        let repo = git2::Repository::open_bare(self.dir.path().join("remote.git")).ok()?;
        let commit = repo
            .find_reference("refs/heads/main")
            .ok()?
            .peel_to_commit()
            .ok()?;
        let entry = commit.tree().ok()?.get_path(Path::new(path)).ok()?;
        let blob = repo.find_blob(entry.id()).ok()?;
        String::from_utf8(blob.content().to_vec()).ok()
    }
}

#[test]
fn publish_fresh_tree_pushes_main() {
    let fixture = PublishFixture::new();
    fixture.write("README.md", "# Demo\n");
    fixture.write("src/app.py", "print('hi')\n");

    let outcome = fixture
        .publisher()
        .publish(&fixture.staging(), &fixture.remote_url())
        .unwrap();

    let commit = match outcome {
        PublishOutcome::Pushed { commit } => commit,
        other => panic!("expected Pushed, got {other:?}"),
    };

    let remote_main = fixture.remote_main().expect("remote main missing");
    assert_eq!(remote_main.to_string(), commit);
    assert_eq!(fixture.remote_file("README.md").as_deref(), Some("# Demo\n"));
    assert_eq!(
        fixture.remote_file("src/app.py").as_deref(),
        Some("print('hi')\n")
    );
}

#[test]
fn clean_tree_is_a_successful_noop() {
    let fixture = PublishFixture::new();
    fixture.write("README.md", "# Demo\n");

    let publisher = fixture.publisher();
    let first = publisher
        .publish(&fixture.staging(), &fixture.remote_url())
        .unwrap();
    assert!(matches!(first, PublishOutcome::Pushed { .. }));

    // Nothing changed; no commit and no push must happen.
    let before = fixture.remote_main();
    let second = publisher
        .publish(&fixture.staging(), &fixture.remote_url())
        .unwrap();
    assert_eq!(second, PublishOutcome::NothingToPublish);
    assert_eq!(fixture.remote_main(), before);
}

#[test]
fn changed_tree_pushes_follow_up_commit() {
    let fixture = PublishFixture::new();
    fixture.write("README.md", "# Demo\n");

    let publisher = fixture.publisher();
    publisher
        .publish(&fixture.staging(), &fixture.remote_url())
        .unwrap();
    let first_main = fixture.remote_main().unwrap();

    fixture.write("README.md", "# Demo v2\n");
    let outcome = publisher
        .publish(&fixture.staging(), &fixture.remote_url())
        .unwrap();
    assert!(matches!(outcome, PublishOutcome::Pushed { .. }));

    let second_main = fixture.remote_main().unwrap();
    assert_ne!(first_main, second_main);
    assert_eq!(
        fixture.remote_file("README.md").as_deref(),
        Some("# Demo v2\n")
    );

    // The follow-up commit extends the first one.
    let repo = git2::Repository::open(fixture.staging()).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.parent_count(), 1);
    assert_eq!(head.parent(0).unwrap().id(), first_main);
}

#[test]
fn non_main_branch_is_renamed() {
    let fixture = PublishFixture::new();

    // Simulate a staging checkout whose unborn head is named master.
    let mut opts = git2::RepositoryInitOptions::new();
    opts.initial_head("refs/heads/master");
    git2::Repository::init_opts(fixture.staging(), &opts).unwrap();
    fixture.write("README.md", "# Demo\n");

    let outcome = fixture
        .publisher()
        .publish(&fixture.staging(), &fixture.remote_url())
        .unwrap();
    assert!(matches!(outcome, PublishOutcome::Pushed { .. }));

    let repo = git2::Repository::open(fixture.staging()).unwrap();
    assert_eq!(repo.head().unwrap().shorthand(), Some("main"));
    assert!(fixture.remote_main().is_some());
}

#[test]
fn committer_identity_is_fixed() {
    let fixture = PublishFixture::new();
    fixture.write("README.md", "# Demo\n");

    fixture
        .publisher()
        .publish(&fixture.staging(), &fixture.remote_url())
        .unwrap();

    let repo = git2::Repository::open(fixture.staging()).unwrap();
    let commit = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(commit.author().name(), Some("test-bot"));
    assert_eq!(commit.author().email(), Some("test-bot@example.com"));
}

#[test]
fn upstream_tracking_configured_after_push() {
    let fixture = PublishFixture::new();
    fixture.write("README.md", "# Demo\n");

    fixture
        .publisher()
        .publish(&fixture.staging(), &fixture.remote_url())
        .unwrap();

    let repo = git2::Repository::open(fixture.staging()).unwrap();
    let config = repo.config().unwrap();
    assert_eq!(
        config.get_string("branch.main.remote").unwrap(),
        "origin"
    );
    assert_eq!(
        config.get_string("branch.main.merge").unwrap(),
        "refs/heads/main"
    );
}

#[test]
fn existing_origin_is_replaced() {
    let fixture = PublishFixture::new();
    fixture.write("README.md", "# Demo\n");

    // Seed the staging repo with a stale origin.
    let repo = git2::Repository::init(fixture.staging()).unwrap();
    repo.remote("origin", "https://example.com/stale.git").unwrap();
    drop(repo);

    fixture
        .publisher()
        .publish(&fixture.staging(), &fixture.remote_url())
        .unwrap();

    let repo = git2::Repository::open(fixture.staging()).unwrap();
    let origin = repo.find_remote("origin").unwrap();
    assert_eq!(origin.url(), Some(fixture.remote_url().as_str()));
    assert!(fixture.remote_main().is_some());
}

#[test]
fn push_to_missing_remote_fails_with_step() {
    let fixture = PublishFixture::new();
    fixture.write("README.md", "# Demo\n");

    let missing = fixture.dir.path().join("nope.git").display().to_string();
    let err = fixture
        .publisher()
        .publish(&fixture.staging(), &missing)
        .unwrap_err();

    assert_eq!(err.step, scaffold::git::PublishStep::Push);
}
