// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::commit::Commit;
use crate::error::{GitError, LintError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            LintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                LintError::Git(GitError::NotARepository)
            } else {
                LintError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get the hooks directory, honouring `core.hooksPath`.
    pub fn hooks_dir(&self) -> PathBuf {
        let configured = self
            .inner
            .config()
            .and_then(|config| config.get_path("core.hooksPath"))
            .ok();

        match configured {
            Some(path) if path.is_absolute() => path,
            Some(path) => self
                .inner
                .workdir()
                .unwrap_or_else(|| self.git_dir())
                .join(path),
            None => self.git_dir().join("hooks"),
        }
    }

    fn find_git2_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            LintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            LintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<Commit> {
        let commit = self.find_git2_commit(reference)?;
        Ok(to_commit(&commit))
    }

    /// Get commits in a range (`A..B`) or the single commit a reference names.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<Commit>> {
        let (from, to) = match range.split_once("..") {
            Some((from, to)) => (from, if to.is_empty() { "HEAD" } else { to }),
            None => return Ok(vec![self.get_commit(range)?]),
        };

        let mut revwalk = self.inner.revwalk().map_err(|e| walk_error("revwalk", e))?;
        let to = self.find_git2_commit(to)?;
        revwalk
            .push(to.id())
            .map_err(|e| walk_error("revwalk.push", e))?;

        if !from.is_empty() {
            let from = self.find_git2_commit(from)?;
            revwalk
                .hide(from.id())
                .map_err(|e| walk_error("revwalk.hide", e))?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| walk_error("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                LintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push(to_commit(&commit));
        }

        Ok(commits)
    }
}

fn walk_error(command: &str, e: git2::Error) -> LintError {
    LintError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: e.message().to_string(),
    })
}

fn to_commit(commit: &git2::Commit<'_>) -> Commit {
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

    Commit::new(message)
        .with_sha(commit.id().to_string())
        .with_merge(commit.parent_count() > 1)
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use git2::{Oid, Signature};
    use tempfile::TempDir;

    pub(crate) fn commit_on(repo: &Git2Repo, message: &str, parents: &[Oid]) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<git2::Commit<'_>> =
            parents.iter().map(|id| repo.find_commit(*id).unwrap()).collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

        repo.commit(None, &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    /// A repository with `Initial commit` <- `add feature` and a side
    /// commit merged back in by `Merge branch 'side'`, at HEAD.
    pub(crate) fn create_test_repo() -> (TempDir, Oid, Oid) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();

        let root = commit_on(&repo, "Initial commit", &[]);
        let feature = commit_on(&repo, "add feature", &[root]);
        let side = commit_on(&repo, "Fix side issue\n\nSee #3", &[root]);
        let merge = commit_on(&repo, "Merge branch 'side'", &[feature, side]);

        repo.reference("refs/heads/main", merge, true, "test").unwrap();
        repo.set_head("refs/heads/main").unwrap();

        (dir, root, merge)
    }

    #[test]
    fn test_open_repo() {
        let (dir, _, _) = create_test_repo();
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(LintError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_get_commit_detects_merge() {
        let (dir, root, merge) = create_test_repo();
        let repo = Repository::open(dir.path()).unwrap();

        let head = repo.get_commit("HEAD").unwrap();
        assert!(head.is_merge);
        assert_eq!(head.sha, Some(merge.to_string()));
        assert_eq!(head.title, "Merge branch 'side'");

        let first = repo.get_commit(&root.to_string()).unwrap();
        assert!(!first.is_merge);
    }

    #[test]
    fn test_get_commits_in_range() {
        let (dir, root, _) = create_test_repo();
        let repo = Repository::open(dir.path()).unwrap();

        let commits = repo
            .get_commits_in_range(&format!("{}..HEAD", root))
            .unwrap();
        assert_eq!(commits.len(), 3);
        assert_eq!(commits.iter().filter(|c| c.is_merge).count(), 1);

        let open_ended = repo.get_commits_in_range(&format!("{}..", root)).unwrap();
        assert_eq!(open_ended.len(), 3);
    }

    #[test]
    fn test_invalid_reference() {
        let (dir, _, _) = create_test_repo();
        let repo = Repository::open(dir.path()).unwrap();
        assert!(matches!(
            repo.get_commit("does-not-exist"),
            Err(LintError::Git(GitError::InvalidReference { .. }))
        ));
    }

    #[test]
    fn test_hooks_dir_default() {
        let (dir, _, _) = create_test_repo();
        let repo = Repository::open(dir.path()).unwrap();
        assert!(repo.hooks_dir().ends_with("hooks"));
    }
}
