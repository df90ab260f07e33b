// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and removing the commit-msg hook.

use crate::error::{HookError, LintError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{commit_msg_script, COMMIT_MSG_HOOK, HOOK_MARKER};

/// Manager for the commit-msg hook of one repository.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Ok(Self::with_dir(repo.hooks_dir()))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn with_dir(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    /// Path of the commit-msg hook.
    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(COMMIT_MSG_HOOK)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", COMMIT_MSG_HOOK))
    }

    /// Install the hook.
    ///
    /// A foreign hook is only replaced with `force`, and is kept as
    /// `commit-msg.backup`.
    pub fn install(&self, force: bool) -> Result<()> {
        let hook_path = self.hook_path();

        if !self.hooks_dir.exists() {
            fs::create_dir_all(&self.hooks_dir)
                .map_err(|e| install_error(format!("Failed to create hooks directory: {}", e)))?;
        }

        if hook_path.exists() && !is_burnlint_hook(&hook_path)? {
            if !force {
                return Err(LintError::Hook(HookError::AlreadyExists {
                    hook: COMMIT_MSG_HOOK.to_string(),
                }));
            }

            tracing::debug!("Backing up existing hook to {:?}", self.backup_path());
            fs::rename(&hook_path, self.backup_path())
                .map_err(|e| install_error(format!("Failed to backup existing hook: {}", e)))?;
        }

        fs::write(&hook_path, commit_msg_script())
            .map_err(|e| install_error(format!("Failed to write hook: {}", e)))?;

        make_executable(&hook_path)
    }

    /// Remove the hook and restore any backup.
    pub fn uninstall(&self) -> Result<()> {
        let hook_path = self.hook_path();

        if !hook_path.exists() {
            return Ok(());
        }

        if !is_burnlint_hook(&hook_path)? {
            return Err(LintError::Hook(HookError::RemoveFailed {
                hook: COMMIT_MSG_HOOK.to_string(),
                message: "Hook was not installed by burnlint".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            LintError::Hook(HookError::RemoveFailed {
                hook: COMMIT_MSG_HOOK.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).ok();
        }

        Ok(())
    }

    /// Whether the burnlint hook is installed.
    pub fn is_installed(&self) -> bool {
        let hook_path = self.hook_path();
        hook_path.exists() && is_burnlint_hook(&hook_path).unwrap_or(false)
    }
}

fn install_error(message: String) -> LintError {
    LintError::Hook(HookError::InstallFailed {
        hook: COMMIT_MSG_HOOK.to_string(),
        message,
    })
}

fn is_burnlint_hook(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)
        .map_err(|e| install_error(format!("Failed to read hook: {}", e)))?;
    Ok(content.contains(HOOK_MARKER))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| install_error(format!("Failed to get permissions: {}", e)))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| install_error(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_install_and_uninstall() {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::with_dir(dir.path().join("hooks"));

        assert!(!manager.is_installed());
        manager.install(false).unwrap();
        assert!(manager.is_installed());

        // Reinstalling over our own hook needs no force.
        manager.install(false).unwrap();

        manager.uninstall().unwrap();
        assert!(!manager.hook_path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let manager = HookManager::with_dir(dir.path());
        manager.install(false).unwrap();

        let mode = fs::metadata(manager.hook_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_foreign_hook_requires_force() {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::with_dir(dir.path());
        fs::write(manager.hook_path(), "#!/bin/sh\nexit 0\n").unwrap();

        assert!(matches!(
            manager.install(false),
            Err(LintError::Hook(HookError::AlreadyExists { .. }))
        ));
        assert!(matches!(
            manager.uninstall(),
            Err(LintError::Hook(HookError::RemoveFailed { .. }))
        ));

        manager.install(true).unwrap();
        assert!(manager.is_installed());

        manager.uninstall().unwrap();
        let restored = fs::read_to_string(manager.hook_path()).unwrap();
        assert_eq!(restored, "#!/bin/sh\nexit 0\n");
    }

    #[test]
    fn test_hook_manager_in_repo() {
        let (dir, _, _) = crate::git::create_test_repo();
        let repo = crate::git::Repository::open(dir.path()).unwrap();
        let manager = HookManager::with_dir(repo.hooks_dir());

        manager.install(false).unwrap();
        assert!(dir.path().join(".git").join("hooks").join("commit-msg").exists());
    }
}
