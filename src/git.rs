//! Minimal git queries for the status line.
//!
//! The git segment only needs the current branch and a dirty flag, so this
//! module is a thin subprocess wrapper rather than a full repository API.

use std::path::PathBuf;
use std::process::Command;

#[derive(Debug)]
pub enum GitError {
    /// git could not be spawned, or exited non-zero
    CommandFailed(String),
}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::CommandFailed(msg) => write!(f, "git command failed: {msg}"),
        }
    }
}

impl std::error::Error for GitError {}

/// Repository context for git operations.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository context at the specified path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the current branch name, or None if in detached HEAD state.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        let stdout = self.run(&["branch", "--show-current"])?;
        let branch = stdout.trim();

        if branch.is_empty() {
            Ok(None) // Detached HEAD
        } else {
            Ok(Some(branch.to_string()))
        }
    }

    /// Check if the working tree has uncommitted changes.
    pub fn is_dirty(&self) -> Result<bool, GitError> {
        let stdout = self.run(&["status", "--porcelain"])?;
        Ok(!stdout.trim().is_empty())
    }

    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(args)
            .output()
            .map_err(|e| GitError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
