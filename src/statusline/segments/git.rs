//! Git segment: current branch plus a dirty-worktree marker.

use crate::git::Repository;
use crate::styling::{BRANCH_EMOJI, DIRTY_MARK, GIT_BRANCH, GIT_DIRTY};

pub struct GitSegment;

impl GitSegment {
    /// Branch + dirty marker for `dir`; empty outside a repository (or in
    /// detached HEAD, where there is no branch to report).
    pub fn render(&self, dir: &str) -> String {
        let repo = Repository::at(dir);
        let branch = match repo.current_branch() {
            Ok(Some(branch)) => branch,
            Ok(None) | Err(_) => return String::new(),
        };
        let dirty = repo.is_dirty().unwrap_or(false);
        self.format(&branch, dirty)
    }

    /// Formatting half, split out so tests don't need a repository.
    pub fn format(&self, branch: &str, dirty: bool) -> String {
        let marker = if dirty {
            format!(" {GIT_DIRTY}{DIRTY_MARK}{GIT_DIRTY:#}")
        } else {
            String::new()
        };
        format!("{BRANCH_EMOJI} {GIT_BRANCH}{branch}{GIT_BRANCH:#}{marker}")
    }
}
