//! Project segment: type icon plus directory label.

use std::fs;
use std::path::Path;

use crate::statusline::config::{DirectoryMode, StatusLineConfig};
use crate::styling::{DIM, DIRECTORY, FOLDER_EMOJI, PYTHON_EMOJI, R_PACKAGE_EMOJI};

pub struct ProjectSegment;

impl ProjectSegment {
    pub fn render(
        &self,
        config: &StatusLineConfig,
        current_dir: &str,
        project_dir: Option<&str>,
    ) -> String {
        let dir = Path::new(current_dir);
        let icon = project_icon(dir);
        let label = format_directory(config, current_dir, project_dir);

        let mut fragment = format!("{icon} {DIRECTORY}{label}{DIRECTORY:#}");
        if let Some(version) = r_version(dir) {
            fragment.push_str(&format!(" {DIM}{version}{DIM:#}"));
        }
        fragment
    }
}

/// Project-type icon from marker files in `dir`. Unreadable directories fall
/// through to the default folder icon.
fn project_icon(dir: &Path) -> &'static str {
    if dir.join("pyproject.toml").is_file() {
        PYTHON_EMOJI
    } else if r_version(dir).is_some() {
        R_PACKAGE_EMOJI
    } else {
        FOLDER_EMOJI
    }
}

/// `Version:` field of an R package `DESCRIPTION`, formatted `vX.Y.Z`.
fn r_version(dir: &Path) -> Option<String> {
    let text = fs::read_to_string(dir.join("DESCRIPTION")).ok()?;
    text.lines()
        .find_map(|line| line.strip_prefix("Version:"))
        .map(|v| format!("v{}", v.trim()))
}

fn format_directory(
    config: &StatusLineConfig,
    current_dir: &str,
    project_dir: Option<&str>,
) -> String {
    match config.display.directory_mode {
        DirectoryMode::Basename => Path::new(current_dir)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| current_dir.to_string()),
        DirectoryMode::Full => {
            // Inside a project, prefer "project-name/relative/path"
            if let Some(project) = project_dir {
                let current = Path::new(current_dir);
                let project = Path::new(project);
                if current != project {
                    if let (Ok(relative), Some(name)) =
                        (current.strip_prefix(project), project.file_name())
                    {
                        return format!("{}/{}", name.to_string_lossy(), relative.display());
                    }
                }
            }
            abbreviate_home(current_dir)
        }
    }
}

/// Replace a leading `$HOME` with `~`.
fn abbreviate_home(path: &str) -> String {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() && path.starts_with(&home) => {
            format!("~{}", &path[home.len()..])
        }
        _ => path.to_string(),
    }
}
