mod column;
mod workspace;


pub use column::{ColumnConvention, DEFAULT_TAB_WIDTH};
pub use workspace::{pick_project_root, source_path};

use std::path::{Path, PathBuf};

use crate::error::LaunchError;

/// What to open: a project, optionally a file inside it, optionally a
/// position inside that file. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    project_root: PathBuf,
    file_path: Option<PathBuf>,
    line: Option<u32>,
    column: Option<u32>,
}

impl LaunchTarget {
    /// Open just the project.
    #[must_use]
    pub fn project(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            file_path: None,
            line: None,
            column: None,
        }
    }

    /// Open `file` inside the project.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file.into());
        self
    }

    /// Place the cursor. Ignored unless a file is set; zero means unknown.
    #[must_use]
    pub fn at(mut self, line: Option<u32>, column: Option<u32>) -> Self {
        if self.file_path.is_some() {
            self.line = line.filter(|&l| l > 0);
            self.column = column.filter(|&c| c > 0);
        }
        self
    }

    /// Build a target from workspace roots and an optional file, picking the
    /// root that contains the file.
    ///
    /// # Errors
    ///
    /// [`LaunchError::NoWorkspaceOpen`] when `roots` is empty.
    pub fn from_workspace(
        roots: &[PathBuf],
        file: Option<&Path>,
        line: Option<u32>,
        column: Option<u32>,
    ) -> Result<Self, LaunchError> {
        let root = pick_project_root(roots, file).ok_or(LaunchError::NoWorkspaceOpen)?;
        let target = Self::project(root);
        Ok(match file {
            Some(file) => target.with_file(file).at(line, column),
            None => target,
        })
    }

    /// Directory opened as the project.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// File to focus, if any.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Cursor line, only when a file is set.
    #[must_use]
    pub const fn line(&self) -> Option<u32> {
        self.line
    }

    /// Cursor column, only when a file is set.
    #[must_use]
    pub const fn column(&self) -> Option<u32> {
        self.column
    }

    /// Line and column to hand to an IDE. `None` unless a file is set and at
    /// least one of the two is known; the missing half defaults to 1.
    #[must_use]
    pub fn position(&self) -> Option<(u32, u32)> {
        self.file_path.as_ref()?;
        match (self.line, self.column) {
            (None, None) => None,
            (line, column) => Some((line.unwrap_or(1), column.unwrap_or(1))),
        }
    }
}
