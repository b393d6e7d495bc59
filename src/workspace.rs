// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Workspace path resolution
//!
//! Target paths are given relative to a workspace root. [`Workspace::resolve`]
//! is purely lexical; [`Workspace::confine`] follows symlinks on disk and
//! re-checks the real location before anything is written.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{CombineError, Result};

/// Environment variable consulted when no workspace directory is given
pub const WORKSPACE_ENV: &str = "JSON_COMBINE_WORKSPACE";

/// Symlink hops followed before giving up
const MAX_LINK_HOPS: usize = 40;

/// Base directory that relative target paths are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Create a workspace rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: normalize(&root.into()),
        }
    }

    /// Pick the workspace root: explicit directory, then `$JSON_COMBINE_WORKSPACE`,
    /// then the current working directory. Relative roots are made absolute.
    pub fn discover(directory: Option<PathBuf>) -> Result<Self> {
        let root = match directory {
            Some(dir) => dir,
            None => match std::env::var(WORKSPACE_ENV) {
                Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => std::env::current_dir()?,
            },
        };

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(root)
        };

        Ok(Self::new(root))
    }

    /// The normalised root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `path` against the root.
    ///
    /// Relative paths are joined onto the root; absolute paths are taken as-is.
    /// Either way the result must stay inside the root. This only looks at the
    /// path text, so a symlink inside the root can still point elsewhere; call
    /// [`Workspace::confine`] on the result before touching the file.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        let resolved = normalize(&joined);

        let escapes = resolved
            .components()
            .any(|c| matches!(c, Component::ParentDir));
        if escapes || !resolved.starts_with(&self.root) {
            return Err(CombineError::PathOutsideWorkspace(resolved));
        }

        Ok(resolved)
    }

    /// Follow symlinks in a resolved path and return the real file location.
    ///
    /// Missing trailing components are allowed (the file or its parent may
    /// not exist yet), and so is a dangling link. The real location must
    /// still lie inside the root, compared after canonicalizing both.
    pub fn confine(&self, path: &Path) -> Result<PathBuf> {
        let root = canonicalize_existing(&self.root)?;
        let mut current = path.to_path_buf();

        for _ in 0..MAX_LINK_HOPS {
            match fs::symlink_metadata(&current) {
                Ok(meta) if meta.file_type().is_symlink() => {
                    let link = fs::read_link(&current)?;
                    current = match current.parent() {
                        Some(parent) => normalize(&parent.join(link)),
                        None => link,
                    };
                }
                Ok(_) => return check_inside(fs::canonicalize(&current)?, &root),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return check_inside(canonicalize_existing(&current)?, &root);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(CombineError::InvalidInput(format!(
            "too many levels of symbolic links: {}",
            path.display()
        )))
    }
}

fn check_inside(real: PathBuf, root: &Path) -> Result<PathBuf> {
    if real.starts_with(root) {
        Ok(real)
    } else {
        Err(CombineError::PathOutsideWorkspace(real))
    }
}

/// Canonicalize the longest existing ancestor and re-append the missing tail.
fn canonicalize_existing(path: &Path) -> io::Result<PathBuf> {
    let mut tail = Vec::new();
    let mut base = path;

    loop {
        match fs::canonicalize(base) {
            Ok(real) => return Ok(tail.iter().rev().fold(real, |acc, name| acc.join(name))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let (Some(parent), Some(name)) = (base.parent(), base.file_name()) else {
                    return Err(e);
                };
                tail.push(name.to_os_string());
                base = parent;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    out.iter().collect()
}
