//! Jump point registry
//!
//! Jump points are symlinks under `<root>/<namespace>/`. The user config root
//! is the only one written to; every root is searched in priority order when
//! looking a name up.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ConfigRoots;
use crate::domain::jump_point::{absolutize, validate_name, JumpPoint};
use crate::error::{JumpError, Result};

/// Result of listing every visible jump point
#[derive(Debug, Default)]
pub struct Listing {
    /// Visible jump points sorted by name, shadowed duplicates removed
    pub jump_points: Vec<JumpPoint>,
    /// Entries that could not be read
    pub skipped: Vec<JumpError>,
}

#[derive(Debug, Clone)]
pub struct Registry {
    roots: ConfigRoots,
    namespace: String,
}

impl Registry {
    #[must_use]
    pub fn new(roots: ConfigRoots, namespace: impl Into<String>) -> Self {
        Self {
            roots,
            namespace: namespace.into(),
        }
    }

    /// Namespace directory in the writable root
    #[must_use]
    pub fn writable_dir(&self) -> PathBuf {
        self.roots.user().join(&self.namespace)
    }

    fn namespace_dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.roots.iter().map(|root| root.join(&self.namespace))
    }

    /// Find the highest-priority link named `name`
    fn find(&self, name: &str) -> Option<PathBuf> {
        self.namespace_dirs()
            .map(|dir| dir.join(name))
            .find(|candidate| is_symlink(candidate))
    }

    /// List every jump point visible across all roots
    ///
    /// A name present in several roots is reported once, from the
    /// highest-priority root. Non-symlink entries are ignored. Unreadable
    /// entries end up in `skipped` and do not stop the listing.
    #[must_use]
    pub fn list(&self) -> Listing {
        let mut listing = Listing::default();
        let mut seen = HashSet::new();

        for dir in self.namespace_dirs() {
            if !dir.is_dir() {
                continue;
            }

            let walker = WalkDir::new(&dir)
                .min_depth(1)
                .max_depth(1)
                .follow_links(false)
                .sort_by_file_name();

            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        let path = err.path().map_or_else(|| dir.clone(), Path::to_path_buf);
                        listing
                            .skipped
                            .push(JumpError::io("failed to read", path, io::Error::from(err)));
                        continue;
                    }
                };

                if !entry.file_type().is_symlink() {
                    continue;
                }

                let Some(name) = entry.file_name().to_str() else {
                    listing.skipped.push(JumpError::InvalidName(
                        entry.file_name().to_string_lossy().into_owned(),
                    ));
                    continue;
                };

                // Shadowed by a higher-priority root, even if that one was unreadable
                if !seen.insert(name.to_string()) {
                    continue;
                }

                match fs::read_link(entry.path()) {
                    Ok(target) => listing.jump_points.push(JumpPoint::new(name, target)),
                    Err(source) => listing.skipped.push(JumpError::io(
                        "failed to read link",
                        entry.path(),
                        source,
                    )),
                }
            }
        }

        listing.jump_points.sort_by(|a, b| a.name.cmp(&b.name));
        listing
    }

    /// Names of every visible jump point
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.list()
            .jump_points
            .into_iter()
            .map(|jump_point| jump_point.name)
            .collect()
    }

    /// Create a jump point in the writable root
    ///
    /// `path` is made absolute against the current directory.
    ///
    /// # Errors
    /// - `InvalidName` if `name` is not a single path segment
    /// - `PathResolution` if `path` cannot be made absolute
    /// - `AlreadyExists` if the writable root already has an entry named `name`
    /// - `Io` if the directory or link cannot be created
    pub fn create(&self, name: &str, path: &Path) -> Result<JumpPoint> {
        validate_name(name)?;
        let target = absolutize(path)?;

        let dir = self.writable_dir();
        let link = dir.join(name);
        if fs::symlink_metadata(&link).is_ok() {
            return Err(JumpError::AlreadyExists(name.to_string()));
        }

        fs::create_dir_all(&dir)
            .map_err(|source| JumpError::io("failed to create directory", &dir, source))?;
        symlink(&target, &link)
            .map_err(|source| JumpError::io("failed to create link", &link, source))?;

        Ok(JumpPoint::new(name, target))
    }

    /// Replace a jump point in the writable root, creating it if absent
    ///
    /// Removal of the old link is best effort. If creation then fails the
    /// jump point is gone. Only a symlink is removed: a regular file or
    /// directory with the same name is left in place and the call fails with
    /// `AlreadyExists`.
    ///
    /// # Errors
    /// Same as [`Registry::create`], except that an existing link is replaced
    pub fn modify(&self, name: &str, path: &Path) -> Result<JumpPoint> {
        validate_name(name)?;

        let link = self.writable_dir().join(name);
        if is_symlink(&link) {
            let _ = fs::remove_file(&link);
        }

        self.create(name, path)
    }

    /// Delete the highest-priority jump point named `name`
    ///
    /// # Errors
    /// - `InvalidName` if `name` is not a single path segment
    /// - `NotFound` if no root has the jump point
    /// - `Io` if the link cannot be deleted
    pub fn remove(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;

        let link = self
            .find(name)
            .ok_or_else(|| JumpError::NotFound(name.to_string()))?;
        fs::remove_file(&link)
            .map_err(|source| JumpError::io("failed to remove link", &link, source))?;

        Ok(link)
    }

    /// Read the target of the highest-priority jump point named `name`
    ///
    /// # Errors
    /// - `InvalidName` if `name` is not a single path segment
    /// - `NotFound` if no root has the jump point
    /// - `Io` if the link cannot be read
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;

        let link = self
            .find(name)
            .ok_or_else(|| JumpError::NotFound(name.to_string()))?;
        fs::read_link(&link).map_err(|source| JumpError::io("failed to read link", &link, source))
    }
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
