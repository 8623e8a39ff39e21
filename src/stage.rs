//! Asset staging: copy each project's local images to the canonical
//! `images/{id}/{slot}{ext}` locations beside the exported README.
//!
//! The encoder already writes canonical paths for every local image, so a
//! README is only complete once its images have been staged. Staging is two
//! steps:
//!
//! 1. [`plan`] decides which local files go where, touching the filesystem
//!    only to check they exist. URLs and stale paths are left out.
//! 2. [`stage`] performs the copies.
//!
//! ## Skipping unchanged files
//!
//! Re-exporting a README usually re-stages the same images. A copy is
//! skipped when the destination already holds a file with the same SHA-256
//! as the source. Content-based rather than mtime-based, so it survives a
//! `git checkout` of the output folder. This also covers the case where a
//! decoded README's images already live at their canonical location and
//! source and destination are the same file.

use crate::naming::{self, ImageSlot};
use crate::resolve::ResolveContext;
use crate::types::Project;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StageError {
    #[error("IO error staging {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One planned copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedAsset {
    /// Title of the owning project, for reporting.
    pub project: String,
    pub slot: ImageSlot,
    /// Existing local file.
    pub source: PathBuf,
    /// Canonical path relative to the README folder (`images/{id}/...`).
    pub destination: String,
}

/// Work out which local files each project needs staged.
///
/// `sources` resolves the records' local paths (absolute, or relative to
/// the folder the records were loaded from). Projects without an id or
/// title have no image folder and are skipped.
pub fn plan(projects: &[Project], sources: &ResolveContext) -> Vec<StagedAsset> {
    let mut assets = Vec::new();
    for project in projects {
        let id = project.effective_id();
        if id.is_empty() {
            continue;
        }
        let mut push = |slot: ImageSlot, reference: &str, destination: String| {
            if let Some(source) = sources.local_file(reference) {
                assets.push(StagedAsset {
                    project: project.title.clone(),
                    slot,
                    source,
                    destination,
                });
            }
        };

        if project.show_logo && !project.logo_url.is_empty() {
            let ext = naming::extension_of(&project.logo_url);
            push(
                ImageSlot::Logo,
                &project.logo_url,
                naming::canonical_path(&id, ImageSlot::Logo, &ext),
            );
        }

        if !project.banner_image.is_empty() {
            let reference = if sources.local_file_exists(&project.banner_local_path) {
                &project.banner_local_path
            } else {
                &project.banner_image
            };
            let ext = naming::extension_of(&project.banner_image);
            push(
                ImageSlot::Banner,
                reference,
                naming::canonical_path(&id, ImageSlot::Banner, &ext),
            );
        }

        for (i, shot) in project.screenshots.iter().enumerate() {
            let reference = if shot.local_path.is_empty() {
                &shot.reference
            } else {
                &shot.local_path
            };
            push(
                ImageSlot::Screenshot(i + 1),
                reference,
                naming::screenshot_path(&id, i + 1, &shot.reference),
            );
        }
    }
    assets
}

/// Copy planned assets under `root` (the README folder).
pub fn stage(assets: &[StagedAsset], root: &Path) -> Result<StageStats, StageError> {
    let mut stats = StageStats::default();
    for asset in assets {
        let destination = root.join(&asset.destination);
        if destination.is_file() && same_content(&asset.source, &destination)? {
            stats.unchanged();
            continue;
        }
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|source| StageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::copy(&asset.source, &destination).map_err(|source| StageError::Io {
            path: destination.clone(),
            source,
        })?;
        stats.copied();
    }
    Ok(stats)
}

fn same_content(a: &Path, b: &Path) -> Result<bool, StageError> {
    Ok(hash_file(a)? == hash_file(b)?)
}

/// SHA-256 hash of a file's contents, returned as a hex string.
pub fn hash_file(path: &Path) -> Result<String, StageError> {
    let bytes = fs::read(path).map_err(|source| StageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{:x}", digest))
}

/// Summary of a staging run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StageStats {
    pub copied: u32,
    pub unchanged: u32,
}

impl StageStats {
    pub fn copied(&mut self) {
        self.copied += 1;
    }

    pub fn unchanged(&mut self) {
        self.unchanged += 1;
    }

    pub fn total(&self) -> u32 {
        self.copied + self.unchanged
    }
}

impl fmt::Display for StageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unchanged > 0 {
            write!(
                f,
                "{} copied, {} unchanged ({} total)",
                self.copied,
                self.unchanged,
                self.total()
            )
        } else {
            write!(f, "{} copied", self.copied)
        }
    }
}
