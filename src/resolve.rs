//! Image reference resolution.
//!
//! A project refers to its images by whatever the user typed or picked: an
//! absolute path on their machine, a path relative to the README, a URL, or
//! the synthetic `screenshot_N.ext` name a decoded document leaves behind.
//! The resolver turns such a reference plus its logical [`ImageSlot`] into a
//! concrete file, when one exists.
//!
//! ## Resolution order
//!
//! Given a reference `ref` and the README folder `D` (first match wins):
//!
//! 1. `ref` itself, if absolute and present
//! 2. `D/ref`
//! 3. `D/images/{id}/basename(ref)`
//! 4. `D/images/{id}/{N}{ext}` when `basename(ref)` ends in a number `N`,
//!    for each screenshot extension
//! 5. the slot's staged location: `logo.{png,jpg,svg}`,
//!    `banner.{jpg,jpeg,png,webp}`, or `{n}.{ext}` for screenshot `n`
//!
//! Nothing found is a normal outcome (`None`), never an error. Callers show
//! a placeholder instead.
//!
//! The folder `D` is passed in explicitly through [`ResolveContext`]; there is
//! no notion of a "current document".

use crate::naming::{self, IMAGES_DIR, ImageSlot};
use crate::types::Project;
use std::path::{Path, PathBuf};

/// Where to look for a project's images.
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// Folder containing the README, if the document has been saved somewhere.
    pub base_dir: Option<PathBuf>,
}

impl ResolveContext {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// A context with no folder: only absolute references can resolve.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Context for a README path: its parent folder.
    pub fn for_document(document: &Path) -> Self {
        Self::new(document_dir(document))
    }

    /// `D/images/{id}`, when `D` is known.
    pub fn project_dir(&self, project_id: &str) -> Option<PathBuf> {
        if project_id.is_empty() {
            return None;
        }
        self.base_dir
            .as_ref()
            .map(|base| base.join(IMAGES_DIR).join(project_id))
    }

    /// Whether a reference names a file on disk, either absolutely or
    /// relative to the README folder.
    ///
    /// The encoder uses this to decide between emitting a canonical
    /// `images/...` path (the file will be staged there) and the reference
    /// verbatim (an external URL).
    pub fn local_file_exists(&self, reference: &str) -> bool {
        self.local_file(reference).is_some()
    }

    /// The local file a reference names, without any `images/{id}` probing.
    pub fn local_file(&self, reference: &str) -> Option<PathBuf> {
        if reference.is_empty() || is_url(reference) {
            return None;
        }
        let path = Path::new(reference);
        if path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }
        match &self.base_dir {
            Some(base) => {
                let joined = base.join(path);
                joined.is_file().then_some(joined)
            }
            None => None,
        }
    }

    /// Locate the file behind `reference` for `slot` of `project_id`.
    pub fn resolve(&self, project_id: &str, slot: ImageSlot, reference: &str) -> Option<PathBuf> {
        if !reference.is_empty() {
            if let Some(found) = self.local_file(reference) {
                return Some(found);
            }
        }

        let dir = self.project_dir(project_id)?;

        if !reference.is_empty() && !is_url(reference) {
            let by_name = dir.join(naming::basename(reference));
            if by_name.is_file() {
                return Some(by_name);
            }
            if let Some(n) = naming::trailing_number(reference) {
                if let Some(found) = probe(&dir, &n.to_string(), naming::IMAGE_EXTENSIONS) {
                    return Some(found);
                }
            }
        }

        probe(&dir, &slot.to_string(), slot.probe_extensions())
    }

    /// Resolve every image slot a project uses.
    pub fn resolve_project(&self, project: &Project) -> Vec<ResolvedImage> {
        let id = project.effective_id();
        let mut images = Vec::new();

        if project.show_logo && !project.logo_url.is_empty() {
            images.push(self.resolved(&id, ImageSlot::Logo, &project.logo_url));
        }
        if !project.banner_image.is_empty() {
            let reference = if project.banner_local_path.is_empty() {
                &project.banner_image
            } else {
                &project.banner_local_path
            };
            let mut image = self.resolved(&id, ImageSlot::Banner, reference);
            if image.path.is_none() && reference != &project.banner_image {
                image = self.resolved(&id, ImageSlot::Banner, &project.banner_image);
            }
            images.push(image);
        }
        for (i, shot) in project.screenshots.iter().enumerate() {
            let reference = if shot.local_path.is_empty() {
                &shot.reference
            } else {
                &shot.local_path
            };
            images.push(self.resolved(&id, ImageSlot::Screenshot(i + 1), reference));
        }
        images
    }

    fn resolved(&self, id: &str, slot: ImageSlot, reference: &str) -> ResolvedImage {
        ResolvedImage {
            slot,
            reference: reference.to_string(),
            external: is_url(reference),
            path: self.resolve(id, slot, reference),
        }
    }
}

/// Outcome of resolving one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub slot: ImageSlot,
    pub reference: String,
    /// The reference is a URL; it is shown as-is and never needs a file.
    pub external: bool,
    pub path: Option<PathBuf>,
}

impl ResolvedImage {
    /// Neither a file nor a URL backs this slot.
    pub fn is_missing(&self) -> bool {
        self.path.is_none() && !self.external
    }

    /// Display name for a placeholder when the slot is missing.
    pub fn placeholder_label(&self) -> String {
        format!("Image: {}", naming::basename(&self.reference))
    }
}

/// Folder of a document path, `.` for a bare file name.
pub fn document_dir(document: &Path) -> PathBuf {
    document
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf()
}

/// References starting with a URL scheme are never local files.
pub fn is_url(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    ["http://", "https://", "data:", "file://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

fn probe(dir: &Path, stem: &str, extensions: &[&str]) -> Option<PathBuf> {
    extensions
        .iter()
        .map(|ext| dir.join(format!("{stem}{ext}")))
        .find(|candidate| candidate.is_file())
}
