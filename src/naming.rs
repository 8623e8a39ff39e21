//! Centralized naming for project slugs and staged image files.
//!
//! Every image that belongs to a project lives at a fixed relative location
//! beside the README:
//!
//! ```text
//! images/{project-id}/logo{ext}
//! images/{project-id}/banner{ext}
//! images/{project-id}/{n}{ext}      # screenshots, 1-based
//! ```
//!
//! The encoder writes these paths, the decoder reads them back, the resolver
//! probes them on disk, and the stager copies files to them. Keeping the
//! convention in one module is what keeps those four in agreement.
//!
//! ## Slugs
//!
//! Project ids and table-of-contents anchors share one rule: lower-case the
//! title, turn spaces into hyphens, drop everything outside `[a-z0-9-]`.
//! - `"My Cool App"` → `"my-cool-app"`
//! - `"AI/ML Lab"` → `"aiml-lab"`
//! - `"Café"` → `"caf"`

use std::fmt;
use std::path::Path;

/// Root folder (relative to the README) holding per-project image folders.
pub const IMAGES_DIR: &str = "images";

/// Extensions a screenshot may be staged with, in probe order.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp", ".gif"];
/// Extensions probed for a staged logo.
pub const LOGO_EXTENSIONS: &[&str] = &[".png", ".jpg", ".svg"];
/// Extensions probed for a staged banner.
pub const BANNER_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

/// Extension used for a screenshot whose reference carries none.
pub const DEFAULT_SCREENSHOT_EXTENSION: &str = ".png";

/// Derive a slug from a title.
///
/// Total and idempotent: the output only contains `[a-z0-9-]`, and slugging
/// a slug returns it unchanged.
pub fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// A logical image position within a project, independent of file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Logo,
    Banner,
    /// 1-based screenshot position.
    Screenshot(usize),
}

impl ImageSlot {
    /// Extensions to probe when looking for this slot's staged file.
    pub fn probe_extensions(self) -> &'static [&'static str] {
        match self {
            ImageSlot::Logo => LOGO_EXTENSIONS,
            ImageSlot::Banner => BANNER_EXTENSIONS,
            ImageSlot::Screenshot(_) => IMAGE_EXTENSIONS,
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSlot::Logo => f.write_str("logo"),
            ImageSlot::Banner => f.write_str("banner"),
            ImageSlot::Screenshot(n) => write!(f, "{n}"),
        }
    }
}

/// The extension of a path or URL, including the dot, or `""` if none.
///
/// Only the final path component is considered, so dots in directory names
/// don't count. Lowercased, since canonical paths are probed by lowercase
/// extension.
pub fn extension_of(reference: &str) -> String {
    Path::new(reference)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_ascii_lowercase()))
        .unwrap_or_default()
}

/// The final path component of a reference.
pub fn basename(reference: &str) -> &str {
    reference
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(reference)
}

/// Canonical document path for a slot: `images/{id}/{slot}{ext}`.
///
/// Always uses forward slashes, since it is written into the README.
pub fn canonical_path(project_id: &str, slot: ImageSlot, ext: &str) -> String {
    format!("{IMAGES_DIR}/{project_id}/{slot}{ext}")
}

/// Canonical path for screenshot `n`, taking the extension from the stored
/// reference and falling back to `.png`.
pub fn screenshot_path(project_id: &str, n: usize, reference: &str) -> String {
    let ext = extension_of(reference);
    let ext = if ext.is_empty() {
        DEFAULT_SCREENSHOT_EXTENSION.to_string()
    } else {
        ext
    };
    canonical_path(project_id, ImageSlot::Screenshot(n), &ext)
}

/// Trailing number of a file stem, if it ends in one.
///
/// - `"screenshot_3.png"` → `Some(3)`
/// - `"7.jpg"` → `Some(7)`
/// - `"shot-v2-final.png"` → `None`
pub fn trailing_number(reference: &str) -> Option<usize> {
    let name = basename(reference);
    let stem = match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => return None,
    };
    let digits_start = stem
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    stem[digits_start..].parse().ok()
}

/// Synthetic reference given to a screenshot recovered from a document.
pub fn recovered_screenshot_name(n: usize, ext: &str) -> String {
    format!(
        "screenshot_{n}.{}",
        ext.trim_start_matches('.').to_ascii_lowercase()
    )
}
