//! # Showcase README
//!
//! Keeps a collection of project showcase records and a GitHub README in
//! sync. The README is the storage format: records encode to a
//! Markdown/HTML document, and a document decodes back to records, even
//! after someone has edited it by hand.
//!
//! # Architecture: Two Directions, One Folder
//!
//! ```text
//! encode   records + showcase.toml  →  README.md      (deterministic text)
//! decode   README.md                →  records        (best effort, never fails)
//! resolve  record image references  →  files under images/{id}/
//! stage    local image files        →  images/{id}/{slot}{ext}
//! ```
//!
//! The README's folder is the only context either direction needs. It is
//! passed explicitly through [`resolve::ResolveContext`]; nothing keeps a
//! "current document" between calls.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Project record, category vocabulary, link kinds and styling enums |
//! | [`naming`] | Slugs, image slots and the canonical `images/{id}/...` paths |
//! | [`resolve`] | Finds the file behind a reference, with fallbacks for moved files |
//! | [`encode`] | Renders records into the README, HTML fragments via Maud |
//! | [`decode`] | Recovers records from README text with tolerant patterns |
//! | [`codec`] | Bundles folder context and document config for both directions |
//! | [`config`] | `showcase.toml` loading, merging and validation |
//! | [`stage`] | Copies local images to their canonical locations |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Markup Shape Carries the Styling
//!
//! A README has nowhere to store a border style or a screenshot layout
//! except in the markup itself. Both are written as distinctive fragments
//! (`border-radius: 12px`, `<table`, `<br>`) and recovered by matching
//! those fragments. When a project has no screenshots there is no markup to
//! carry layout and width, so they go in a trailing HTML comment instead.
//!
//! ## Maud for Every Element With User Text
//!
//! Titles, descriptions and URLs end up inside HTML attributes. Rendering
//! those elements with [Maud](https://maud.lambda.xyz/) escapes them, so a
//! title containing `"` can't break an `alt` attribute. The decoder
//! unescapes what it extracts.
//!
//! ## Canonical Image Locations
//!
//! Image references written into the document point at
//! `images/{id}/{slot}{ext}` whenever the record's file is local. The
//! document then stays valid wherever the source files live, as long as
//! [`stage`] has copied them next to it.

pub mod codec;
pub mod config;
pub mod decode;
pub mod encode;
pub mod naming;
pub mod output;
pub mod resolve;
pub mod stage;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
