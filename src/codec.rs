//! The unit a record store talks to: encode records to a README, decode a
//! README back to records.
//!
//! A [`Codec`] holds only the explicit context both directions need (the
//! README's folder and its document config). It keeps no records between
//! calls.

use crate::config::{self, ConfigError, DocumentConfig};
use crate::decode;
use crate::encode;
use crate::resolve::{self, ResolveContext, ResolvedImage};
use crate::types::Project;
use chrono::NaiveDate;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Codec {
    pub context: ResolveContext,
    pub config: DocumentConfig,
}

impl Codec {
    pub fn new(context: ResolveContext, config: DocumentConfig) -> Self {
        Self { context, config }
    }

    /// Codec for a README at `document`: images resolve against its folder
    /// and `showcase.toml` from that folder is applied.
    pub fn for_document(document: &Path) -> Result<Self, ConfigError> {
        let dir = resolve::document_dir(document);
        let config = config::load_config(&dir)?;
        Ok(Self::new(ResolveContext::new(dir), config))
    }

    /// Full README stamped with today's local date.
    pub fn encode(&self, projects: &[Project]) -> String {
        self.encode_dated(projects, chrono::Local::now().date_naive())
    }

    /// Full README stamped with `date`.
    pub fn encode_dated(&self, projects: &[Project], date: NaiveDate) -> String {
        encode::encode_all(projects, &self.context, &self.config, date)
    }

    pub fn encode_project(&self, project: &Project) -> String {
        encode::encode_project(project, &self.context)
    }

    pub fn decode(&self, text: &str) -> Vec<Project> {
        decode::decode_all(text)
    }

    pub fn decode_project(&self, block: &str) -> Project {
        decode::decode_project(block)
    }

    /// Locate the files behind every image slot of a project.
    pub fn resolve_images(&self, project: &Project) -> Vec<ResolvedImage> {
        self.context.resolve_project(project)
    }
}
