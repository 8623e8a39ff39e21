//! Shared test fixtures for the codec test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let projects = vec![demo_project(), full_project()];
//! let decoded = Codec::default().decode(&Codec::default().encode(&projects));
//! assert_eq!(titles(&decoded), vec!["Demo", "Full Stack"]);
//! ```

use crate::types::{BorderStyle, Category, Project, Screenshot, ScreenshotLayout};

// =========================================================================
// Fixture records
// =========================================================================

/// The small end-to-end example: one category, one tech, one feature, one
/// screenshot laid out horizontally at the default width.
pub fn demo_project() -> Project {
    let mut p = Project::new("Demo");
    p.add_category(Category::Game);
    p.technologies = vec!["Rust".into()];
    p.features = vec!["Fast".into()];
    p.screenshot_layout = ScreenshotLayout::Horizontal;
    p.screenshots = vec![Screenshot::local("a.png")];
    p.screenshot_size = 200;
    p
}

/// A record with every section populated. Images are external URLs so the
/// output doesn't depend on the filesystem.
pub fn full_project() -> Project {
    let mut p = Project::new("Full Stack");
    p.short_description = "A short pitch".into();
    p.long_description = "The long story.".into();
    p.add_category(Category::MobileApp);
    p.add_category(Category::Website);
    p.logo_url = "https://example.com/logo.png".into();
    p.banner_image = "https://example.com/banner.jpg".into();
    p.links.play_store = "https://play.google.com/store/apps/details?id=full.stack".into();
    p.links.github = "https://github.com/acme/full-stack".into();
    p.technologies = vec!["Flutter".into(), "Firebase".into()];
    p.features = vec!["Sync".into(), "Push notifications".into()];
    p.screenshots = (1..=3)
        .map(|i| Screenshot::local(format!("/home/dev/shots/screen-{i}.jpg")))
        .collect();
    p.screenshot_layout = ScreenshotLayout::Grid;
    p.screenshot_size = 240;
    p.show_border = true;
    p.border_style = BorderStyle::Rounded;
    p.theme_color = "#3b82f6".into();
    p
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All titles in order.
pub fn titles(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.title.as_str()).collect()
}

/// Find a project by title. Panics if not found.
pub fn find_project<'a>(projects: &'a [Project], title: &str) -> &'a Project {
    projects.iter().find(|p| p.title == title).unwrap_or_else(|| {
        let available = titles(projects);
        panic!("project '{title}' not found. Available: {available:?}")
    })
}
