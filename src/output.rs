//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each project leads
//! with its positional index and title; ids, categories and image paths are
//! secondary context on indented lines. Positions match the order the
//! projects appear in the README.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! Projects (2)
//! 001 Demo
//!     Id: demo
//!     Categories: Game
//!     Screenshots: 1 (horizontal, 200px)
//! 002 Full Stack
//!     Id: full-stack
//!     Categories: Mobile App, Website
//!     Screenshots: 3 (grid, 240px)
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 Demo
//!     logo: images/demo/logo.png
//!     screenshot 1: missing (Image: a.png)
//! 002 Full Stack
//!     banner: external
//!
//! 1 of 3 images unresolved
//! ```
//!
//! ## Stage
//!
//! ```text
//! 001 Demo
//!     logo → images/demo/logo.png
//!     screenshot 1 → images/demo/1.png
//! Staged 1 copied, 1 unchanged (2 total)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::naming::ImageSlot;
use crate::resolve::ResolvedImage;
use crate::stage::{StageStats, StagedAsset};
use crate::types::Project;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Project header: positional index + title. Untitled projects show their
/// id in parens, since that is all that identifies them.
fn project_header(index: usize, project: &Project) -> String {
    if project.title.is_empty() {
        format!("{} ({})", format_index(index), project.effective_id())
    } else {
        format!("{} {}", format_index(index), project.title)
    }
}

fn slot_label(slot: ImageSlot) -> String {
    match slot {
        ImageSlot::Screenshot(n) => format!("screenshot {n}"),
        other => other.to_string(),
    }
}

// ============================================================================
// List
// ============================================================================

/// Format the decoded project inventory.
pub fn format_inventory(projects: &[Project]) -> Vec<String> {
    let mut lines = vec![format!("Projects ({})", projects.len())];
    for (i, project) in projects.iter().enumerate() {
        lines.push(project_header(i + 1, project));
        lines.push(format!("    Id: {}", project.effective_id()));
        lines.push(format!("    Categories: {}", project.category_display()));
        if !project.screenshots.is_empty() {
            lines.push(format!(
                "    Screenshots: {} ({}, {}px)",
                project.screenshots.len(),
                project.screenshot_layout,
                project.effective_screenshot_size()
            ));
        }
    }
    lines
}

pub fn print_inventory(projects: &[Project]) {
    for line in format_inventory(projects) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format image resolution results, one block per project.
///
/// `resolved[i]` holds the slots of `projects[i]`. Projects without images
/// are omitted.
pub fn format_check_report(projects: &[Project], resolved: &[Vec<ResolvedImage>]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut total = 0;
    let mut missing = 0;

    for (i, (project, images)) in projects.iter().zip(resolved).enumerate() {
        if images.is_empty() {
            continue;
        }
        lines.push(project_header(i + 1, project));
        for image in images {
            total += 1;
            let status = match (&image.path, image.external) {
                (Some(path), _) => path.display().to_string(),
                (None, true) => "external".to_string(),
                (None, false) => {
                    missing += 1;
                    format!("missing ({})", image.placeholder_label())
                }
            };
            lines.push(format!("    {}: {}", slot_label(image.slot), status));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    if missing == 0 {
        lines.push(format!("All {} images resolved", total));
    } else {
        lines.push(format!("{} of {} images unresolved", missing, total));
    }
    lines
}

pub fn print_check_report(projects: &[Project], resolved: &[Vec<ResolvedImage>]) {
    for line in format_check_report(projects, resolved) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage
// ============================================================================

/// Format a staging run. Assets are grouped under the project they belong
/// to, in plan order.
pub fn format_stage_output(assets: &[StagedAsset], stats: &StageStats) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<&str> = None;
    let mut position = 0;

    for asset in assets {
        if current != Some(asset.project.as_str()) {
            position += 1;
            current = Some(asset.project.as_str());
            lines.push(format!("{} {}", format_index(position), asset.project));
        }
        lines.push(format!(
            "    {} \u{2192} {}",
            slot_label(asset.slot),
            asset.destination
        ));
    }
    lines.push(format!("Staged {}", stats));
    lines
}

pub fn print_stage_output(assets: &[StagedAsset], stats: &StageStats) {
    for line in format_stage_output(assets, stats) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::path::PathBuf;

    #[test]
    fn format_index_padding() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn project_header_untitled_shows_id() {
        let mut p = Project::default();
        p.id = "orphan".into();
        assert_eq!(project_header(2, &p), "002 (orphan)");
    }

    #[test]
    fn slot_labels() {
        assert_eq!(slot_label(ImageSlot::Logo), "logo");
        assert_eq!(slot_label(ImageSlot::Banner), "banner");
        assert_eq!(slot_label(ImageSlot::Screenshot(3)), "screenshot 3");
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    #[test]
    fn inventory_lists_projects_in_order() {
        let lines = format_inventory(&[demo_project(), full_project()]);
        assert_eq!(
            lines,
            vec![
                "Projects (2)",
                "001 Demo",
                "    Id: demo",
                "    Categories: Game",
                "    Screenshots: 1 (horizontal, 200px)",
                "002 Full Stack",
                "    Id: full-stack",
                "    Categories: Mobile App, Website",
                "    Screenshots: 3 (grid, 240px)",
            ]
        );
    }

    #[test]
    fn inventory_without_screenshots_or_categories() {
        let lines = format_inventory(&[Project::new("Bare")]);
        assert_eq!(lines[3], "    Categories: —");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn inventory_empty() {
        assert_eq!(format_inventory(&[]), vec!["Projects (0)"]);
    }

    // =========================================================================
    // Check report
    // =========================================================================

    fn image(slot: ImageSlot, reference: &str, path: Option<&str>) -> ResolvedImage {
        ResolvedImage {
            slot,
            reference: reference.into(),
            external: reference.starts_with("https://"),
            path: path.map(PathBuf::from),
        }
    }

    #[test]
    fn check_report_marks_missing_and_external() {
        let projects = vec![demo_project(), full_project()];
        let resolved = vec![
            vec![
                image(ImageSlot::Logo, "logo.png", Some("images/demo/logo.png")),
                image(ImageSlot::Screenshot(1), "shots/a.png", None),
            ],
            vec![image(ImageSlot::Banner, "https://example.com/banner.jpg", None)],
        ];
        let lines = format_check_report(&projects, &resolved);
        assert_eq!(
            lines,
            vec![
                "001 Demo",
                "    logo: images/demo/logo.png",
                "    screenshot 1: missing (Image: a.png)",
                "002 Full Stack",
                "    banner: external",
                "",
                "1 of 3 images unresolved",
            ]
        );
    }

    #[test]
    fn check_report_skips_projects_without_images() {
        let projects = vec![Project::new("Bare"), demo_project()];
        let resolved = vec![
            vec![],
            vec![image(ImageSlot::Screenshot(1), "a.png", Some("images/demo/1.png"))],
        ];
        let lines = format_check_report(&projects, &resolved);
        assert_eq!(lines[0], "002 Demo");
        assert_eq!(lines.last().unwrap(), "All 1 images resolved");
    }

    #[test]
    fn check_report_nothing_to_check() {
        assert_eq!(format_check_report(&[], &[]), vec!["All 0 images resolved"]);
    }

    // =========================================================================
    // Stage output
    // =========================================================================

    fn asset(project: &str, slot: ImageSlot, destination: &str) -> StagedAsset {
        StagedAsset {
            project: project.into(),
            slot,
            source: PathBuf::from("src.png"),
            destination: destination.into(),
        }
    }

    #[test]
    fn stage_output_groups_by_project() {
        let assets = vec![
            asset("Demo", ImageSlot::Logo, "images/demo/logo.png"),
            asset("Demo", ImageSlot::Screenshot(1), "images/demo/1.png"),
            asset("Other", ImageSlot::Banner, "images/other/banner.jpg"),
        ];
        let stats = StageStats { copied: 2, unchanged: 1 };
        let lines = format_stage_output(&assets, &stats);
        assert_eq!(
            lines,
            vec![
                "001 Demo",
                "    logo \u{2192} images/demo/logo.png",
                "    screenshot 1 \u{2192} images/demo/1.png",
                "002 Other",
                "    banner \u{2192} images/other/banner.jpg",
                "Staged 2 copied, 1 unchanged (3 total)",
            ]
        );
    }

    #[test]
    fn stage_output_nothing_staged() {
        let lines = format_stage_output(&[], &StageStats::default());
        assert_eq!(lines, vec!["Staged 0 copied"]);
    }
}
