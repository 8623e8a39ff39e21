//! README generation.
//!
//! Renders project records into the composite Markdown/HTML document. Output
//! is deterministic: the same records, folder and date always produce the
//! same bytes.
//!
//! ## Project block layout
//!
//! ```text
//! <div style="border: ...">            # only with show_border
//!
//! <div align="center">
//!
//! <img src=".." alt="Demo logo" height="64">
//!
//! ## Demo
//!
//! `Game` `IoT`
//!
//! <img src=".." alt="Demo" width="100%">
//!
//! **Short description**
//!
//! <p>Long description</p>
//!
//! <p>
//!   <a href=".."><img src="https://img.shields.io/badge/..."></a>
//! </p>
//!
//! ### Tech Stack
//! ...
//! ### Features
//! ...
//! ### Screenshots
//! ...
//! </div>
//!
//! </div>                               # only with show_border
//! ```
//!
//! Markdown is used for the parts GitHub renders from Markdown (title,
//! category code spans, bold short description, feature bullets); every HTML
//! element carrying user text goes through maud and is escaped.
//!
//! Category code spans are the only inline-code syntax inside a block.
//! Technologies use `<code>` tags instead, which is what lets the decoder
//! tell the two apart.

use crate::config::DocumentConfig;
use crate::naming::{self, ImageSlot};
use crate::resolve::ResolveContext;
use crate::types::{BorderStyle, DEFAULT_SCREENSHOT_SIZE, LinkKind, Project, ScreenshotLayout};
use chrono::NaiveDate;
use maud::html;
use std::fmt::Write as _;

/// Height attribute that marks the logo image.
pub const LOGO_HEIGHT: &str = "64";
/// Width attribute that marks the banner image.
pub const BANNER_WIDTH: &str = "100%";

pub const TECH_STACK_HEADING: &str = "Tech Stack";
pub const FEATURES_HEADING: &str = "Features";
pub const SCREENSHOTS_HEADING: &str = "Screenshots";

/// Header row of the table of contents. The decoder skips the block holding it.
pub const TOC_TABLE_HEADER: &str = "| # | Project | Categories |";

/// Comment carrying the screenshot styling when there is no screenshots
/// section for the decoder to read it from.
pub const STYLE_COMMENT_PREFIX: &str = "<!-- screenshots:";

/// A shields.io badge for one link slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    /// Label as written in the badge URL (`Play_Store`, `GitHub`, ...).
    pub label: &'static str,
    pub logo: &'static str,
    /// Fixed colour, or `None` for the project's theme colour.
    pub color: Option<&'static str>,
}

pub fn badge(kind: LinkKind) -> Badge {
    match kind {
        LinkKind::PlayStore => Badge {
            label: "Play_Store",
            logo: "google-play",
            color: Some("414141"),
        },
        LinkKind::AppStore => Badge {
            label: "App_Store",
            logo: "app-store",
            color: Some("0D96F6"),
        },
        LinkKind::Website => Badge {
            label: "Website",
            logo: "safari",
            color: None,
        },
        LinkKind::Github => Badge {
            label: "GitHub",
            logo: "github",
            color: Some("181717"),
        },
        LinkKind::Apk => Badge {
            label: "APK",
            logo: "android",
            color: Some("3DDC84"),
        },
    }
}

fn badge_url(label: &str, color: &str, logo: &str) -> String {
    format!("https://img.shields.io/badge/{label}-{color}?style=for-the-badge&logo={logo}&logoColor=white")
}

/// Inline style of the wrapper drawn around a bordered project.
pub fn border_css(style: BorderStyle) -> &'static str {
    match style {
        BorderStyle::Rounded => {
            "border: 1px solid #e5e7eb; border-radius: 12px; padding: 24px; margin: 16px 0;"
        }
        BorderStyle::Square => "border: 1px solid #e5e7eb; padding: 24px; margin: 16px 0;",
        BorderStyle::Dashed => {
            "border: 2px dashed #e5e7eb; border-radius: 8px; padding: 24px; margin: 16px 0;"
        }
    }
}

/// Document path for the logo or banner: the canonical staged path when the
/// reference is a local file, otherwise the reference verbatim.
fn staged_or_verbatim(ctx: &ResolveContext, id: &str, slot: ImageSlot, reference: &str) -> String {
    if ctx.local_file_exists(reference) {
        naming::canonical_path(id, slot, &naming::extension_of(reference))
    } else {
        reference.to_string()
    }
}

/// Render one project as a self-contained block.
pub fn encode_project(project: &Project, ctx: &ResolveContext) -> String {
    let id = project.effective_id();
    let title = if project.title.is_empty() {
        "Untitled"
    } else {
        project.title.as_str()
    };
    let mut content: Vec<String> = vec!["<div align=\"center\">".into(), String::new()];

    if project.show_logo && !project.logo_url.is_empty() {
        let src = staged_or_verbatim(ctx, &id, ImageSlot::Logo, &project.logo_url);
        let alt = format!("{} logo", project.title);
        content.push(html! { img src=(src) alt=(alt) height=(LOGO_HEIGHT); }.into_string());
        content.push(String::new());
    }

    content.push(format!("## {title}"));
    content.push(String::new());

    if !project.categories.is_empty() {
        let spans: Vec<String> = project
            .categories
            .iter()
            .map(|c| format!("`{}`", c.label()))
            .collect();
        content.push(spans.join(" "));
        content.push(String::new());
    }

    if !project.banner_image.is_empty() {
        let src = staged_or_verbatim(ctx, &id, ImageSlot::Banner, &project.banner_image);
        content.push(
            html! { img src=(src) alt=(project.title) width=(BANNER_WIDTH); }.into_string(),
        );
        content.push(String::new());
    }

    if !project.short_description.is_empty() {
        content.push(format!("**{}**", project.short_description));
        content.push(String::new());
    }

    if !project.long_description.is_empty() {
        content.push(html! { p { (project.long_description) } }.into_string());
        content.push(String::new());
    }

    let badges: Vec<String> = project
        .links
        .present()
        .map(|(kind, url)| {
            let b = badge(kind);
            let color = match b.color {
                Some(fixed) => fixed,
                None => project.badge_color(),
            };
            let src = badge_url(b.label, color, b.logo);
            html! { a href=(url) { img src=(src); } }.into_string()
        })
        .collect();
    if !badges.is_empty() {
        content.push("<p>".into());
        content.extend(badges.into_iter().map(|b| format!("  {b}")));
        content.push("</p>".into());
        content.push(String::new());
    }

    if !project.technologies.is_empty() {
        content.push(format!("### {TECH_STACK_HEADING}"));
        content.push(String::new());
        content.push("<p>".into());
        for tech in &project.technologies {
            content.push(format!("  {}", html! { code { (tech) } }.into_string()));
        }
        content.push("</p>".into());
        content.push(String::new());
    }

    if !project.features.is_empty() {
        content.push(format!("### {FEATURES_HEADING}"));
        content.push(String::new());
        content.extend(project.features.iter().map(|f| format!("- {f}")));
        content.push(String::new());
    }

    if project.screenshots.is_empty() {
        if let Some(comment) = style_comment(project) {
            content.push(comment);
            content.push(String::new());
        }
    } else {
        content.push(format!("### {SCREENSHOTS_HEADING}"));
        content.push(String::new());
        content.extend(screenshot_lines(project, &id));
        content.push(String::new());
    }

    content.push("</div>".into());
    content.push(String::new());

    let lines = if project.show_border {
        let mut wrapped = vec![
            format!("<div style=\"{}\">", border_css(project.border_style)),
            String::new(),
        ];
        wrapped.extend(content);
        wrapped.push("</div>".into());
        wrapped
    } else {
        content
    };
    lines.join("\n")
}

fn screenshot_lines(project: &Project, id: &str) -> Vec<String> {
    let size = project.effective_screenshot_size();
    let image = |n: usize, reference: &str| {
        let src = naming::screenshot_path(id, n, reference);
        html! { img src=(src) width=(size); }.into_string()
    };
    let numbered: Vec<(usize, &str)> = project
        .screenshots
        .iter()
        .enumerate()
        .map(|(i, shot)| (i + 1, shot.reference.as_str()))
        .collect();

    let mut lines = Vec::new();
    match project.screenshot_layout {
        ScreenshotLayout::Horizontal => {
            lines.push("<p>".to_string());
            for &(n, reference) in &numbered {
                lines.push(format!("  {}", image(n, reference)));
            }
            lines.push("</p>".to_string());
        }
        ScreenshotLayout::Grid => {
            lines.push("<table align=\"center\">".to_string());
            for row in numbered.chunks(2) {
                lines.push("  <tr>".to_string());
                for &(n, reference) in row {
                    lines.push(format!("    <td align=\"center\">{}</td>", image(n, reference)));
                }
                if row.len() < 2 {
                    lines.push("    <td></td>".to_string());
                }
                lines.push("  </tr>".to_string());
            }
            lines.push("</table>".to_string());
        }
        ScreenshotLayout::Vertical => {
            lines.push("<p>".to_string());
            for &(n, reference) in &numbered {
                lines.push(format!("  {}<br>", image(n, reference)));
            }
            lines.push("</p>".to_string());
        }
    }
    lines
}

/// `<!-- screenshots: layout=grid width=300 -->` for a project without
/// screenshots whose styling differs from the defaults.
fn style_comment(project: &Project) -> Option<String> {
    let size = project.effective_screenshot_size();
    if project.screenshot_layout == ScreenshotLayout::default() && size == DEFAULT_SCREENSHOT_SIZE {
        return None;
    }
    Some(format!(
        "{STYLE_COMMENT_PREFIX} layout={} width={size} -->",
        project.screenshot_layout
    ))
}

/// Render the whole README: header, table of contents, projects, footer.
pub fn encode_all(
    projects: &[Project],
    ctx: &ResolveContext,
    config: &DocumentConfig,
    date: NaiveDate,
) -> String {
    let mut lines: Vec<String> = header_lines(config);

    if !projects.is_empty() && config.toc.enabled {
        lines.push("<div align=\"center\">".into());
        lines.push(String::new());
        lines.push(format!("## {}", config.toc.heading));
        lines.push(String::new());
        lines.push(TOC_TABLE_HEADER.into());
        lines.push("|:---:|:----------|:------------|".into());
        for (i, project) in projects.iter().enumerate() {
            let title = if project.title.is_empty() {
                format!("Project {}", i + 1)
            } else {
                project.title.clone()
            };
            let anchor = naming::slug(&title);
            lines.push(format!(
                "| {} | [{title}](#{anchor}) | {} |",
                i + 1,
                project.category_display()
            ));
        }
        lines.push(String::new());
        lines.push("</div>".into());
        lines.push(String::new());
        lines.push("---".into());
        lines.push(String::new());
    }

    for (i, project) in projects.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
            lines.push("<hr>".into());
            lines.push(String::new());
        }
        lines.push(encode_project(project, ctx));
    }

    lines.push(String::new());
    lines.push("---".into());
    lines.push(String::new());
    lines.push("<div align=\"center\">".into());
    lines.push(String::new());
    lines.push(format!("<sub>Last updated: {}</sub>", format_date(date, &config.footer.date_format)));
    lines.push(String::new());
    lines.push("</div>".into());

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

fn header_lines(config: &DocumentConfig) -> Vec<String> {
    let header = &config.header;
    let mut lines: Vec<String> = vec!["<div align=\"center\">".into(), String::new()];

    if !header.logo.is_empty() {
        lines.push(
            html! { img src=(header.logo) alt=(header.title) height=(header.logo_height); }
                .into_string(),
        );
        lines.push(String::new());
    }

    lines.push(format!("# {}", header.title));
    lines.push(String::new());

    if !header.about.is_empty() {
        if !header.about_heading.is_empty() {
            lines.push(format!("### {}", header.about_heading));
            lines.push(String::new());
        }
        lines.push(header.about.clone());
        lines.push(String::new());
    }

    if !header.homepage_url.is_empty() {
        let label = header.homepage_label.replace('-', "--").replace(' ', "_");
        let src = badge_url(&label, "000000", "safari");
        lines.push("<p>".into());
        lines.push(format!(
            "  {}",
            html! { a href=(header.homepage_url) { img src=(src); } }.into_string()
        ));
        lines.push("</p>".into());
        lines.push(String::new());
    }

    lines.push("</div>".into());
    lines.push(String::new());
    lines.push("---".into());
    lines.push(String::new());
    lines
}

/// Format the footer date, falling back to `Month DD, YYYY` if the
/// configured pattern can't be rendered.
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_ok() {
        return out;
    }
    date.format(crate::config::DEFAULT_DATE_FORMAT).to_string()
}
