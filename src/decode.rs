//! README parsing.
//!
//! Recovers project records from a document written by [`crate::encode`].
//! This is not a Markdown parser: each field is pulled out with a pattern
//! that mirrors how the encoder writes it, and anything that doesn't match
//! simply leaves the field at its default. Decoding never fails.
//!
//! ## Blocks
//!
//! The document is split on `<hr>` tags and on lines holding only `---`.
//! A block is a project when it has a level-2 heading; the header, the
//! footer and the table of contents (recognized by its table header) are
//! skipped. Projects without a title are dropped.
//!
//! ## What is lost on reopen
//!
//! - Source-side paths (`banner_local_path`, screenshot local paths) never
//!   reach the document. Screenshots come back as `screenshot_{N}.{ext}`.
//! - The id is re-derived from the title, so a customized id is replaced.
//! - Logo position is not represented in the markup.
//!
//! ## Styling recovered from markup shape
//!
//! Border style and screenshot layout have no field of their own in the
//! document. They are recovered by ordered rule tables ([`BORDER_RULES`],
//! [`LAYOUT_RULES`]): the first rule whose marker is present wins.

use crate::encode::{
    self, BANNER_WIDTH, FEATURES_HEADING, LOGO_HEIGHT, SCREENSHOTS_HEADING, STYLE_COMMENT_PREFIX,
    TECH_STACK_HEADING, TOC_TABLE_HEADER,
};
use crate::naming;
use crate::types::{BorderStyle, Category, LinkKind, Project, Screenshot, ScreenshotLayout};
use regex::Regex;
use std::sync::OnceLock;

/// Border markers, checked in order against the wrapper's style attribute.
/// A wrapper matching none of them is `Square`.
pub const BORDER_RULES: &[(&str, BorderStyle)] = &[
    ("border-radius: 12px", BorderStyle::Rounded),
    ("dashed", BorderStyle::Dashed),
];

/// Style fragments that mark a project border wrapper.
const BORDER_MARKERS: &[&str] = &["border: 1px solid", "border: 2px dashed"];

/// Layout markers, checked in order against the screenshots section.
/// A section matching none of them is `Horizontal`.
pub const LAYOUT_RULES: &[(&str, ScreenshotLayout)] = &[
    ("<table", ScreenshotLayout::Grid),
    ("<br", ScreenshotLayout::Vertical),
];

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($re).expect("valid regex"))
        }
    };
}

pattern!(hr_tag, r"(?i)<hr\s*/?>");
pattern!(level2_heading, r"(?m)^[ \t]{0,3}##[ \t]+(.+)$");
pattern!(subsection_heading, r"(?m)^[ \t]{0,3}###[ \t]+(.+)$");
pattern!(code_span, r"`([^`\n]+)`");
pattern!(bold, r"\*\*([^*]+)\*\*");
pattern!(plain_paragraph, r"<p>([^<]+)</p>");
pattern!(code_tag, r"<code>([^<]+)</code>");
pattern!(bullet, r"(?m)^[ \t]*[-*][ \t]+(.+)$");
pattern!(
    numbered_image,
    r#"images/[^/"\s]+/(\d+)\.((?i:png|jpg|jpeg|webp|gif))\b"#
);
pattern!(img_tag, r"<img\b[^>]*>");
pattern!(src_attr, r#"\bsrc="([^"]*)""#);
pattern!(alt_attr, r#"\balt="([^"]*)""#);
pattern!(pixel_width, r#"\bwidth="(\d+)""#);
pattern!(wrapper_style, r#"<div\s+style="([^"]*)""#);
pattern!(anchor_badge, r#"<a\s+href="([^"]+)"[^>]*>\s*<img\b[^>]*badge/([A-Za-z_]+)-([0-9A-Fa-f]*)"#);
pattern!(play_store_href, r#"href="(https://play\.google\.com[^"]*)""#);
pattern!(app_store_href, r#"href="(https://apps\.apple\.com[^"]*)""#);
pattern!(github_href, r#"href="(https://github\.com[^"]*)""#);
pattern!(style_comment, r"<!--\s*screenshots:\s*layout=(\w+)\s+width=(\d+)\s*-->");

/// Decode every project in a document, in document order.
pub fn decode_all(text: &str) -> Vec<Project> {
    split_blocks(text)
        .iter()
        .filter(|block| is_project_block(block))
        .map(|block| decode_project(block))
        .filter(|project| !project.title.is_empty())
        .collect()
}

/// Split a document into candidate blocks on `<hr>` tags and `---` lines.
pub fn split_blocks(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    let text = hr_tag().replace_all(&text, "\n---\n");

    let mut blocks = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim() == "---" {
            blocks.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    blocks.push(current);
    blocks.retain(|b| !b.trim().is_empty());
    blocks
}

fn is_project_block(block: &str) -> bool {
    level2_heading().is_match(block) && !block.contains(TOC_TABLE_HEADER)
}

/// Recover one project from its block. Missing pieces stay at defaults.
pub fn decode_project(block: &str) -> Project {
    let block = block.replace("\r\n", "\n");
    let block = block.as_str();
    let mut project = Project::default();

    if let Some(caps) = level2_heading().captures(block) {
        project.title = caps[1].trim().to_string();
        project.id = naming::slug(&project.title);
    }

    project.categories = categories(block);

    if let Some(caps) = bold().captures(block) {
        project.short_description = caps[1].trim().to_string();
    }
    if let Some(caps) = plain_paragraph().captures(block) {
        project.long_description = unescape_html(caps[1].trim());
    }

    if let Some(tech) = section(block, TECH_STACK_HEADING) {
        project.technologies = code_tag()
            .captures_iter(tech)
            .map(|c| unescape_html(c[1].trim()))
            .collect();
    }
    if let Some(features) = section(block, FEATURES_HEADING) {
        project.features = bullet()
            .captures_iter(features)
            .map(|c| c[1].trim().to_string())
            .collect();
    }

    decode_links(block, &mut project);

    project.screenshots = numbered_image()
        .captures_iter(block)
        .filter_map(|c| c[1].parse::<usize>().ok().map(|n| (n, c[2].to_string())))
        .map(|(n, ext)| Screenshot::local(naming::recovered_screenshot_name(n, &ext)))
        .collect();

    for tag in img_tag().find_iter(block).map(|m| m.as_str()) {
        let Some(src) = attr(src_attr(), tag) else {
            continue;
        };
        if project.banner_image.is_empty() && tag.contains(&format!("width=\"{BANNER_WIDTH}\"")) {
            project.banner_image = src;
        } else if project.logo_url.is_empty()
            && tag.contains(&format!("height=\"{LOGO_HEIGHT}\""))
            && attr(alt_attr(), tag).is_some_and(|alt| alt.ends_with("logo"))
        {
            project.logo_url = src;
            project.show_logo = true;
        }
    }

    if let Some(style) = border_wrapper_style(block) {
        project.show_border = true;
        project.border_style = first_rule(&style, BORDER_RULES).unwrap_or(BorderStyle::Square);
    }

    let screenshots = section(block, SCREENSHOTS_HEADING);
    let comment = style_comment().captures(block);
    project.screenshot_layout = match (&comment, screenshots) {
        (Some(c), None) => c[1].parse().unwrap_or_default(),
        (_, Some(body)) => first_rule(body, LAYOUT_RULES).unwrap_or_default(),
        (None, None) => ScreenshotLayout::default(),
    };
    let width = match (&comment, screenshots) {
        (Some(c), None) => c[2].parse::<u32>().ok(),
        _ => pixel_width()
            .captures(block)
            .and_then(|c| c[1].parse::<u32>().ok()),
    };
    if let Some(width) = width.filter(|w| *w > 0) {
        project.screenshot_size = width;
    }

    project
}

/// Category candidates are the block's inline-code spans, kept only when
/// they name a known category.
///
/// This leans on the encoder writing technologies as `<code>` tags: any
/// other inline-code span inside a block would be read as a category
/// candidate here.
pub fn categories(block: &str) -> Vec<Category> {
    let mut found = Vec::new();
    for caps in code_span().captures_iter(block) {
        if let Some(category) = Category::from_label(caps[1].trim()) {
            if !found.contains(&category) {
                found.push(category);
            }
        }
    }
    found
}

/// Body of the `### {name}` subsection, up to the next `###` heading.
fn section<'a>(block: &'a str, name: &str) -> Option<&'a str> {
    let headings: Vec<_> = subsection_heading().captures_iter(block).collect();
    headings.iter().enumerate().find_map(|(i, caps)| {
        if caps[1].trim() != name {
            return None;
        }
        let start = caps.get(0)?.end();
        let end = headings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(block.len(), |m| m.start());
        Some(&block[start..end])
    })
}

fn decode_links(block: &str, project: &mut Project) {
    let badges: Vec<(String, String, String)> = anchor_badge()
        .captures_iter(block)
        .map(|c| (unescape_html(&c[1]), c[2].to_string(), c[3].to_string()))
        .collect();

    for kind in LinkKind::ALL {
        let label = encode::badge(kind).label;
        let by_badge = badges
            .iter()
            .find(|(_, badge_label, _)| badge_label == label)
            .map(|(href, _, _)| href.clone());
        if let Some(url) = by_badge.or_else(|| link_by_host(block, kind, &badges)) {
            project.links.set(kind, url);
        }
    }

    let website_color = badges
        .iter()
        .find(|(_, label, color)| label == encode::badge(LinkKind::Website).label && !color.is_empty())
        .map(|(_, _, color)| color.clone());
    if let Some(color) = website_color {
        project.theme_color = format!("#{color}");
    }
}

/// Fallback for hand-edited anchors without our badges: recognize the store
/// and GitHub links by host. Hrefs already claimed by a badge are skipped.
fn link_by_host(block: &str, kind: LinkKind, badges: &[(String, String, String)]) -> Option<String> {
    let re = match kind {
        LinkKind::PlayStore => play_store_href(),
        LinkKind::AppStore => app_store_href(),
        LinkKind::Github => github_href(),
        LinkKind::Website | LinkKind::Apk => return None,
    };
    re.captures_iter(block)
        .map(|c| unescape_html(&c[1]))
        .find(|href| !badges.iter().any(|(claimed, _, _)| claimed == href))
}

fn border_wrapper_style(block: &str) -> Option<String> {
    wrapper_style()
        .captures_iter(block)
        .map(|c| c[1].to_string())
        .find(|style| BORDER_MARKERS.iter().any(|m| style.contains(m)))
}

fn first_rule<T: Copy>(haystack: &str, rules: &[(&str, T)]) -> Option<T> {
    rules
        .iter()
        .find(|(marker, _)| haystack.contains(marker))
        .map(|(_, value)| *value)
}

fn attr(re: &Regex, tag: &str) -> Option<String> {
    re.captures(tag).map(|c| unescape_html(&c[1]))
}

/// Undo the escaping maud applies to text and attribute values.
pub fn unescape_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
