//! The project record and its styling vocabulary.
//!
//! A [`Project`] is one showcased entry in the README. Records are what the
//! codec encodes and what it recovers on decode; they are also the JSON
//! record-store format used by the `build` and `export` commands.
//!
//! Closed vocabularies (categories, link kinds, styling choices) are enums so
//! that values outside them cannot be represented. When deserializing, an
//! unknown string falls back to the field's default (or, for categories, is
//! dropped) instead of rejecting the whole record.

use crate::naming;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed category vocabulary. Anything else is never recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Mobile App")]
    MobileApp,
    Website,
    IoT,
    Game,
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "3D/AR/VR")]
    XrThreeD,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::MobileApp,
        Category::Website,
        Category::IoT,
        Category::Game,
        Category::AiMl,
        Category::XrThreeD,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::MobileApp => "Mobile App",
            Category::Website => "Website",
            Category::IoT => "IoT",
            Category::Game => "Game",
            Category::AiMl => "AI/ML",
            Category::XrThreeD => "3D/AR/VR",
            Category::Other => "Other",
        }
    }

    /// Exact, case-sensitive lookup in the vocabulary.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five link slots, in the order badges are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    PlayStore,
    AppStore,
    Website,
    Github,
    Apk,
}

impl LinkKind {
    pub const ALL: [LinkKind; 5] = [
        LinkKind::PlayStore,
        LinkKind::AppStore,
        LinkKind::Website,
        LinkKind::Github,
        LinkKind::Apk,
    ];

    /// Record-store key (`playStore`, `appStore`, ...).
    pub fn key(self) -> &'static str {
        match self {
            LinkKind::PlayStore => "playStore",
            LinkKind::AppStore => "appStore",
            LinkKind::Website => "website",
            LinkKind::Github => "github",
            LinkKind::Apk => "apk",
        }
    }
}

/// Link URLs keyed by [`LinkKind`]. Every key always exists; an empty
/// string means the link is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Links {
    pub play_store: String,
    pub app_store: String,
    pub website: String,
    pub github: String,
    pub apk: String,
}

impl Links {
    pub fn get(&self, kind: LinkKind) -> &str {
        match kind {
            LinkKind::PlayStore => &self.play_store,
            LinkKind::AppStore => &self.app_store,
            LinkKind::Website => &self.website,
            LinkKind::Github => &self.github,
            LinkKind::Apk => &self.apk,
        }
    }

    pub fn set(&mut self, kind: LinkKind, url: impl Into<String>) {
        let slot = match kind {
            LinkKind::PlayStore => &mut self.play_store,
            LinkKind::AppStore => &mut self.app_store,
            LinkKind::Website => &mut self.website,
            LinkKind::Github => &mut self.github,
            LinkKind::Apk => &mut self.apk,
        };
        *slot = url.into();
    }

    /// Present links in badge order.
    pub fn present(&self) -> impl Iterator<Item = (LinkKind, &str)> {
        LinkKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, url)| !url.is_empty())
    }
}

/// One screenshot: the reference the document knows about and the
/// source-side file it was picked from. Keeping both in one record makes
/// the pairing structural.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Screenshot {
    pub reference: String,
    pub local_path: String,
}

impl Screenshot {
    /// A screenshot picked from a local file: reference and source coincide.
    pub fn local(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            reference: path.clone(),
            local_path: path,
        }
    }
}

macro_rules! styling_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant,)+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

styling_enum! {
    /// Horizontal placement of the logo above the title.
    LogoPosition { Left => "left", Center => "center", Right => "right" } default Center
}

styling_enum! {
    /// Frame drawn around a project block when `show_border` is set.
    BorderStyle { Rounded => "rounded", Square => "square", Dashed => "dashed" } default Rounded
}

styling_enum! {
    /// How the screenshots section lays out its images.
    ScreenshotLayout { Horizontal => "horizontal", Grid => "grid", Vertical => "vertical" } default Horizontal
}

pub const DEFAULT_THEME_COLOR: &str = "#000000";
pub const DEFAULT_SCREENSHOT_SIZE: u32 = 200;

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    /// Slug used as the image folder name. Derived from the title when empty.
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(deserialize_with = "known_categories")]
    pub categories: Vec<Category>,
    /// Banner path or URL as referenced by the document.
    pub banner_image: String,
    /// Where the banner was picked from. Used for staging only.
    pub banner_local_path: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub links: Links,
    pub screenshots: Vec<Screenshot>,

    pub show_logo: bool,
    pub logo_url: String,
    pub logo_position: LogoPosition,
    pub show_border: bool,
    pub border_style: BorderStyle,
    pub theme_color: String,
    pub screenshot_layout: ScreenshotLayout,
    pub screenshot_size: u32,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            categories: Vec::new(),
            banner_image: String::new(),
            banner_local_path: String::new(),
            technologies: Vec::new(),
            features: Vec::new(),
            links: Links::default(),
            screenshots: Vec::new(),
            show_logo: true,
            logo_url: String::new(),
            logo_position: LogoPosition::Center,
            show_border: false,
            border_style: BorderStyle::Rounded,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            screenshot_layout: ScreenshotLayout::Horizontal,
            screenshot_size: DEFAULT_SCREENSHOT_SIZE,
        }
    }
}

impl Project {
    /// A blank record with the given title and its derived id.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: naming::slug(&title),
            title,
            ..Self::default()
        }
    }

    /// The id to namespace images under: the explicit id, or the title slug.
    pub fn effective_id(&self) -> String {
        if self.id.is_empty() {
            naming::slug(&self.title)
        } else {
            self.id.clone()
        }
    }

    /// Add a category, keeping insertion order and ignoring repeats.
    pub fn add_category(&mut self, category: Category) {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    /// Categories for tables and listings, `—` when there are none.
    pub fn category_display(&self) -> String {
        if self.categories.is_empty() {
            "—".to_string()
        } else {
            self.categories
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Screenshot width, with zero treated as unset.
    pub fn effective_screenshot_size(&self) -> u32 {
        if self.screenshot_size == 0 {
            DEFAULT_SCREENSHOT_SIZE
        } else {
            self.screenshot_size
        }
    }

    /// Theme colour without the leading `#`, as shields.io expects it.
    pub fn badge_color(&self) -> &str {
        let color = self.theme_color.trim();
        let color = if color.is_empty() {
            DEFAULT_THEME_COLOR
        } else {
            color
        };
        color.trim_start_matches('#')
    }
}

fn known_categories<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Category>, D::Error> {
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    let mut categories = Vec::new();
    for category in raw.iter().filter_map(|label| Category::from_label(label)) {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(categories)
}
