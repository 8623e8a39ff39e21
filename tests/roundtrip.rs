//! Encode/decode behaviour through the public API, plus the full
//! records → README → staged images → reopened README cycle on disk.

use chrono::NaiveDate;
use showcase_readme::codec::Codec;
use showcase_readme::config::DocumentConfig;
use showcase_readme::resolve::ResolveContext;
use showcase_readme::stage;
use showcase_readme::types::{
    BorderStyle, Category, LinkKind, Project, Screenshot, ScreenshotLayout,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn write(path: &Path, bytes: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

/// A record using every field the document preserves, with no images.
fn text_only(layout: ScreenshotLayout, border: Option<BorderStyle>) -> Project {
    let mut p = Project::new("Signal & Noise <beta>");
    p.short_description = "Hear what matters".into();
    p.long_description = "Filters \"noise\" from audio streams & more.".into();
    p.add_category(Category::AiMl);
    p.add_category(Category::IoT);
    p.technologies = vec!["C++".into(), "TensorFlow Lite".into()];
    p.features = vec!["On-device inference".into(), "Low power".into()];
    for kind in LinkKind::ALL {
        p.links
            .set(kind, format!("https://example.com/{}?a=1&b=2", kind.key()));
    }
    p.screenshot_layout = layout;
    p.screenshot_size = 320;
    if let Some(style) = border {
        p.show_border = true;
        p.border_style = style;
    }
    p
}

#[test]
fn end_to_end_example() {
    let mut p = Project::new("Demo");
    p.add_category(Category::Game);
    p.technologies = vec!["Rust".into()];
    p.features = vec!["Fast".into()];
    p.screenshot_layout = ScreenshotLayout::Horizontal;
    p.screenshots = vec![Screenshot::local("a.png")];
    p.screenshot_size = 200;

    let codec = Codec::default();
    let block = codec.encode_project(&p);
    assert!(block.contains("## Demo"));
    assert!(block.contains("`Game`"));
    assert!(block.contains("### Tech Stack"));
    assert!(block.contains("<code>Rust</code>"));
    assert!(block.contains("- Fast"));
    assert!(block.contains(r#"<img src="images/demo/1.png" width="200">"#));

    let decoded = codec.decode_project(&block);
    assert_eq!(decoded.title, "Demo");
    assert_eq!(decoded.categories, vec![Category::Game]);
    assert_eq!(decoded.technologies, vec!["Rust"]);
    assert_eq!(decoded.features, vec!["Fast"]);
    assert_eq!(decoded.screenshot_layout, ScreenshotLayout::Horizontal);
    assert_eq!(decoded.screenshots.len(), 1);
    assert_eq!(decoded.screenshots[0].reference, "screenshot_1.png");
    assert_eq!(decoded.screenshot_size, 200);
}

#[test]
fn preserved_fields_survive_every_styling_combination() {
    let codec = Codec::default();
    let borders = [
        None,
        Some(BorderStyle::Rounded),
        Some(BorderStyle::Square),
        Some(BorderStyle::Dashed),
    ];
    for layout in [
        ScreenshotLayout::Horizontal,
        ScreenshotLayout::Grid,
        ScreenshotLayout::Vertical,
    ] {
        for border in borders {
            let p = text_only(layout, border);
            let d = codec.decode_project(&codec.encode_project(&p));
            let case = format!("{layout} / {border:?}");
            assert_eq!(d.title, p.title, "{case}");
            assert_eq!(d.short_description, p.short_description, "{case}");
            assert_eq!(d.long_description, p.long_description, "{case}");
            assert_eq!(d.categories, p.categories, "{case}");
            assert_eq!(d.technologies, p.technologies, "{case}");
            assert_eq!(d.features, p.features, "{case}");
            assert_eq!(d.links, p.links, "{case}");
            assert_eq!(d.screenshot_layout, p.screenshot_layout, "{case}");
            assert_eq!(d.screenshot_size, p.screenshot_size, "{case}");
            assert_eq!(d.show_border, p.show_border, "{case}");
            if p.show_border {
                assert_eq!(d.border_style, p.border_style, "{case}");
            }
        }
    }
}

#[test]
fn loss_is_confined_to_source_paths() {
    let mut p = Project::new("Lossy");
    p.banner_image = "https://cdn.example.com/banner.webp".into();
    p.banner_local_path = "/home/dev/Pictures/banner-original.webp".into();
    p.screenshots = vec![
        Screenshot {
            reference: "home.jpg".into(),
            local_path: "/tmp/picked/home.jpg".into(),
        },
        Screenshot::local("/tmp/picked/settings.png"),
    ];

    let codec = Codec::default();
    let once = codec.decode_project(&codec.encode_project(&p));
    assert_eq!(once.banner_image, p.banner_image);
    assert!(once.banner_local_path.is_empty());
    let names: Vec<&str> = once.screenshots.iter().map(|s| s.reference.as_str()).collect();
    assert_eq!(names, vec!["screenshot_1.jpg", "screenshot_2.png"]);

    // A second cycle changes nothing further.
    let twice = codec.decode_project(&codec.encode_project(&once));
    assert_eq!(twice, once);
}

#[test]
fn document_keeps_count_and_title_order() {
    let titles = ["Zeta", "Alpha", "Mid Way", "Alpha Two", "Émigré"];
    let projects: Vec<Project> = titles.iter().map(|t| Project::new(*t)).collect();
    let codec = Codec::default();
    let decoded = codec.decode(&codec.encode_dated(&projects, date()));
    let got: Vec<&str> = decoded.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(got, titles);
}

#[test]
fn document_without_toc_or_with_custom_header() {
    let mut config = DocumentConfig::default();
    config.toc.enabled = false;
    config.header.title = "Lab Notebook".into();
    config.header.about = "Experiments, mostly.".into();
    let codec = Codec::new(ResolveContext::detached(), config);

    let projects = vec![text_only(ScreenshotLayout::Grid, None), Project::new("Second")];
    let doc = codec.encode_dated(&projects, date());
    assert!(doc.starts_with("<div align=\"center\">"));
    assert!(doc.contains("# Lab Notebook"));
    assert!(!doc.contains("| # | Project | Categories |"));
    assert!(doc.contains("Last updated: March 14, 2026"));
    assert_eq!(codec.decode(&doc).len(), 2);
}

#[test]
fn hand_edited_document_still_decodes() {
    let doc = "# My Stuff\r\n\
               \r\n\
               ---\r\n\
               \r\n\
               ## Hand Made\r\n\
               \r\n\
               `IoT` `Nonexistent` `IoT`\r\n\
               \r\n\
               **Pitch**\r\n\
               \r\n\
               <a href=\"https://github.com/someone/hand-made\">source</a>\r\n\
               \r\n\
               ### Features\r\n\
               \r\n\
               * Typed by hand\r\n\
               \r\n\
               <hr>\r\n\
               \r\n\
               ## \r\n\
               \r\n\
               ---\r\n\
               \r\n\
               ##    Second   \r\n";
    let decoded = Codec::default().decode(doc);
    assert_eq!(decoded.len(), 2);

    let hand = &decoded[0];
    assert_eq!(hand.title, "Hand Made");
    assert_eq!(hand.id, "hand-made");
    assert_eq!(hand.categories, vec![Category::IoT]);
    assert_eq!(hand.short_description, "Pitch");
    assert_eq!(hand.links.github, "https://github.com/someone/hand-made");
    assert_eq!(hand.features, vec!["Typed by hand"]);
    assert_eq!(decoded[1].title, "Second");
}

#[test]
fn staged_document_resolves_after_reopen() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(&src.path().join("art/logo.png"), b"logo");
    write(&src.path().join("hero.jpg"), b"banner");
    write(&src.path().join("shots/screen-1.png"), b"one");
    write(&src.path().join("shots/screen-2.png"), b"two");

    let mut p = Project::new("Demo App");
    p.logo_url = "art/logo.png".into();
    p.banner_image = "hero.jpg".into();
    p.screenshots = vec![
        Screenshot::local("shots/screen-1.png"),
        Screenshot::local("shots/screen-2.png"),
    ];
    p.screenshot_layout = ScreenshotLayout::Grid;
    let projects = vec![p];

    let sources = ResolveContext::new(src.path());
    let codec = Codec::new(sources.clone(), DocumentConfig::default());
    let doc = codec.encode_dated(&projects, date());
    for path in [
        "images/demo-app/logo.png",
        "images/demo-app/banner.jpg",
        "images/demo-app/1.png",
        "images/demo-app/2.png",
    ] {
        assert!(doc.contains(path), "document should reference {path}");
    }

    let assets = stage::plan(&projects, &sources);
    let stats = stage::stage(&assets, out.path()).unwrap();
    assert_eq!(stats.copied, 4);

    let readme = out.path().join("README.md");
    fs::write(&readme, &doc).unwrap();

    let reopened = Codec::for_document(&readme).unwrap();
    let decoded = reopened.decode(&fs::read_to_string(&readme).unwrap());
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].logo_url, "images/demo-app/logo.png");
    assert_eq!(decoded[0].screenshot_layout, ScreenshotLayout::Grid);

    let images = reopened.resolve_images(&decoded[0]);
    assert_eq!(images.len(), 4);
    assert!(images.iter().all(|i| !i.is_missing()), "{images:?}");
    assert_eq!(
        images[3].path.as_deref(),
        Some(out.path().join("images/demo-app/2.png").as_path())
    );

    // Re-encoding the reopened document is byte-identical.
    assert_eq!(reopened.encode_dated(&decoded, date()), doc);
}
