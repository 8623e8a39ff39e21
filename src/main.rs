use clap::{Parser, Subcommand};
use showcase_readme::codec::Codec;
use showcase_readme::resolve::{self, ResolveContext};
use showcase_readme::types::Project;
use showcase_readme::{config, output, stage};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "showcase-readme")]
#[command(about = "Keep a project showcase README and its records in sync")]
#[command(long_about = "\
Keep a project showcase README and its records in sync

The README is the storage format. Records encode to a GitHub-flavoured
Markdown document, and a document (even a hand-edited one) decodes back to
records.

Folder layout next to the README:

  showcase/
  ├── README.md                    # Encoded document
  ├── showcase.toml                # Header, contents table and footer (optional)
  └── images/
      └── demo-app/                # One folder per project id
          ├── logo.png
          ├── banner.jpg
          ├── 1.png                # Screenshots by position
          └── 2.png

Image references resolve, first match wins:
  1. the path as written, if that file exists
  2. the same file name inside images/{id}/
  3. a trailing number in the name (screen-3.jpg → images/{id}/3.*)
  4. the slot itself (images/{id}/logo.*, banner.*, N.*)

Run 'showcase-readme gen-config' to generate a documented showcase.toml.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a README and list its projects
    List {
        /// README to read
        readme: PathBuf,
    },
    /// Report image slots that don't resolve to a file
    Check {
        /// README to read
        readme: PathBuf,
    },
    /// Decode a README to JSON records
    Export {
        /// README to read
        readme: PathBuf,
        /// Write JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Encode JSON records to a README
    Build {
        /// JSON array of project records
        records: PathBuf,
        /// README to write; its folder supplies showcase.toml
        #[arg(long, default_value = "README.md")]
        out: PathBuf,
        /// Copy local images to images/{id}/ beside the README
        #[arg(long)]
        stage: bool,
    },
    /// Decode and re-encode a README in place
    Fmt {
        /// README to normalise
        readme: PathBuf,
    },
    /// Print a stock showcase.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { readme } => {
            let (_, projects) = read_readme(&readme)?;
            output::print_inventory(&projects);
        }
        Command::Check { readme } => {
            println!("==> Checking {}", readme.display());
            let (codec, projects) = read_readme(&readme)?;
            let resolved: Vec<_> = projects.iter().map(|p| codec.resolve_images(p)).collect();
            output::print_check_report(&projects, &resolved);
            let missing = resolved.iter().flatten().filter(|i| i.is_missing()).count();
            if missing > 0 {
                return Err(format!("{missing} unresolved images").into());
            }
        }
        Command::Export { readme, out } => {
            let (_, projects) = read_readme(&readme)?;
            let json = serde_json::to_string_pretty(&projects)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("==> Exported {} projects → {}", projects.len(), path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::Build {
            records,
            out,
            stage: with_stage,
        } => {
            let json = std::fs::read_to_string(&records)?;
            let projects: Vec<Project> = serde_json::from_str(&json)?;
            let out_dir = resolve::document_dir(&out);

            // Local paths in the records are relative to the records file.
            let sources = ResolveContext::for_document(&records);
            let codec = Codec::new(sources.clone(), config::load_config(&out_dir)?);
            std::fs::write(&out, codec.encode(&projects))?;
            output::print_inventory(&projects);
            println!("==> Wrote {}", out.display());

            if with_stage {
                println!("==> Staging images → {}", out_dir.display());
                let assets = stage::plan(&projects, &sources);
                let stats = stage::stage(&assets, &out_dir)?;
                output::print_stage_output(&assets, &stats);
            }
        }
        Command::Fmt { readme } => {
            let (codec, projects) = read_readme(&readme)?;
            std::fs::write(&readme, codec.encode(&projects))?;
            println!("==> Formatted {} ({} projects)", readme.display(), projects.len());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load a README with the codec for its folder.
fn read_readme(path: &Path) -> Result<(Codec, Vec<Project>), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let codec = Codec::for_document(path)?;
    let projects = codec.decode(&text);
    Ok((codec, projects))
}
