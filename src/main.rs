//! Vitrine binary: serve the catalog, export it, or inspect it from the
//! command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use vitrine::components::layout::base_document;
use vitrine::config::Config;
use vitrine::stories;
use vitrine::storybook::{self, AppContext};
use vitrine::theme::Theme;
use vitrine::{logging, Result, VitrineError};

#[derive(Parser)]
#[command(name = "vitrine", version, about = "Component catalog and story previewer")]
struct Cli {
    /// Config file (default: ./vitrine.json when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Theme file, overriding the config
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the catalog over HTTP for live preview
    Serve {
        /// Bind address, overriding the config
        #[arg(long)]
        host: Option<String>,

        /// Port, overriding the config
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Export the catalog as a static site
    Build {
        /// Output directory, overriding the config
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List every story as group-slug/story-slug
    List,

    /// Print one story as a standalone HTML page
    Render {
        /// Story address as group-slug/story-slug
        story: String,
    },
}

fn load_theme(cli: &Cli, config: &Config) -> Result<Theme> {
    match cli.theme.as_ref().or(config.theme.as_ref()) {
        Some(path) => Theme::load(path),
        None => Ok(Theme::default()),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let _guard = logging::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let theme = load_theme(&cli, &config)?;
    let registry = stories::catalog()?;
    info!(stories = registry.len(), "catalog ready");

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            let ctx = AppContext {
                registry,
                theme,
                site_title: config.site_title.clone(),
            };
            storybook::serve(
                host.as_deref().unwrap_or(&config.host),
                port.unwrap_or(config.port),
                ctx,
            )
            .await?;
        }
        Commands::Build { out } => {
            let out_dir = out.unwrap_or(config.out_dir);
            let pages = storybook::build_site(&registry, &theme, &config.site_title, &out_dir)?;
            println!("Wrote {} pages to {}", pages, out_dir.display());
        }
        Commands::List => {
            for (group, story) in registry.iter() {
                println!("{}/{}\t{}", group.slug(), story.slug(), story.name());
            }
        }
        Commands::Render { story } => {
            let Some((group_slug, story_slug)) = story.split_once('/') else {
                anyhow::bail!("expected group-slug/story-slug, got '{}'", story);
            };
            let Some(found) = registry.find(group_slug, story_slug) else {
                return Err(VitrineError::StoryNotFound { path: story }.into());
            };
            let page = base_document(found.name(), &theme, storybook::story_page(found));
            println!("{}", page.into_string());
        }
    }

    Ok(())
}
