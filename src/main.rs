use clap::{Parser, Subcommand};
use diwan::{config, output, prompt, store};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "diwan")]
#[command(about = "Content manager for the Diwan Arabic science glossary")]
#[command(long_about = "\
Content manager for the Diwan Arabic science glossary

Collects glossary terms and articles, appends them to the JSON data store,
and renders each record into a standalone HTML page.

Site layout:

  .
  ├── config.toml                  # Site config (optional)
  ├── data/
  │   ├── terms.json               # Term records (append-only)
  │   └── articles.json            # Article records (append-only)
  ├── term-<slug>.html             # Generated term pages
  └── article-<slug>.html          # Generated article pages

Run without a command for the interactive menu. Run 'diwan gen-config' to
print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site base directory (holds config.toml, data/, and generated pages)
    #[arg(long, default_value = ".", global = true)]
    base_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add a glossary term interactively
    Term,
    /// Add an article interactively
    Article,
    /// Show platform statistics
    Stats,
    /// Show the available scientific categories
    Categories,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::GenConfig) = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let site_config = config::load_config(&cli.base_dir)?;
    let store = store::ContentStore::open(&cli.base_dir, &site_config)?;

    match cli.command {
        Some(Command::Term) => {
            prompt::add_term_flow(&store)?;
        }
        Some(Command::Article) => {
            prompt::add_article_flow(&store)?;
        }
        Some(Command::Stats) => {
            output::print_stats(&site_config.site_name, &store.stats()?);
        }
        Some(Command::Categories) => {
            output::print_categories();
        }
        // Handled before the store is opened
        Some(Command::GenConfig) => {}
        None => {
            prompt::menu_loop(&store, &site_config)?;
        }
    }

    Ok(())
}
