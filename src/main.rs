use blog_nav::config::{self, NavConfig};
use blog_nav::fetch::{Fetch, HttpFetcher};
use blog_nav::page::HtmlPage;
use blog_nav::pipeline::Pipeline;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

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
#[command(name = "blog-nav")]
#[command(about = "Add previous/next navigation to rendered blog pages")]
#[command(long_about = "\
Add previous/next navigation to rendered blog pages

A blog post's JSON representation (its own URL with ?format=json) carries
metadata for the neighboring posts in the collection. blog-nav fetches it,
builds a navigation block, and inserts the block into the page's HTML.

The augmented document is written to stdout (or --output). When the page has
no usable pagination data — or the endpoint is unreachable — the input is
passed through unchanged and a diagnostic goes to stderr: navigation is
best-effort, never a failure of the page itself.

Run 'blog-nav gen-config' for a documented config file with all options.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Augment one rendered page with previous/next navigation
    Augment {
        /// Canonical URL of the page (used to derive the JSON endpoint)
        url: String,

        /// Read the page HTML from a file instead of fetching the URL
        #[arg(long)]
        input: Option<PathBuf>,

        /// Write the augmented page here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// TOML file with configuration overrides
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a stock config TOML with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Augment {
            url,
            input,
            output,
            config: config_path,
        } => {
            let overrides = config_path
                .as_deref()
                .map(config::load_overrides)
                .transpose()?;
            let nav_config = NavConfig::resolve(overrides);

            let fetcher = HttpFetcher::new();
            let page_html = match &input {
                Some(path) => std::fs::read_to_string(path)?,
                None => fetcher.fetch(&Url::parse(&url)?)?,
            };

            let page = HtmlPage::parse(&page_html);
            let outcome = Pipeline::new(nav_config).run(&page, &url, &fetcher);

            // Pass the input through untouched unless something was inserted.
            let result = if outcome.inserted() {
                page.to_html()?
            } else {
                page_html
            };

            match &output {
                Some(path) => std::fs::write(path, result)?,
                None => print!("{result}"),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
