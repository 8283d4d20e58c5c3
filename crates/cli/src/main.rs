// ABOUTME: CLI for scraping page metadata with the pagemeta engine.
// ABOUTME: Fetches a page from URL, file, or stdin and prints a report or JSON.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use pagemeta::{Metadata, ProviderValues, Scraper};
use scraper::Html;
use serde_json::json;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use url::Url;

/// Scrape webpage metadata: Open Graph, Twitter Cards, meta tags, and feeds.
#[derive(Parser, Debug)]
#[command(name = "pagemeta")]
#[command(about = "Extract structured metadata from webpages", long_about = None)]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape metadata from a webpage
    Scrape {
        /// URL, local file path, or "-" for stdin. Prompts when omitted.
        target: Option<String>,

        /// Comma-separated provider names (openGraph,twitter,meta,other).
        #[arg(long, value_delimiter = ',')]
        providers: Vec<String>,

        /// Output a JSON envelope instead of the colorized report.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List available provider names
    Providers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Scrape {
            target,
            providers,
            json,
        } => run_scrape(target, &providers, json),
        Commands::Providers => {
            for name in pagemeta::available_providers() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn run_scrape(target: Option<String>, providers: &[String], json: bool) -> Result<()> {
    let target = match target {
        Some(t) => t,
        None => prompt_for_target()?,
    };
    if target.is_empty() {
        return Err(anyhow!("URL cannot be empty"));
    }

    let html = load_html(&target)?;
    let doc = Html::parse_document(&html);

    let scraper = Scraper::with_provider_names(providers)?;
    let result = scraper.scrape(Some(&doc))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&envelope(&target, &result))?);
    } else {
        print_report(&target, &result)?;
    }

    Ok(())
}

/// Loads raw HTML from a URL, a local file, or stdin ("-").
fn load_html(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        let url = Url::parse(target).with_context(|| format!("invalid URL: {}", target))?;
        let resp = reqwest::blocking::get(url)?.error_for_status()?;
        return Ok(resp.text()?);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read_to_string(path)?)
}

/// Color only when stdout is a terminal; termcolor's `Auto` does not
/// detect pipes by itself.
fn color_choice() -> ColorChoice {
    if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn prompt_for_target() -> Result<String> {
    let mut out = StandardStream::stdout(color_choice());
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
    writeln!(out, "Enter the URL to scrape metadata from:")?;
    out.reset()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("error reading input")?;
    Ok(line.trim().to_string())
}

/// Builds the JSON output: summary fields, feeds, and raw provider maps.
fn envelope(target: &str, result: &Metadata) -> serde_json::Value {
    json!({
        "target": target,
        "title": result.title(),
        "description": result.description(),
        "image": result.image(),
        "url": result.url(),
        "site_name": result.site_name(),
        "favicon": result.favicon(),
        "feeds": result.feeds,
        "providers": {
            "openGraph": result.open_graph(),
            "twitter": result.twitter_card(),
            "meta": result.meta(),
            "other": result.other(),
        },
    })
}

fn print_report(target: &str, result: &Metadata) -> Result<()> {
    let mut out = StandardStream::stdout(color_choice());

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(out, "Metadata scraped from {}", target)?;
    out.reset()?;
    writeln!(out)?;

    print_field(&mut out, "Title", result.title().as_deref())?;
    print_field(&mut out, "Description", result.description().as_deref())?;
    print_field(&mut out, "Image", result.image().as_deref())?;
    print_field(&mut out, "URL", result.url().as_deref())?;
    print_field(&mut out, "Site Name", result.site_name().as_deref())?;
    print_field(&mut out, "Favicon", Some(result.favicon().as_str()))?;

    if !result.feeds.is_empty() {
        out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(out, "\nFeeds:")?;
        out.reset()?;
        for (i, feed) in result.feeds.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} ({}) - {}",
                i + 1,
                feed.title.as_deref().unwrap_or("Untitled"),
                feed.feed_type,
                feed.href
            )?;
        }
    }

    print_provider_map(&mut out, "Open Graph Tags", result.open_graph())?;
    print_provider_map(&mut out, "Twitter Card Tags", result.twitter_card())?;

    Ok(())
}

fn print_field(out: &mut StandardStream, name: &str, value: Option<&str>) -> Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}: ", name)?;
    out.reset()?;
    writeln!(out, "{}", value.unwrap_or("Not found"))?;
    Ok(())
}

fn print_provider_map(out: &mut StandardStream, title: &str, data: &ProviderValues) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }

    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "\n{}:", title)?;
    out.reset()?;
    for (key, values) in data {
        writeln!(out, "  {}: {}", key, values.join(", "))?;
    }
    Ok(())
}
