//! mdwx CLI - Markdown to WeChat article HTML
//!
//! Reads Markdown from a file or standard input and prints the HTML.

use clap::Parser;
use colored::*;
use mdwx::{load_theme, Mdwx, ParsedDocument};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Markdown to inline-styled HTML for the WeChat article editor
#[derive(Parser)]
#[command(
    name = "mdwx",
    version,
    about = "Convert Markdown to inline-styled HTML for the WeChat article editor",
    long_about = "mdwx - Markdown to WeChat article HTML.\n\n\
                  Prints the HTML to stdout.\n\n\
                  Usage:\n  \
                  mdwx <file>               Convert a file\n  \
                  mdwx <file> --save-html   Also write <file>.html next to it\n  \
                  cat post.md | mdwx        Convert standard input"
)]
struct Cli {
    /// Input Markdown file (default: stdin)
    input: Option<PathBuf>,

    /// Also write the HTML next to the input file, with an .html extension
    #[arg(long)]
    save_html: bool,

    /// Output body fragments only, without the HTML document shell
    #[arg(long)]
    body_only: bool,

    /// JSON theme file overriding the default colors
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Print the classified blocks as JSON instead of HTML
    #[arg(long)]
    blocks: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse_input(&cli)?;
    log::debug!(
        "{} blocks, {} headings",
        parsed.block_count(),
        parsed.document().heading_count()
    );

    let output = if cli.blocks {
        parsed.blocks_json()?
    } else {
        parsed.to_html()
    };

    if cli.save_html {
        match &cli.input {
            Some(input) => {
                let path = save_html(input, &output)?;
                eprintln!(
                    "{} Saved HTML: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
            None => log::warn!("--save-html ignored when reading from stdin"),
        }
    }

    write_output(&output)?;
    Ok(())
}

fn builder(cli: &Cli) -> Result<Mdwx, Box<dyn std::error::Error>> {
    let mut builder = Mdwx::new();
    if let Some(path) = &cli.theme {
        builder = builder.with_theme(load_theme(path)?);
    }
    if cli.body_only {
        builder = builder.body_only();
    }
    Ok(builder)
}

fn parse_input(cli: &Cli) -> Result<ParsedDocument, Box<dyn std::error::Error>> {
    let builder = builder(cli)?;
    match &cli.input {
        Some(path) => Ok(builder.parse_file(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(builder.parse_str(&text))
        }
    }
}

/// Writes `content` to the sibling `.html` file of `input`.
fn save_html(input: &Path, content: &str) -> io::Result<PathBuf> {
    let path = mdwx::html_output_path(input);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

fn write_output(content: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", content)
}
