//! fiftyohm-html - render parsed course sections to HTML

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fiftyohm_html::config::{ConfigFile, LocationParts};
use fiftyohm_html::{Handlers, MarginTemplate, Mode, RenderConfig, Renderer, Tree};

#[derive(Parser)]
#[command(name = "fiftyohm-html")]
#[command(version, about = "Render parsed course sections to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    fiftyohm-html section.json -o section.html                 Render a web page
    fiftyohm-html section.json --slides -o slides.html         Render a slide deck
    fiftyohm-html section.json --edition 3 --chapter 2 --section 1")]
struct Cli {
    /// Parsed section as a JSON tree
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON config file; command line options override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render a slide deck instead of a web page
    #[arg(long)]
    slides: bool,

    #[arg(long)]
    edition: Option<String>,

    #[arg(long)]
    chapter: Option<String>,

    #[arg(long)]
    section: Option<String>,

    /// Base URL for cross-reference links
    #[arg(long)]
    section_url: Option<String>,

    /// Directory containing margin.html
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Suppress log messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> fiftyohm_html::Result<()> {
    let config = build_config(cli)?;

    let mut handlers = Handlers::new();
    if let Some(dir) = &cli.templates {
        handlers = handlers.with_margin(MarginTemplate::from_dir(dir)?);
    }

    let json = std::fs::read_to_string(&cli.input)?;
    let tree = Tree::from_json(&json)?;

    let mut renderer = Renderer::new(config, handlers);
    let html = renderer.render_document(&tree)?;

    match &cli.output {
        Some(path) => std::fs::write(path, html)?,
        None => print!("{html}"),
    }
    Ok(())
}

fn build_config(cli: &Cli) -> fiftyohm_html::Result<RenderConfig> {
    let file = match &cli.config {
        Some(path) => ConfigFile::from_file(path)?,
        None => ConfigFile::default(),
    };
    let overrides = LocationParts {
        edition: cli.edition.clone(),
        chapter: cli.chapter.clone(),
        section: cli.section.clone(),
    };
    let mut config = file.into_config(overrides);

    if let Some(url) = &cli.section_url {
        config.section_url = url.clone();
    }
    if cli.slides {
        config.mode = Mode::Slides;
    }

    Ok(config)
}
