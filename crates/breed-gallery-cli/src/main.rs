//! `breed-gallery` command line front end

use anyhow::{Context, Result};
use breed_gallery::{load_breeds, FileSource, Gallery, GalleryConfig, UiEvent};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

mod page;

const QUIT: &str = ":q";
const SEARCH: &str = ":go";

fn cli() -> Command {
    Command::new("breed-gallery")
        .version(breed_gallery::VERSION)
        .about("Searchable gallery of dog breeds from a local data file")
        .subcommand_required(true)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .default_value(".")
                .value_parser(value_parser!(PathBuf))
                .help("Directory the data file is resolved against"),
        )
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Data file path relative to the data directory"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr"),
        )
        .subcommand(
            Command::new("render")
                .about("Write the gallery as a standalone HTML page")
                .arg(
                    Arg::new("query")
                        .long("query")
                        .default_value("")
                        .help("Search text applied before rendering"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Output file (stdout if omitted)"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Print the breeds whose name contains QUERY")
                .arg(Arg::new("query").required(true).help("Search text"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output matching records as JSON"),
                ),
        )
        .subcommand(
            Command::new("interactive").about(
                "Live search: each input line replaces the search text, ':go' repeats the search, ':q' quits",
            ),
        )
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_config(args: &ArgMatches) -> Result<GalleryConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => GalleryConfig::load(path)
            .await
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GalleryConfig::default(),
    };
    if let Some(data_file) = args.get_one::<PathBuf>("data-file") {
        config = config.with_data_file(data_file.clone());
    }
    Ok(config)
}

fn source(args: &ArgMatches) -> FileSource {
    let root = args
        .get_one::<PathBuf>("data-dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    FileSource::new(root)
}

async fn run_render(config: GalleryConfig, source: &FileSource, args: &ArgMatches) -> Result<()> {
    let query = args.get_one::<String>("query").cloned().unwrap_or_default();

    let mut gallery = Gallery::new(config);
    gallery.start(source).await;
    if !query.is_empty() {
        gallery.handle(UiEvent::Input(query.clone()));
    }

    let html = page::render_page(gallery.container(), &query);
    match args.get_one::<PathBuf>("output") {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(html.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

async fn run_search(config: GalleryConfig, source: &FileSource, args: &ArgMatches) -> Result<()> {
    let query = args.get_one::<String>("query").cloned().unwrap_or_default();

    let breeds = load_breeds(source, &config.data_file)
        .await
        .with_context(|| format!("Failed to load dog breeds from {}", config.data_file.display()))?;
    let matches = breed_gallery::filter_breeds(&breeds, &query);

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else if matches.is_empty() {
        println!("{}", breed_gallery::render::NO_RESULTS);
    } else {
        for breed in matches {
            println!("{}", breed.name);
        }
    }
    Ok(())
}

async fn run_interactive(config: GalleryConfig, source: &FileSource) -> Result<()> {
    let mut gallery = Gallery::new(config);
    gallery.start(source).await;
    print!("{}", gallery.container().to_plain_text());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.as_str() {
            QUIT => break,
            SEARCH => gallery.handle(UiEvent::SearchClicked),
            _ => gallery.handle(UiEvent::Input(line)),
        }
        print!("{}", gallery.container().to_plain_text());
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let config = load_config(&matches).await?;
    let source = source(&matches);

    match matches.subcommand() {
        Some(("render", args)) => run_render(config, &source, args).await,
        Some(("search", args)) => run_search(config, &source, args).await,
        Some(("interactive", _)) => run_interactive(config, &source).await,
        _ => Ok(()),
    }
}
