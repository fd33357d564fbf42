use mangarock::{ API, APIError, Author, ClientBuilder, Config, ConfigError, Manga };
use mangarock::utils;

use std::path::Path;

use clap::{ Parser, Subcommand, ValueEnum };
use log::{ info, error };
use serde::Serialize;
use simplelog::{ self, TermLogger, LevelFilter, TerminalMode, ColorChoice };
use thiserror::Error;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Arguments {
    /// TOML file with base_url, meta_url, user_agent and timeout_secs
    #[clap(short, long)]
    config: Option<String>,
    #[clap(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
    #[clap(short, long)]
    quiet: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Latest updated mangas
    Latest {
        /// Currently ignored by the feed
        #[clap(short, long, default_value = "0")]
        page: u32,
    },
    /// Search mangas by keywords
    Search {
        query: String,
    },
    /// A single manga with its chapters, by id or url
    Manga {
        id: String,
    },
    /// Several mangas by id or url
    Mangas {
        #[clap(required = true)]
        ids: Vec<String>,
    },
    /// A chapter with its page urls
    Chapter {
        manga: String,
        chapter: String,
    },
    /// An author and their mangas, by id or url
    Author {
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Toml,
}

#[derive(Debug, Error)]
enum ProgramError {
    #[error("{0}")]
    API(#[from] APIError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("error serialising output to toml: {0}")]
    TOMLSerialisation(#[from] toml::ser::Error),
    #[error("error serialising output to json: {0}")]
    JSONSerialisation(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct MangaList<'a> {
    mangas: &'a [Manga],
}

#[derive(Debug, Serialize)]
struct AuthorMangas<'a> {
    author: &'a Author,
    mangas: &'a [Manga],
}

#[tokio::main]
async fn main() {
    let args = Arguments::parse();

    let log_level = match args.quiet {
        true => LevelFilter::Warn,
        false => LevelFilter::Info,
    };

    if let Err(e) = TermLogger::init(log_level, simplelog::Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("could not initialise logger: {}", e);
    }

    match run(args).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        },
    }
}

fn render<T:Serialize>(value:&T, format:OutputFormat) -> Result<String, ProgramError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Toml => toml::to_string_pretty(value)?,
    })
}

fn manga_id(s:String) -> String {
    utils::get_manga_id(&s).unwrap_or(s)
}

fn chapter_id(s:String) -> String {
    utils::get_chapter_id(&s).unwrap_or(s)
}

fn author_id(s:String) -> String {
    utils::get_author_id(&s).unwrap_or(s)
}

async fn run(args:Arguments) -> Result<String, ProgramError> {
    let config = match &args.config {
        Some(path) => Config::from_file(Path::new(path))?,
        None => Config::default(),
    };
    let api:API = ClientBuilder::from_config(config).build()?;

    match args.command {
        Command::Latest { page } => {
            info!("Retrieving latest mangas...");
            let mangas = api.latest(page).await?;
            render(&MangaList { mangas: &mangas }, args.format)
        },
        Command::Search { query } => {
            info!("Searching for \"{}\"...", query);
            let mangas = api.search(&query).await?;
            info!("{} results", mangas.len());
            render(&MangaList { mangas: &mangas }, args.format)
        },
        Command::Manga { id } => {
            let id = manga_id(id);
            info!("Retrieving manga {}...", id);
            let manga = api.manga(&id).await?;
            render(&manga, args.format)
        },
        Command::Mangas { ids } => {
            let ids = ids.into_iter()
                .map(manga_id)
                .collect::<Vec<String>>();
            info!("Retrieving {} mangas...", ids.len());
            let mangas = api.mangas(&ids).await?;
            render(&MangaList { mangas: &mangas }, args.format)
        },
        Command::Chapter { manga, chapter } => {
            let (manga, chapter) = (manga_id(manga), chapter_id(chapter));
            info!("Retrieving chapter {} of manga {}...", chapter, manga);
            let chapter = api.chapter(&manga, &chapter).await?;
            render(&chapter, args.format)
        },
        Command::Author { id } => {
            let id = author_id(id);
            info!("Retrieving author {}...", id);
            let (author, mangas) = api.author(&id).await?;
            render(&AuthorMangas { author: &author, mangas: &mangas }, args.format)
        },
    }
}
