use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use songshelf::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the HTTP API
    Serve,

    /// Recommend books for a song using the local data files
    Recommend(RecommendOptions),

    /// Fetch recommendations from a running server
    Fetch(FetchOptions),

    /// Inspect tag normalization and the genre mapping
    Genre(GenreOptions),

    /// List songs in the song store
    Songs(SongsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Song id
    pub song_id: String,

    /// Maximum number of books (capped at 20)
    #[clap(long)]
    pub limit: Option<usize>,

    /// Book id to leave out; can be repeated
    #[clap(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct FetchOptions {
    /// Song id
    pub song_id: String,

    /// Maximum number of books (capped at 20)
    #[clap(long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Inspect tag normalization and the genre mapping")]
pub struct GenreOptions {
    #[command(subcommand)]
    pub command: GenreSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum GenreSubcommand {
    /// Classify tags into a music genre
    Normalize(NormalizeOpts),

    /// Show the book genre for a music genre
    Map(MapOpts),

    /// Print the active mapping table
    Table,
}

#[derive(Parser, Debug, Clone)]
pub struct NormalizeOpts {
    /// Tags in the order the song lists them
    #[clap(required = true, num_args = 1..)]
    pub tags: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct MapOpts {
    /// Canonical music genre, e.g. `hip-hop`
    pub music_genre: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SongsOptions {
    /// Filter by song name or artist
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    // stdout belongs to tables and command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(config::log_directives())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve().await,
        Command::Recommend(opt) => cli::recommend(opt.song_id, opt.limit, opt.exclude).await,
        Command::Fetch(opt) => cli::fetch(opt.song_id, opt.limit).await,
        Command::Genre(opt) => match opt.command {
            GenreSubcommand::Normalize(n) => cli::normalize(n.tags).await,
            GenreSubcommand::Map(m) => cli::map(m.music_genre).await,
            GenreSubcommand::Table => cli::table().await,
        },
        Command::Songs(opt) => cli::list_songs(opt.search).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
