use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use plbackup::{cli, config, error};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the playlist id contained in a link
    Id(LinkOptions),

    /// Fetch a playlist and list its tracks
    Show(LinkOptions),

    /// Fetch a playlist and save it as CSV
    Backup(BackupOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

impl Command {
    /// Commands that talk to Spotify and therefore need credentials loaded.
    fn needs_config(&self) -> bool {
        matches!(self, Command::Show(_) | Command::Backup(_))
    }
}

#[derive(Parser, Debug, Clone)]
pub struct LinkOptions {
    /// Playlist link, e.g. https://open.spotify.com/playlist/<id>
    link: String,
}

#[derive(Parser, Debug, Clone)]
pub struct BackupOptions {
    /// Playlist link, e.g. https://open.spotify.com/playlist/<id>
    link: String,

    /// Write the CSV here instead of the default export path
    #[clap(long, short, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the CSV instead of writing a file
    #[clap(long)]
    stdout: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.command.needs_config() {
        if let Err(e) = config::load_env().await {
            error!("Cannot load environment. Err: {}", e);
        }
    }

    match cli.command {
        Command::Id(opt) => cli::id(&opt.link),
        Command::Show(opt) => cli::show(&opt.link).await,
        Command::Backup(opt) => cli::backup(&opt.link, opt.output, opt.stdout).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
