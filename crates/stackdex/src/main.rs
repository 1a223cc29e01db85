use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use std::path::PathBuf;

mod list;
mod show;

#[derive(Parser)]
#[command(name = "stackdex")]
#[command(about = "Terminal reference browser for software stack profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    /// Catalog document to load instead of the embedded one
    #[arg(long = "catalog", global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog interactively
    #[command(alias = "b")]
    Browse,

    /// List catalog entries, optionally filtered
    #[command(alias = "ls")]
    List(list::ListArgs),

    /// Render one stack's card
    Show(show::ShowArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level depending on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => stackdex_tui::run(cli.catalog),
        Commands::List(args) => list::execute(args, cli.catalog),
        Commands::Show(args) => show::execute(args, cli.catalog),
    }
}
