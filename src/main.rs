//! gridword - CLI
//!
//! Generate, solve, and search 4x4 word-grid puzzles from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gridword::{
    core::Grid,
    lexicon::Lexicon,
    output::{print_grid, print_paths, print_solutions},
    puzzle::{SolutionCache, create_puzzle, fetch_solutions, grid_fingerprint, randomize_grid},
    solver::{Solver, search},
    wordlists::loader::{bundled_words, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "gridword",
    about = "Find every dictionary word spellable on a 4x4 letter grid",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'bundled' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "bundled")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random puzzle and solve it
    Generate {
        /// Skip solving; print only the grid and its fingerprint
        #[arg(short, long)]
        no_solve: bool,
    },

    /// Solve a supplied grid
    Solve {
        /// 16 tiles in row-major order, '*' for wildcards
        tiles: String,
    },

    /// Find every path spelling a target sequence on a grid
    Search {
        /// 16 tiles in row-major order, '*' for wildcards
        tiles: String,

        /// Target letter sequence
        letters: String,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "bundled" => Ok(bundled_words()),
        path => {
            load_from_file(path).with_context(|| format!("failed to read word list '{path}'"))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;
    let lexicon = Lexicon::new(words).context("failed to build dictionary")?;

    match cli.command {
        Commands::Generate { no_solve } => {
            if no_solve {
                let grid = randomize_grid();
                print_grid(&grid);
                println!("tiles:       {grid}");
                println!("fingerprint: {}", grid_fingerprint(&grid));
            } else {
                let cache = SolutionCache::new();
                let (grid, fingerprint) = create_puzzle(&lexicon, &cache);
                print_grid(&grid);
                println!("tiles:       {grid}");
                println!("fingerprint: {fingerprint}");

                if let Some(solutions) = fetch_solutions(&cache, &fingerprint) {
                    println!();
                    print_solutions(&solutions);
                }
            }
        }
        Commands::Solve { tiles } => {
            let grid: Grid = tiles.parse().context("invalid grid")?;
            print_grid(&grid);
            let solutions = Solver::new(&lexicon).solve(&grid);
            print_solutions(&solutions);
        }
        Commands::Search { tiles, letters } => {
            let grid: Grid = tiles.parse().context("invalid grid")?;
            print_grid(&grid);
            let paths = search(&grid, &letters);
            print_paths(&letters, &paths);
        }
    }

    Ok(())
}
