//! Terminal output formatting

use colored::Colorize;

use crate::core::{Cell, Grid, Path};
use crate::solver::SolutionMap;

/// Print the grid as a labeled 4x4 board, wildcards highlighted
pub fn print_grid(grid: &Grid) {
    println!();
    println!("     {}", "1   2   3   4".dimmed());
    for row in 0..4u8 {
        let label = char::from(b'A' + row);
        let tiles: Vec<String> = (0..4u8)
            .map(|col| {
                let cell = Cell::from_indices(row, col).expect("indices in range");
                let symbol = grid.symbol(cell);
                if symbol.is_wildcard() {
                    symbol.to_string().bright_yellow().bold().to_string()
                } else {
                    symbol.to_string()
                }
            })
            .collect();
        println!(" {}   {}", label.to_string().dimmed(), tiles.join("   "));
    }
    println!();
}

/// Print the words found on a grid, longest first, with path counts
pub fn print_solutions(solutions: &SolutionMap) {
    if solutions.is_empty() {
        println!("{}", "No words on this grid.".red());
        return;
    }

    let mut entries: Vec<(&String, usize)> = solutions
        .iter()
        .map(|(word, paths)| (word, paths.len()))
        .collect();
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));

    println!(
        "{} {}",
        entries.len().to_string().green().bold(),
        if entries.len() == 1 { "word found:" } else { "words found:" }
    );
    for (word, count) in entries {
        if count == 1 {
            println!("  {word}");
        } else {
            println!("  {word} {}", format!("x{count}").dimmed());
        }
    }
}

/// Print every path spelling a target sequence
pub fn print_paths(target: &str, paths: &[Path]) {
    if paths.is_empty() {
        println!("{}", format!("No path spells '{target}'.").red());
        return;
    }

    println!(
        "{} {} {}:",
        paths.len().to_string().green().bold(),
        if paths.len() == 1 { "path spells" } else { "paths spell" },
        target.bright_yellow().bold()
    );
    for path in paths {
        println!("  {}", format_path(path));
    }
}

/// Render a path as its cell names, e.g. `A1 -> A2 -> B2`
#[must_use]
pub fn format_path(path: &[Cell]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
