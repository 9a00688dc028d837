//! Output formatting and progress bars for CLI

use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Cell};

/// Create a progress bar for a self-play series
pub fn create_series_progress(total_games: u64) -> Result<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map_err(|e| anyhow!("progress bar template error: {e}"))?
        .progress_chars("=>-");
    let pb = ProgressBar::new(total_games);
    pb.set_style(style);
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:14} {}", format!("{}:", key), value);
}

/// Render the board with empty cells shown as their index, for choosing moves
///
/// ```text
///  X | 1 | 2
/// ---+---+---
///  3 | O | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
pub fn render_numbered(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells
        .chunks(3)
        .enumerate()
        .map(|(row, chunk)| {
            let cells: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => (row * 3 + col).to_string(),
                    other => other.to_char().to_string(),
                })
                .collect();
            format!(" {} ", cells.join(" | "))
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Format a winning line or its absence
pub fn format_pattern(pattern: Option<[usize; 3]>) -> String {
    match pattern {
        Some([a, b, c]) => format!("[{a}, {b}, {c}]"),
        None => "-".to_string(),
    }
}
