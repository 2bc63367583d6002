// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic board dumps.
//!
//! Fatal rule-engine errors log the whole grid so the position that broke
//! an invariant is never lost; the same dump can be written to a
//! timestamped CSV file for offline inspection.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::board::Board;
use crate::{Coord, BOARD_SIZE};

/// Render the board as CSV, one line per row from row 7 down to row 0,
/// each cell either `empty` or `<color> <kind>`.
pub fn board_csv(board: &Board) -> String {
    let mut out = String::new();
    for y in (0..BOARD_SIZE).rev() {
        let mut row = Vec::with_capacity(BOARD_SIZE as usize);
        for x in 0..BOARD_SIZE {
            match board.cell(Coord::new(x, y)).piece() {
                Some(piece) => row.push(format!("{} {}", piece.color, piece.kind)),
                None => row.push("empty".to_string()),
            }
        }
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Write the CSV dump into `dir` as `board_<UTC timestamp>.csv` and return
/// the path of the written file. The directory is created if missing.
pub fn dump_board(board: &Board, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create dump directory {}", dir.display()))?;

    let stamp = Utc::now().format("%Y-%m-%d_%H%M%S");
    let path = dir.join(format!("board_{stamp}.csv"));

    let mut file = std::fs::File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(board_csv(board).as_bytes())
        .context("failed to write board dump")?;

    tracing::info!("board dumped to {}", path.display());
    Ok(path)
}
