//! Append-only diagnostic log of engine moves.
//!
//! One line per move: timestamp, engine, move, score and node count. The file
//! is never read back.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::errors::ChessResult;
use crate::moves::chess_move::Move;

pub struct MoveLog {
    writer: BufWriter<File>,
}

impl MoveLog {
    /// Opens `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> ChessResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    pub fn record(
        &mut self,
        engine: &str,
        mv: &Move,
        score: Option<i32>,
        nodes: u64,
    ) -> ChessResult<()> {
        let score = score.map_or_else(|| "-".to_owned(), |s| s.to_string());
        writeln!(
            self.writer,
            "{} engine={engine} move={} san={} score={score} nodes={nodes}",
            Local::now().to_rfc3339(),
            mv.long_algebraic(),
            mv.notation(),
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
