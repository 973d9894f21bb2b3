//! Line-oriented solver driver
//!
//! Reads one position per line from standard input and writes one line per
//! position to standard output containing the move string, the score of the
//! position, the number of nodes explored and the solve time in
//! microseconds. Invalid positions produce a diagnostic on standard error
//! and an empty output line.

use anyhow::Result;
use clap::Parser;
use connect4_solver::{BitBoard, Solver};

use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Only determine the sign of the score (win/draw/loss)
    #[arg(short, long)]
    weak: bool,
}

fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );
    let args = Args::parse();

    let mut solver = Solver::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (line_index, line) in stdin.lock().lines().enumerate() {
        let line = line?;

        let mut board = BitBoard::new();
        let applied = board.play_moves(&line);
        if applied != line.chars().count() {
            eprintln!(
                "Line {}: Invalid move {} \"{}\"",
                line_index + 1,
                board.num_moves() + 1,
                line
            );
            writeln!(out)?;
        } else {
            solver.reset();
            let start_time = Instant::now();
            let score = solver.solve(board, args.weak);
            let elapsed = start_time.elapsed();

            log::debug!(
                "line {} solved after {} nodes",
                line_index + 1,
                solver.node_count
            );
            writeln!(
                out,
                "{} {} {} {}",
                line,
                score,
                solver.node_count,
                elapsed.as_micros()
            )?;
        }
    }
    Ok(())
}
