use anyhow::Context;
use std::io::{BufRead, Write};
use sweeper_core::{Board, Outcome};

use crate::input::{Command, parse_line};

/// Plays `board` reading moves from `input` and printing to `output` until the game ends or input runs out.
///
/// Returns the final outcome, or `None` when input ended first.
pub fn play<R, W>(
    board: &mut Board,
    input: R,
    output: &mut W,
    prompt: &str,
) -> anyhow::Result<Option<Outcome>>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        writeln!(output, "{}", board)?;

        let outcome = board.outcome();
        if outcome.is_finished() {
            if let Some(message) = outcome.message() {
                writeln!(output, "{}", message)?;
            }
            log::debug!("game over: {:?}", outcome);
            return Ok(Some(outcome));
        }

        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            log::debug!("input closed before the game ended");
            return Ok(None);
        };
        let line = line.context("could not read move")?;

        let command = match parse_line(&line, board.bounds()) {
            Ok(command) => command,
            Err(err) => {
                log::trace!("rejected input {:?}: {:?}", line, err);
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        match command {
            Command::Reveal(coords) => {
                let result = board.reveal(coords)?;
                if result.has_update() {
                    log::debug!("reveal {:?}: {:?}", coords, result);
                }
            }
            Command::ToggleFlag(coords) => {
                let result = board.toggle_flag(coords)?;
                if result.has_update() {
                    log::debug!("toggle flag {:?}: {:?}", coords, result);
                }
            }
        }
    }
}
