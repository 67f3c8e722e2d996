//! Console player reading coordinates from a line-oriented reader

use std::io::{BufRead, Write};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Game, Move},
};

/// Prompts for `row col` until a playable cell is entered.
///
/// End of input is treated as declining to move.
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    /// The writer prompts go to, for callers sharing the console
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    fn io_error(operation: &str) -> impl FnOnce(std::io::Error) -> Error + '_ {
        move |source| Error::Io {
            operation: operation.to_string(),
            source,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(Self::io_error("read move"))?;
        Ok((read > 0).then_some(line))
    }
}

/// Parse `"row col"` or `"row,col"` into a move
pub fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_move(&mut self, game: &Game) -> Result<Option<Move>> {
        if game.is_over() {
            return Ok(None);
        }
        let last = game.board().size().saturating_sub(1);

        loop {
            write!(self.output, "Enter row and column (0-{last}): ")
                .and_then(|()| self.output.flush())
                .map_err(Self::io_error("write prompt"))?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_move(&line) {
                Some(mv) if game.board().contains(mv) && game.board().is_empty(mv) => {
                    return Ok(Some(mv));
                }
                _ => writeln!(self.output, "invalid move, try again")
                    .map_err(Self::io_error("write prompt"))?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
