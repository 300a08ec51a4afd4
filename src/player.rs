//! Move selection strategies, one per seat
//!
//! Each player is given a [`MoveChooser`] once at game setup, picked by
//! [`PlayerStyle`]: random legal moves, moves typed by a human, or the
//! minimax [`AIEngine`].

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Pos;
use crate::config::{PlayerStyle, SearchConfig};
use crate::engine::AIEngine;
use crate::game::GameState;

/// Picks the next move for the player to move.
pub trait MoveChooser {
    /// Returns `None` when no move can be produced (full board or closed input).
    fn choose(&mut self, game: &GameState) -> Option<Pos>;

    fn name(&self) -> &str;
}

/// Uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl MoveChooser for RandomChooser {
    fn choose(&mut self, game: &GameState) -> Option<Pos> {
        game.legal_moves().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

impl MoveChooser for AIEngine {
    fn choose(&mut self, game: &GameState) -> Option<Pos> {
        self.choose_move(game)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Where an [`InteractiveChooser`] reads its lines from.
///
/// Stdin is locked only for the duration of one read, so several human
/// seats can share it.
pub trait LineSource {
    /// Append one line to `buf`, returning the bytes read (0 at end of input)
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.lock().read_line(buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Moves typed as `x y` lines.
///
/// Malformed or off-board input is rejected and the prompt repeated.
/// Occupied cells are accepted here and rejected by the game, which asks
/// again on the next call.
pub struct InteractiveChooser<R, W> {
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> InteractiveChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl InteractiveChooser<Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

/// Parse `x y` into a position on a board of side `dim`
pub fn parse_move(line: &str, dim: u8) -> Option<Pos> {
    let mut parts = line.split_whitespace();
    let x: i32 = parts.next()?.parse().ok()?;
    let y: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let in_range = |v: i32| v >= 0 && v < dim as i32;
    (in_range(x) && in_range(y)).then(|| Pos::new(x as u8, y as u8))
}

impl<R: LineSource, W: Write> MoveChooser for InteractiveChooser<R, W> {
    fn choose(&mut self, game: &GameState) -> Option<Pos> {
        let dim = game.board().dim();
        let mut line = String::new();
        loop {
            // Prompt failures are not fatal; input decides whether we continue
            let _ = write!(self.output, "input move \"x y\" : ");
            let _ = self.output.flush();

            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            if let Some(pos) = parse_move(&line, dim) {
                return Some(pos);
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

/// Build the chooser for a seat.
///
/// `seed` offsets keep the two seats' random streams distinct.
pub fn chooser_for(style: PlayerStyle, search: &SearchConfig, seat: usize) -> Box<dyn MoveChooser> {
    let seed = search.seed.map(|s| s.wrapping_add(seat as u64));
    match style {
        PlayerStyle::Random => Box::new(RandomChooser::new(seed)),
        PlayerStyle::Human => Box::new(InteractiveChooser::stdio()),
        PlayerStyle::Minimax => Box::new(AIEngine::with_config(search.depth, search.breadth, seed)),
    }
}
