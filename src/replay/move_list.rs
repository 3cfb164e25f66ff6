//! Move-token grammar shared by the rectangular and hexagonal replayers.
//!
//! A move token is `<adds>[:<removals>]` where each side is a
//! comma-separated list of `<letter><digits>` coordinates: the letter is a
//! 0-based column (`a` = 0) and the digits a 1-based row. The removal side
//! models captures applied as part of the same move.

use crate::errors::SketchError;

/// Parse one `<letter><digits>` coordinate into a 0-based `(col, row)` pair.
///
/// Values are returned as `i32` because the hexagonal replayer offsets them
/// against a reference corner before bounds are known.
pub fn coord(token: &str) -> Result<(i32, i32), SketchError> {
    let bytes = token.as_bytes();

    let (&letter, digits) = bytes
        .split_first()
        .ok_or_else(|| bad_token(token))?;
    if !letter.is_ascii_lowercase() || digits.is_empty() {
        return Err(bad_token(token));
    }

    let row: i32 = token[1..].parse().map_err(|_| bad_token(token))?;
    if row < 1 {
        return Err(bad_token(token));
    }

    Ok((i32::from(letter - b'a'), row - 1))
}

/// Split a move token into its addition and removal lists.
///
/// A token without `:` has no removals; a token with `:` but an empty
/// right-hand side behaves the same way.
pub fn split_move(token: &str) -> Result<(&str, &str), SketchError> {
    let (adds, removals) = match token.split_once(':') {
        Some((adds, removals)) => (adds, removals),
        None => (token, ""),
    };
    if adds.is_empty() {
        return Err(bad_token(token));
    }
    Ok((adds, removals))
}

fn bad_token(token: &str) -> SketchError {
    SketchError::BadMoveToken {
        token: token.to_owned(),
    }
}

/// Infinite cycle over player markers (default `x` then `o`, wrapping).
#[derive(Debug, Clone)]
pub struct PlayerCycle {
    markers: Vec<char>,
    next: usize,
}

impl PlayerCycle {
    pub fn new(players: &str) -> Result<Self, SketchError> {
        let markers: Vec<char> = players.chars().collect();
        if markers.is_empty() {
            return Err(SketchError::EmptyPlayers);
        }
        Ok(Self { markers, next: 0 })
    }

    pub fn next_marker(&mut self) -> char {
        let marker = self.markers[self.next];
        self.next = (self.next + 1) % self.markers.len();
        marker
    }
}
