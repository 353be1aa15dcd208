/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Parses the literal command tokens "up" and "down" (case-sensitive).
    pub fn parse(token: &str) -> Option<Direction> {
        match token {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/**
 * Fatal simulation failures. The first error aborts the whole run;
 * there is no resynchronization or partial-result recovery.
 *
 * - `Stream`: the underlying byte source failed to deliver a character.
 * - `Parse`:  malformed keyword or integer, unknown direction token,
 *             elevator number out of range, non-positive up-delta.
 * - `Config`: elevator count below 1, or a malformed config.toml.
 */
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("read error: {0}")]
    Stream(#[from] std::io::Error),
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Config(String),
}
