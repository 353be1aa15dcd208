use crate::shared::SimulationError;
use std::io::Read;

/**
 * Whitespace-delimited tokenizer over a byte stream.
 *
 * The `TokenReader` owns the input stream and exposes peek/consume
 * semantics over it: single-byte lookahead plus helpers for skipping
 * whitespace runs and reading string or integer tokens. It is the only
 * place that touches the raw stream; the simulator never sees bytes.
 *
 * # Fields
 * - `stream`:  The underlying byte source (a file in production, an
 *              in-memory buffer in tests).
 * - `peeked`:  One byte of lookahead, filled lazily by `peek`.
 * - `at_end`:  Set once the stream has been read to exhaustion.
 */
pub struct TokenReader<R: Read> {
    stream: R,
    peeked: Option<u8>,
    at_end: bool,
}

impl<R: Read> TokenReader<R> {
    pub fn new(stream: R) -> TokenReader<R> {
        TokenReader {
            stream,
            peeked: None,
            at_end: false,
        }
    }

    /// Returns the next byte without consuming it, or `None` at end of stream.
    pub fn peek(&mut self) -> Result<Option<u8>, SimulationError> {
        if self.peeked.is_none() && !self.at_end {
            let mut byte = [0u8; 1];
            if self.stream.read(&mut byte)? == 0 {
                self.at_end = true;
            } else {
                self.peeked = Some(byte[0]);
            }
        }
        Ok(self.peeked)
    }

    /// Consumes and returns the next byte, or `None` at end of stream.
    pub fn next(&mut self) -> Result<Option<u8>, SimulationError> {
        let byte = self.peek()?;
        self.peeked = None;
        Ok(byte)
    }

    /// Consumes whitespace until end of stream or the first non-whitespace byte.
    pub fn skip_whitespace(&mut self) -> Result<(), SimulationError> {
        while let Some(byte) = self.peek()? {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.next()?;
        }
        Ok(())
    }

    /// Reads a token: bytes up to the next whitespace or end of stream.
    /// The empty string is a valid result at end of stream.
    pub fn read_token(&mut self) -> Result<String, SimulationError> {
        let mut token = String::new();
        while let Some(byte) = self.peek()? {
            if byte.is_ascii_whitespace() {
                break;
            }
            self.next()?;
            token.push(byte as char);
        }
        Ok(token)
    }

    /// Reads a token and parses it as a base-10 signed integer.
    pub fn read_int(&mut self) -> Result<i32, SimulationError> {
        let token = self.read_token()?;
        token.parse::<i32>().map_err(|_| {
            SimulationError::Parse(format!("expecting integer, found '{}'", token))
        })
    }
}
