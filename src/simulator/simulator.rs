use crate::reader::TokenReader;
use crate::shared::Direction;
use crate::shared::SimulationError;
use log::debug;
use std::io::Read;

/**
 * Runs an elevator movement simulation over a command stream.
 *
 * The input is a whitespace-delimited token stream: an `elevators <N>`
 * directive followed by any number of `(up|down) <elevator> <floors>`
 * commands. Each elevator starts on floor 1 and the building has no
 * floor 0, so any move that crosses between the basement and the upper
 * floors lands one floor further than plain arithmetic says.
 *
 * The engine is a batch one-shot: `run` consumes the stream to
 * completion or to the first error. On failure the accumulated floor
 * table is invalid and must not be queried.
 *
 * # Fields
 * - `reader`:  Tokenizer owning the input stream.
 * - `floors`:  Current floor per elevator, indexed by elevator number - 1.
 */
pub struct ElevatorSimulator<R: Read> {
    reader: TokenReader<R>,
    floors: Vec<i32>,
}

impl<R: Read> ElevatorSimulator<R> {
    pub fn new(stream: R) -> ElevatorSimulator<R> {
        ElevatorSimulator {
            reader: TokenReader::new(stream),
            floors: Vec::new(),
        }
    }

    /// Consumes the whole command stream and applies every movement.
    /// An empty or all-whitespace stream is valid and configures zero
    /// elevators.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        self.reader.skip_whitespace()?;
        if self.reader.peek()?.is_none() {
            return Ok(());
        }

        // First statement must be the number of elevators
        let keyword = self.reader.read_token()?;
        if keyword != "elevators" {
            return Err(SimulationError::Parse(format!(
                "expecting elevators, found '{}'",
                keyword
            )));
        }

        self.reader.skip_whitespace()?;
        let count = self.reader.read_int()?;
        if count < 1 {
            return Err(SimulationError::Config(format!(
                "Invalid number of elevators '{}'",
                count
            )));
        }
        self.floors = vec![1; count as usize];
        debug!("configured {} elevators, all on floor 1", count);

        self.reader.skip_whitespace()?;
        while self.reader.peek()?.is_some() {
            let token = self.reader.read_token()?;
            let direction = Direction::parse(&token).ok_or_else(|| {
                SimulationError::Parse(format!("expecting 'up' or 'down', found '{}'", token))
            })?;

            self.reader.skip_whitespace()?;
            let elevator = self.reader.read_int()?;
            if elevator < 1 || elevator as usize > self.floors.len() {
                return Err(SimulationError::Parse(format!(
                    "Invalid elevator number '{}'",
                    elevator
                )));
            }

            self.reader.skip_whitespace()?;
            let floors_change = self.reader.read_int()?;

            self.shift_floor(direction, elevator as usize, floors_change)?;
            self.reader.skip_whitespace()?;
        }

        Ok(())
    }

    /// Applies one movement command to the floor table.
    ///
    /// The zero-skip correction uses strict comparisons: a move landing
    /// exactly on 0 is stored as 0.
    fn shift_floor(
        &mut self,
        direction: Direction,
        elevator: usize,
        floors_change: i32,
    ) -> Result<(), SimulationError> {
        let starting_floor = self.floors[elevator - 1];
        let ending_floor = match direction {
            Direction::Up => {
                if floors_change < 1 {
                    return Err(SimulationError::Parse(format!(
                        "Invalid number of floors '{}'",
                        floors_change
                    )));
                }
                let mut floor = starting_floor + floors_change;
                if starting_floor < 0 && floor > 0 {
                    floor += 1;
                }
                floor
            }
            // A negative down-delta is accepted and moves the elevator up
            Direction::Down => {
                let mut floor = starting_floor - floors_change;
                if starting_floor > 0 && floor < 0 {
                    floor -= 1;
                }
                floor
            }
        };

        self.floors[elevator - 1] = ending_floor;
        debug!(
            "elevator {} moved {:?} {}: floor {} -> {}",
            elevator, direction, floors_change, starting_floor, ending_floor
        );
        Ok(())
    }

    /// Number of elevators configured by the stream (0 for empty input).
    pub fn elevators(&self) -> usize {
        self.floors.len()
    }

    /// Floor of the given elevator after a successful run. Only valid
    /// for elevator numbers in `1..=elevators()`.
    pub fn floor(&self, elevator: usize) -> i32 {
        self.floors[elevator - 1]
    }
}
