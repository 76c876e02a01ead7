use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    EmptyRotationText,
    InvalidDirectionChar(char),
    InvalidDistanceText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyRotationText => write!(
                f,
                "Given rotation text is empty, expect a direction character followed by a distance."
            ),
            Error::InvalidDirectionChar(c) => write!(
                f,
                "Invalid character({}) for rotation direction, expect 'L' or 'R'.",
                c
            ),
            Error::InvalidDistanceText(s) => write!(
                f,
                "Invalid text({}) for rotation distance, expect a non-negative integer.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(Error::InvalidDirectionChar(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    dir: Direction,
    distance: usize,
}

impl TryFrom<&str> for Rotation {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut chars = value.chars();
        let dir = Direction::try_from(chars.next().ok_or(Error::EmptyRotationText)?)?;
        let distance_text = chars.as_str();
        let distance = distance_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidDistanceText(distance_text.to_string()))?;

        Ok(Self { dir, distance })
    }
}

impl Rotation {
    pub fn new(dir: Direction, distance: usize) -> Self {
        Self { dir, distance }
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn distance(&self) -> usize {
        self.distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: usize,
}

impl Default for Dial {
    fn default() -> Self {
        Self::new()
    }
}

impl Dial {
    pub const POSITION_COUNT: usize = 100;
    const START_POSITION: usize = 50;

    pub fn new() -> Self {
        Self {
            position: Self::START_POSITION,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn rotate(&mut self, rotation: &Rotation) {
        let offset = rotation.distance() % Self::POSITION_COUNT;
        self.position = match rotation.direction() {
            Direction::Right => (self.position + offset) % Self::POSITION_COUNT,
            // Add a full turn before subtracting, position stays in [0, 100).
            Direction::Left => {
                (self.position + Self::POSITION_COUNT - offset) % Self::POSITION_COUNT
            }
        };
    }

    // How many clicks of the given rotation leave the pointer on 0, counted
    // from the current (pre-rotation) position.
    pub fn zero_touch_count(&self, rotation: &Rotation) -> usize {
        let distance = rotation.distance();
        if self.position == 0 {
            // Already on 0, the pointer returns there once per full turn.
            return distance / Self::POSITION_COUNT;
        }

        let to_zero = match rotation.direction() {
            Direction::Right => Self::POSITION_COUNT - self.position,
            Direction::Left => self.position,
        };
        if distance < to_zero {
            0
        } else {
            1 + (distance - to_zero) / Self::POSITION_COUNT
        }
    }
}

pub fn read_rotations<P: AsRef<Path>>(path: P) -> Result<Vec<Rotation>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({})", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rotations = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let rotation = Rotation::try_from(s.as_str())
            .with_context(|| format!("Failed to parse rotation in line #{}({}).", ind + 1, s))?;
        rotations.push(rotation);
    }

    Ok(rotations)
}
