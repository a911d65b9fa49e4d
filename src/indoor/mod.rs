//! Turn-by-turn text for moving between floors of a building.
//!
//! Floor labels are free-form ("3", "03", "B1", "Ground"), so nothing here
//! rejects input. A label that does not start with a number simply loses the
//! up/down hint in the generated sentence.

use serde::Serialize;
use std::fmt::Display;

const ROUTE_OUTLINE: &str = "Please follow the route outline on floor";

/// A floor label, parsed once into either a number or an opaque name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Floor<'a> {
    Numeric(i64),
    Named(&'a str),
}

impl<'a> Floor<'a> {
    /// Lenient base-10 parse: leading whitespace, an optional sign, then as
    /// many digits as are present. "2nd" is floor 2, "B1" is a name.
    pub fn parse(label: &'a str) -> Self {
        let trimmed = label.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Self::Named(label);
        }
        // Overlong digit runs saturate instead of failing.
        let magnitude = rest[..digits].bytes().fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
        Self::Numeric(if negative { -magnitude } else { magnitude })
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn number(&self) -> Option<i64> {
        match self {
            Self::Numeric(number) => Some(*number),
            Self::Named(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerticalDirection {
    Up,
    Down,
    /// Both floors are numeric and equal.
    Level,
    /// At least one floor is not numeric.
    Unknown,
}

impl VerticalDirection {
    pub fn between(origin: Floor<'_>, destination: Floor<'_>) -> Self {
        match (origin, destination) {
            (Floor::Numeric(from), Floor::Numeric(to)) if from == to => Self::Level,
            (Floor::Numeric(from), Floor::Numeric(to)) if from < to => Self::Up,
            (Floor::Numeric(_), Floor::Numeric(_)) => Self::Down,
            _ => Self::Unknown,
        }
    }

    /// The word used in instructions. Empty when the direction is unknown.
    pub fn as_word(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Level | Self::Unknown => "",
        }
    }
}

impl Display for VerticalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_word())
    }
}

/// Builds the instruction shown to someone moving from `origin_floor` to
/// `destination_floor` with the given transport ("elevator", "stairs", ...).
///
/// Floors that are numerically equal ("3" and "03") produce the same-floor
/// message and the transport method is not mentioned.
pub fn generate_indoor_direction(
    origin_floor: &str,
    destination_floor: &str,
    transport_method: &str,
) -> String {
    let direction =
        VerticalDirection::between(Floor::parse(origin_floor), Floor::parse(destination_floor));
    if direction == VerticalDirection::Level {
        return format!(
            "You are already on floor {destination_floor}\n {ROUTE_OUTLINE} {destination_floor}"
        );
    }
    format!(
        "Take the {transport_method} {direction} from floor {origin_floor} to floor {destination_floor}\n {ROUTE_OUTLINE} {destination_floor}"
    )
}

/// An indoor instruction together with the inputs it was generated from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndoorDirection {
    pub origin_floor: String,
    pub destination_floor: String,
    pub transport_method: String,
    pub direction: VerticalDirection,
    pub text: String,
}

impl IndoorDirection {
    pub fn new(origin_floor: &str, destination_floor: &str, transport_method: &str) -> Self {
        Self {
            origin_floor: origin_floor.to_string(),
            destination_floor: destination_floor.to_string(),
            transport_method: transport_method.to_string(),
            direction: VerticalDirection::between(
                Floor::parse(origin_floor),
                Floor::parse(destination_floor),
            ),
            text: generate_indoor_direction(origin_floor, destination_floor, transport_method),
        }
    }

    pub fn is_same_floor(&self) -> bool {
        self.direction == VerticalDirection::Level
    }
}
