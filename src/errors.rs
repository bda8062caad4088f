use std::error::Error;
use std::fmt::{Display, Formatter};

/// A NACA 4-digit code which could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCode {
    /// The code did not have exactly four characters; holds the number found.
    WrongLength(usize),

    /// The code contained a character which is not an ASCII decimal digit.
    NonDigit(char),
}

impl Display for InvalidCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidCode::WrongLength(n) => {
                write!(f, "NACA code must have exactly 4 digits, found {} characters", n)
            }
            InvalidCode::NonDigit(c) => write!(f, "NACA code contains non-digit character {:?}", c),
        }
    }
}

impl Error for InvalidCode {}

/// A span fraction outside of the domain a placement function is defined on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainError {
    pub fraction: f64,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "span fraction {} is outside of [0, 1]", self.fraction)
    }
}

impl Error for DomainError {}

/// A blade configuration which cannot produce a loft.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidLoft {
    NoStations,
    AllStationsSkipped { skip: usize, count: usize },
    BadSkewRadius(f64),
}

impl Display for InvalidLoft {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidLoft::NoStations => write!(f, "station count must be at least 1"),
            InvalidLoft::AllStationsSkipped { skip, count } => write!(
                f,
                "skipping {} of {} stations leaves nothing to loft",
                skip, count
            ),
            InvalidLoft::BadSkewRadius(r) => {
                write!(f, "skew radius must be finite and positive, got {}", r)
            }
        }
    }
}

impl Error for InvalidLoft {}
