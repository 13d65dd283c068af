use std::{error::Error, fmt, io};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NameTooShort,
    InvalidEmail,
    InvalidTicketCount { requested: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NameTooShort => write!(
                f,
                "First and last names must be at least 2 characters. Please try again."
            ),
            Self::InvalidEmail => write!(f, "Email address not valid. Please try again."),
            Self::InvalidTicketCount { requested } => write!(
                f,
                "Sorry, cannot book {requested} tickets. Please check the amount."
            ),
        }
    }
}

impl Error for ValidationError {}

#[derive(Debug)]
pub enum DeliveryError {
    Output(io::Error),
}

impl From<io::Error> for DeliveryError {
    fn from(value: io::Error) -> Self {
        DeliveryError::Output(value)
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Output(e) => write!(f, "Failed to deliver ticket: {e}"),
        }
    }
}

impl Error for DeliveryError {}

#[derive(Debug)]
pub enum AppError {
    Input(io::Error),
    Output(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "Failed to read input: {e}"),
            Self::Output(e) => write!(f, "Failed to write output: {e}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(e) | Self::Output(e) => Some(e),
        }
    }
}
