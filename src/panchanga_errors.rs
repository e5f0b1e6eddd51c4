use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanchangaError {
    #[error("Invalid date string format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Coordinate out of range: latitude {lat}, longitude {lon}")]
    CoordinateOutOfRange { lat: f64, lon: f64 },

    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] Box<ureq::Error>),

    #[error("Secondary source returned an unparseable rendering")]
    SecondaryParseFailed,

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<ureq::Error> for PanchangaError {
    fn from(err: ureq::Error) -> Self {
        PanchangaError::UreqHttpError(Box::new(err))
    }
}

impl PartialEq for PanchangaError {
    fn eq(&self, other: &Self) -> bool {
        use PanchangaError::*;
        match (self, other) {
            (InvalidDateFormat(a), InvalidDateFormat(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (
                CoordinateOutOfRange { lat: a1, lon: o1 },
                CoordinateOutOfRange { lat: a2, lon: o2 },
            ) => a1 == a2 && o1 == o2,

            // Not comparable beyond the variant itself
            (UreqHttpError(_), UreqHttpError(_)) => true,
            (IoError(_), IoError(_)) => true,

            (SecondaryParseFailed, SecondaryParseFailed) => true,

            _ => false,
        }
    }
}
