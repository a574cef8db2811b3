use std::fmt;

#[derive(Debug)]
pub enum AlloyDbError {
    EmptyCatalog,
    UnknownElement(String),
    UnknownFamily(String),
    InvalidPercent { alloy: String, element: String, percent: f64 },
    EmptyComposition(String),
    DataError(String),
}

pub type Result<T> = std::result::Result<T, AlloyDbError>;

impl fmt::Display for AlloyDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "reference catalog is empty"),
            Self::UnknownElement(e) => write!(f, "unknown element: {e}"),
            Self::UnknownFamily(family) => write!(f, "unknown alloy family: {family}"),
            Self::InvalidPercent {
                alloy,
                element,
                percent,
            } => {
                write!(f, "invalid percentage {percent} for '{element}' in alloy '{alloy}'")
            }
            Self::EmptyComposition(alloy) => write!(f, "alloy '{alloy}' has no composition"),
            Self::DataError(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for AlloyDbError {}
