use snafu::{Location, Snafu};
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to open records file '{}'", path.display()))]
    Io {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("CSV error"))]
    Csv {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: csv::Error,
    },
    #[snafu(display("Records file '{}' has no header row", path.display()))]
    MissingHeader {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
    },
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io {
                location, error, ..
            } => write!(f, "{self} at {location}, {error:?}"),
            Error::Csv { location, error } => write!(f, "{self} at {location}, {error:?}"),
            Error::MissingHeader { location, .. } => write!(f, "{self} at {location}"),
        }
    }
}

impl From<csv::Error> for Error {
    #[track_caller]
    fn from(e: csv::Error) -> Self {
        let location = std::panic::Location::caller();
        let location = Location::new(location.file(), location.line(), location.column());
        Error::Csv { location, error: e }
    }
}
