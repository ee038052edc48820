use actix_web::{HttpResponse, ResponseError, body::BoxBody, error::JsonPayloadError, http::StatusCode};
use serde::{Deserialize, Serialize};
use snafu::{Location, Snafu};
use tracing::error;
use utoipa::ToSchema;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu, strum::EnumDiscriminants)]
#[snafu(module, visibility(pub))]
#[strum_discriminants(derive(Deserialize, Serialize, ToSchema))]
pub enum Error {
    #[snafu(display("Invalid request body: {error}"))]
    InvalidBody {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: JsonPayloadError,
    },
}

/// Failures that prevent the server from starting.
#[derive(Snafu)]
#[snafu(module, visibility(pub))]
pub enum StartupError {
    #[snafu(display("Failed to load golden records"))]
    Records {
        #[snafu(implicit)]
        location: Location,
        source: csv_store::Error,
    },
    #[snafu(display("Failed to bind '{address}'"))]
    Bind {
        #[snafu(implicit)]
        location: Location,
        address: String,
        #[snafu(source)]
        error: std::io::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDiscriminants,
    pub description: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{self:?}");
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.into(),
            description: self.to_string(),
        })
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBody { location, error } => {
                write!(f, "{self} at {location}, {error:?}")
            }
        }
    }
}

impl std::fmt::Debug for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Records { location, source } => {
                write!(f, "{self} at {location}, {source:?}")
            }
            StartupError::Bind {
                location, error, ..
            } => write!(f, "{self} at {location}, {error:?}"),
        }
    }
}
