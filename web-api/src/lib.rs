#![deny(warnings)]
#![deny(rust_2018_idioms)]

use csv_store::CsvAdapter;
use golden_core::VesselOutboundPort;
use routes::{ask, search};
use utoipa::OpenApi;

pub mod error;
pub mod response;
pub mod routes;
pub mod settings;
pub mod startup;

pub trait Database: VesselOutboundPort {}

impl Database for CsvAdapter {}

#[derive(OpenApi)]
#[openapi(
    paths(search::search, ask::ask),
    components(
        schemas(
            error::ErrorResponse,
            error::ErrorDiscriminants,
            search::SearchResponse,
            ask::AskBody,
            ask::AskResponse,
        )
    ),
    tags(
        (name = "golden-records-api", description = "golden records vessel api")
    ),
)]
pub struct ApiDoc;
