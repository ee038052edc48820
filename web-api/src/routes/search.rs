use crate::{Database, response::Response};
use actix_web::web::{self, Query};
use golden_core::{VesselQuery, VesselRecord};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Filters for `/search`. Values that do not parse, zeros and empty strings
/// are treated as absent.
#[derive(Default, Debug, Clone, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Exact IMO number.
    pub imo: Option<String>,
    /// Matched as a substring of the stored MMSI list.
    pub mmsi: Option<String>,
    /// Case-insensitive substring of the stored name list.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SearchResponse {
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<VesselRecord>,
}

#[utoipa::path(
    get,
    path = "/search",
    params(SearchParams),
    responses(
        (status = 200, description = "all vessels matching the filters", body = SearchResponse),
    )
)]
#[tracing::instrument(skip(db))]
pub async fn search<T: Database + Send + Sync + 'static>(
    db: web::Data<T>,
    params: Query<SearchParams>,
) -> Response<SearchResponse> {
    let query = params.into_inner().to_query();

    Response::new(SearchResponse {
        results: db.vessels(&query),
    })
}

impl SearchParams {
    pub fn to_query(&self) -> VesselQuery {
        VesselQuery::new(
            parse_id(self.imo.as_deref()),
            parse_id(self.mmsi.as_deref()),
            self.name.clone(),
        )
    }
}

fn parse_id(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}
