use axum::Json;
use coordshift_core::transform::is_out_of_china;

use crate::dto::{BoundsCheckResponse, PointQuery};
use crate::extract::ApiQuery;

pub async fn check_bounds(ApiQuery(query): ApiQuery<PointQuery>) -> Json<BoundsCheckResponse> {
    Json(BoundsCheckResponse {
        lng: query.lng,
        lat: query.lat,
        out_of_china: is_out_of_china(query.lng, query.lat),
    })
}
