use std::sync::atomic::{AtomicU64, Ordering};

use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::response::{ApiResponse, Meta};

// Process-wide hit counter, shared by every request.
static COUNTER: AtomicU64 = AtomicU64::new(0);

/// `?add` and `?reset` are presence flags; their values are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CounterQuery {
    pub add: Option<String>,
    pub reset: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CounterData {
    pub counter: u64,
}

#[utoipa::path(
    get,
    path = "/demo/counter",
    params(
        ("add" = Option<String>, Query, description = "Increment the counter"),
        ("reset" = Option<String>, Query, description = "Reset the counter to 0")
    ),
    responses(
        (status = 200, description = "Current counter value", body = ApiResponse<CounterData>)
    ),
    tag = "Demo"
)]
pub async fn counter(Query(query): Query<CounterQuery>) -> Json<ApiResponse<CounterData>> {
    if query.reset.is_some() {
        COUNTER.store(0, Ordering::Relaxed);
    } else if query.add.is_some() {
        COUNTER.fetch_add(1, Ordering::Relaxed);
    }
    let data = CounterData {
        counter: COUNTER.load(Ordering::Relaxed),
    };

    Json(ApiResponse::success("Counter", data, Some(Meta::empty())))
}
