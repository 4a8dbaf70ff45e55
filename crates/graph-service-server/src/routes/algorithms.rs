//! Read-only JSON view of the algorithm registries.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use graph_service_core::{AlgorithmInfo, AlgorithmKind};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Routes relative to the `/api` prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/algorithms", get(list_all))
        .route("/algorithms/:kind", get(list_kind))
        .route("/algorithms/:kind/:name", get(describe))
}

fn parse_kind(segment: &str) -> ApiResult<AlgorithmKind> {
    segment
        .parse::<AlgorithmKind>()
        .map_err(|_| ApiError::UnknownKind(segment.to_string()))
}

async fn list_all(
    State(state): State<AppState>,
) -> Json<BTreeMap<&'static str, BTreeMap<String, String>>> {
    Json(
        AlgorithmKind::ALL
            .into_iter()
            .map(|kind| (kind.path_segment(), state.registries.list(kind)))
            .collect(),
    )
}

async fn list_kind(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> ApiResult<Json<BTreeMap<String, String>>> {
    let kind = parse_kind(&kind)?;
    Ok(Json(state.registries.list(kind)))
}

async fn describe(
    State(state): State<AppState>,
    Path((kind, name)): Path<(String, String)>,
) -> ApiResult<Json<AlgorithmInfo>> {
    let kind = parse_kind(&kind)?;
    Ok(Json(state.registries.describe(kind, &name)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_uses_path_segments() {
        assert_eq!(parse_kind("embeddings").unwrap(), AlgorithmKind::Embedding);
        assert_eq!(parse_kind("search").unwrap(), AlgorithmKind::VectorIndex);
        assert_eq!(parse_kind("similarity").unwrap(), AlgorithmKind::Similarity);
        assert!(matches!(parse_kind("embedding"), Err(ApiError::UnknownKind(ref k)) if k == "embedding"));
    }
}
