//! REST endpoint handlers for the dataset resource.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/datasets/` | Every dataset keyed by name |
//! | `POST` | `/datasets/` | Create (or replace) a dataset |

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use einhard_types::DatasetDefinition;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /datasets/ -- list datasets
// ---------------------------------------------------------------------------

/// Return every registered dataset in its plain form, keyed by name.
///
/// An empty registry yields `{}`.
pub async fn list_datasets(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, DatasetDefinition>> {
    let registry = state.registry.read().await;
    Json(registry.to_definitions())
}

// ---------------------------------------------------------------------------
// POST /datasets/ -- create a dataset
// ---------------------------------------------------------------------------

/// Build a dataset from the request body and register it.
///
/// The body is decoded here rather than through the `Json` extractor so
/// that malformed input is reported like every other failure instead of
/// as an Axum rejection. The content type is not checked.
pub async fn create_dataset(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<DatasetDefinition>, ApiError> {
    let definition: DatasetDefinition = serde_json::from_slice(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "malformed dataset definition");
    })?;

    let mut registry = state.registry.write().await;
    let dataset = registry.create(definition)?;
    Ok(Json(dataset.to_definition()))
}
