// src/catalog/handlers.rs

use anyhow::anyhow;
use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::Json,
};
use rest_envelope::apierror::{ApiError, HandlerError, Validate, VALIDATE_ERR_INVALID_VAL};
use rest_envelope::paging::{Pageable, Paging};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::models::*;

const DEFAULT_CURRENCY: &str = "EUR";

/// GET /api/items - List items one page at a time
pub async fn list_items(
    Extension(catalog): Extension<SharedCatalog>,
    Paging(page_request): Paging,
) -> Json<ItemListResponse> {
    let catalog = catalog.read().await;

    let items = catalog.page(page_request.offset(), page_request.page_size());
    let paging = Pageable::new(&page_request, catalog.total());

    debug!(
        item_count = items.len(),
        total = paging.total_items,
        page = paging.page,
        page_size = paging.page_size,
        "Loaded paginated item list"
    );

    Json(ItemListResponse { items, paging })
}

/// GET /api/items/:id - Get a single item
pub async fn get_item(
    Extension(catalog): Extension<SharedCatalog>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, ApiError> {
    let catalog = catalog.read().await;

    catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Item not found: {}", id)))
}

/// POST /api/items - Create an item
pub async fn create_item(
    Extension(catalog): Extension<SharedCatalog>,
    payload: Result<Json<CreateItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(request) = payload.map_err(|e| {
        debug!(error = %e, "Rejecting unparsable item payload");
        ApiError::parse_failed()
    })?;

    request.validate()?;

    let name = request.name.unwrap_or_default().trim().to_string();
    let price_cents = u64::try_from(request.price_cents.unwrap_or_default()).map_err(|_| {
        ApiError::bad_request_field(
            "Price cannot be negative",
            VALIDATE_ERR_INVALID_VAL,
            "price_cents",
        )
    })?;
    let currency = request
        .currency
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let mut catalog = catalog.write().await;
    if catalog.contains_name(&name) {
        return Err(ApiError::conflict(
            "An item with this name already exists",
            "duplicate_name",
            "name",
        ));
    }

    let item = catalog.insert(name, price_cents, currency);
    info!(item_id = item.id, name = %item.name, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/boom - Fails with an unstructured error
pub async fn boom() -> Result<Json<Value>, HandlerError> {
    Err(anyhow!("catalogue backend unreachable").into())
}
