//! Catalog handler.

use axum::{extract::State, Json};

use catalog_core::catalog::Product;

use crate::{handlers::AppError, state::AppState};

/// List every product (GET /).
///
/// Reads through the cached repository; a store failure becomes an error
/// status via [`AppError`].
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.product_repo.get_all().await?;

    tracing::debug!(count = products.len(), "Listed products");

    Ok(Json(products))
}
