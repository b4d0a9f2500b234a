use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::{CatalogItem, Category};
use crate::domain::order::SubmitOrder;

use super::errors::ApiError;
use super::AppState;

pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<SubmitOrder>,
) -> Result<HttpResponse, ApiError> {
    let order = state.orders.submit(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(order))
}

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let orders = state.orders.list().await?;
    Ok(HttpResponse::Ok().json(orders))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    // A malformed id cannot name a stored order.
    let id = Uuid::parse_str(&path.into_inner()).map_err(|_| ApiError::NotFound)?;
    let order = state.orders.get(id).await?;
    Ok(HttpResponse::Ok().json(order))
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<Category>,
}

pub async fn list_menu(state: web::Data<AppState>, query: web::Query<MenuQuery>) -> HttpResponse {
    let items: Vec<&CatalogItem> = match query.category {
        Some(category) => state.catalog.by_category(category).collect(),
        None => state.catalog.items().iter().collect(),
    };
    HttpResponse::Ok().json(items)
}
