//! Customer and order HTTP routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::QueryClient;
use crate::projection::ProjectedRecord;
use crate::store::{NewOnlineOrder, NewOrder, OrderStore, PlacedOnlineOrder};

use super::errors::ApiError;
use super::response::{CreatedResponse, ListResponse, MutationResponse, SingleResponse};

/// Body for `PUT /orders/gift`
#[derive(Debug, Deserialize)]
pub struct GiftOrderRequest {
    pub order_id: i64,
    pub email: String,
}

/// Routes over customers, orders, and online orders
pub fn orders_routes<C: QueryClient + 'static>(store: Arc<OrderStore<C>>) -> Router {
    Router::new()
        .route("/orders/customers", get(list_customers::<C>))
        .route("/orders/customers/:customer_id", get(customer_orders::<C>))
        .route("/orders/customers/:customer_id", post(place_customer_order::<C>))
        .route(
            "/orders/customers/:customer_id/:order_id",
            delete(delete_customer_order::<C>),
        )
        .route("/orders/online", post(place_online_order::<C>))
        .route("/orders/online/:order_id", get(online_order_details::<C>))
        .route("/orders/online/:order_id", delete(delete_online_order::<C>))
        .route("/orders/gift", put(gift_order::<C>))
        .with_state(store)
}

async fn list_customers<C: QueryClient + 'static>(
    State(store): State<Arc<OrderStore<C>>>,
) -> Result<Json<ListResponse<ProjectedRecord>>, ApiError> {
    Ok(Json(ListResponse::new(store.list_customers()?)))
}

async fn customer_orders<C: QueryClient + 'static>(
    State(store): State<Arc<OrderStore<C>>>,
    Path(customer_id): Path<i64>,
) -> Result<Json<ListResponse<ProjectedRecord>>, ApiError> {
    Ok(Json(ListResponse::new(store.customer_orders(customer_id)?)))
}

async fn place_customer_order<C: QueryClient + 'static>(
    State(store): State<Arc<OrderStore<C>>>,
    Path(customer_id): Path<i64>,
    Json(order): Json<NewOrder>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let order_id = store.place_customer_order(customer_id, &order)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(order_id))))
}

async fn delete_customer_order<C: QueryClient + 'static>(
    State(store): State<Arc<OrderStore<C>>>,
    Path((customer_id, order_id)): Path<(i64, i64)>,
) -> Result<Json<MutationResponse>, ApiError> {
    let affected = store.delete_customer_order(customer_id, order_id)?;
    Ok(Json(MutationResponse::new(affected)))
}

async fn place_online_order<C: QueryClient + 'static>(
    State(store): State<Arc<OrderStore<C>>>,
    Json(order): Json<NewOnlineOrder>,
) -> Result<(StatusCode, Json<PlacedOnlineOrder>), ApiError> {
    let placed = store.place_online_order(&order)?;
    Ok((StatusCode::CREATED, Json(placed)))
}

async fn online_order_details<C: QueryClient + 'static>(
    State(store): State<Arc<OrderStore<C>>>,
    Path(order_id): Path<i64>,
) -> Result<Json<SingleResponse<ProjectedRecord>>, ApiError> {
    Ok(Json(SingleResponse::new(store.online_order_details(order_id)?)))
}

async fn delete_online_order<C: QueryClient + 'static>(
    State(store): State<Arc<OrderStore<C>>>,
    Path(order_id): Path<i64>,
) -> Result<Json<MutationResponse>, ApiError> {
    let affected = store.delete_online_order(order_id)?;
    Ok(Json(MutationResponse::new(affected)))
}

async fn gift_order<C: QueryClient + 'static>(
    State(store): State<Arc<OrderStore<C>>>,
    Json(body): Json<GiftOrderRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let affected = store.gift_order(body.order_id, &body.email)?;
    Ok(Json(MutationResponse::new(affected)))
}
