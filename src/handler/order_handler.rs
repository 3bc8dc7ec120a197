use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use validator::Validate;

use crate::dto::order_dto::{ApiResponse, CreateOrderRequest, UpdateOrderStatusRequest};
use crate::service::order_service::{OrderService, OrderServiceImpl};
use crate::util::error::HandlerError;

fn parse_order_id(raw: &str) -> Result<u32, HandlerError> {
    raw.parse::<u32>()
        .map_err(|_| HandlerError::bad_request("ID tidak valid"))
}

/// POST /api/orders
pub async fn create_order_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[create_order_handler] Handler called");
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation("Data tidak valid", Some(e.to_string())));
    }

    let created = service
        .create_order(payload)
        .await
        .map_err(|e| HandlerError::from_service(e, "Gagal menyimpan order"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Order berhasil dibuat", created)),
    ))
}

/// GET /api/orders
pub async fn list_orders_handler(
    State(service): State<Arc<OrderServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let orders = service
        .list_orders()
        .await
        .map_err(|e| HandlerError::from_service(e, "Gagal mengambil data orders"))?;

    let total = orders.len();
    Ok(Json(ApiResponse::ok_with_total(
        "Data orders berhasil diambil",
        orders,
        total,
    )))
}

/// GET /api/orders/stats
pub async fn order_stats_handler(
    State(service): State<Arc<OrderServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let stats = service
        .order_stats()
        .await
        .map_err(|e| HandlerError::from_service(e, "Gagal mengambil statistik orders"))?;

    Ok(Json(ApiResponse::ok("Statistik orders berhasil diambil", stats)))
}

/// GET /api/orders/{id}
pub async fn get_order_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_order_id(&id)?;
    let order = service
        .get_order(id)
        .await
        .map_err(|e| HandlerError::from_service(e, "Gagal mengambil data order"))?;

    Ok(Json(ApiResponse::ok("Order ditemukan", order)))
}

/// GET /api/orders/track/{id} - customer-facing lookup
pub async fn track_order_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_order_id(&id)?;
    let order = service
        .track_order(id)
        .await
        .map_err(|e| HandlerError::from_service(e, "Gagal mengambil data order"))?;

    Ok(Json(ApiResponse::ok("Order ditemukan", order)))
}

/// PUT /api/orders/{id}/status
pub async fn update_order_status_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_order_id(&id)?;
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation("Data tidak valid", Some(e.to_string())));
    }

    service
        .update_order_status(id, &payload.status)
        .await
        .map_err(|e| HandlerError::from_service(e, "Gagal mengupdate status"))?;

    Ok(Json(ApiResponse::<()>::message_only(
        "Status order berhasil diupdate",
    )))
}

/// DELETE /api/orders/{id}
pub async fn delete_order_handler(
    State(service): State<Arc<OrderServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_order_id(&id)?;
    service
        .delete_order(id)
        .await
        .map_err(|e| HandlerError::from_service(e, "Gagal menghapus order"))?;

    Ok(Json(ApiResponse::<()>::message_only("Order berhasil dihapus")))
}
