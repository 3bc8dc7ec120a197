use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::handler::order_handler::{
    create_order_handler, delete_order_handler, get_order_handler, list_orders_handler,
    order_stats_handler, track_order_handler, update_order_status_handler,
};
use crate::service::order_service::OrderServiceImpl;

pub fn order_router(service: Arc<OrderServiceImpl>) -> Router {
    Router::new()
        .route(
            "/api/orders",
            post(create_order_handler).get(list_orders_handler),
        )
        .route("/api/orders/stats", get(order_stats_handler))
        .route("/api/orders/track/{id}", get(track_order_handler))
        .route(
            "/api/orders/{id}",
            get(get_order_handler).delete(delete_order_handler),
        )
        .route("/api/orders/{id}/status", put(update_order_status_handler))
        .with_state(service)
}
