use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::admin_handler::admin_board_handler;
use crate::service::order_service::OrderServiceImpl;

pub fn admin_router(service: Arc<OrderServiceImpl>) -> Router {
    Router::new()
        .route("/admin", get(admin_board_handler))
        .with_state(service)
}
