use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::model::order::OrderStats;
use crate::service::order_service::{OrderService, OrderServiceImpl};
use crate::util::error::HandlerError;
use crate::view::admin_view;

/// GET /admin - server-rendered order board
pub async fn admin_board_handler(
    State(service): State<Arc<OrderServiceImpl>>,
) -> Result<Html<String>, HandlerError> {
    let orders = service
        .list_orders()
        .await
        .map_err(|e| HandlerError::from_service(e, "Gagal memuat data pesanan"))?;
    let stats = OrderStats::from_orders(&orders);

    Ok(Html(admin_view::render_admin_page(&orders, &stats)))
}
