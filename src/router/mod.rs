pub mod admin_router;
pub mod order_router;
