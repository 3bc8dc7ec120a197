use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::dto::order_dto::CreateOrderRequest;
use crate::model::order::{Order, OrderStats, OrderStatus, PickupMethod, ServiceList};
use crate::repository::order_repo::OrderRepository;
use crate::service::pricing;
use crate::util::error::ServiceError;
use crate::util::validation;

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn create_order(&self, input: CreateOrderRequest) -> Result<Order, ServiceError>;
    async fn get_order(&self, id: u32) -> Result<Order, ServiceError>;
    async fn track_order(&self, id: u32) -> Result<Order, ServiceError>;
    async fn list_orders(&self) -> Result<Vec<Order>, ServiceError>;
    async fn order_stats(&self) -> Result<OrderStats, ServiceError>;
    async fn update_order_status(&self, id: u32, status: &str) -> Result<Order, ServiceError>;
    async fn delete_order(&self, id: u32) -> Result<(), ServiceError>;
}

pub struct OrderServiceImpl {
    pub order_repo: Arc<dyn OrderRepository>,
}

impl OrderServiceImpl {
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        OrderServiceImpl { order_repo }
    }
}

/// Domain rules for a new order, the same ones the intake form shows
/// inline. Rejected input never reaches the repository.
pub fn validate_new_order(input: &CreateOrderRequest) -> Result<(), ServiceError> {
    if validation::is_blank(&input.nama_lengkap) {
        return Err(ServiceError::InvalidInput("Nama lengkap wajib diisi".to_string()));
    }
    if validation::is_blank(&input.nomor_telepon) {
        return Err(ServiceError::InvalidInput("Nomor telepon wajib diisi".to_string()));
    }
    if !validation::is_valid_phone(&input.nomor_telepon) {
        return Err(ServiceError::InvalidInput(
            "Nomor telepon tidak valid (10-15 digit)".to_string(),
        ));
    }
    if let Some(email) = input.email.as_deref() {
        if !email.trim().is_empty() && !validation::is_valid_email(email.trim()) {
            return Err(ServiceError::InvalidInput("Format email tidak valid".to_string()));
        }
    }
    if input.layanan.iter().all(|s| validation::is_blank(s)) {
        return Err(ServiceError::InvalidInput("Pilih minimal satu layanan".to_string()));
    }
    if input.metode_pengambilan == PickupMethod::Pickup {
        let address = input.alamat_pickup.as_deref().unwrap_or("");
        if validation::is_blank(address) {
            return Err(ServiceError::InvalidInput("Alamat pickup wajib diisi".to_string()));
        }
    }
    Ok(())
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    #[instrument(skip(self, input), fields(customer = %input.nama_lengkap))]
    async fn create_order(&self, input: CreateOrderRequest) -> Result<Order, ServiceError> {
        validate_new_order(&input)?;

        let quantity = validation::clamp_quantity(input.jumlah_mousepad);
        let services: Vec<String> = input
            .layanan
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let estimated_total = pricing::order_total(&services, quantity);
        info!(
            quantity,
            estimated_total = %pricing::format_rupiah(estimated_total),
            "Registering new order"
        );

        // The pickup address only exists for the pickup method; it is
        // cleared otherwise.
        let alamat_pickup = match input.metode_pengambilan {
            PickupMethod::Pickup => input
                .alamat_pickup
                .as_deref()
                .map(str::trim)
                .map(str::to_string),
            PickupMethod::SelfDeliver => None,
        };
        let email = input
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string);
        let catatan_tambahan = input
            .catatan_tambahan
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let order = Order {
            // Assigned by the repository at insert time.
            id: 0,
            status: Some(OrderStatus::Pending.as_str().to_string()),
            nama_lengkap: input.nama_lengkap.trim().to_string(),
            nomor_telepon: input.nomor_telepon.trim().to_string(),
            email,
            layanan: ServiceList::encode(&services),
            jumlah_mousepad: quantity,
            metode_pengambilan: input.metode_pengambilan.as_str().to_string(),
            alamat_pickup,
            catatan_tambahan,
            created_at: None,
            updated_at: None,
        };

        let created = self.order_repo.create(order).await.map_err(ServiceError::from)?;
        info!(order_id = created.id, "Order registered successfully");
        Ok(created)
    }

    #[instrument(skip(self), fields(id = id))]
    async fn get_order(&self, id: u32) -> Result<Order, ServiceError> {
        info!("Getting order by id");
        self.order_repo.get_by_id(id).await.map_err(|e| {
            error!("Failed to fetch order: {e}");
            ServiceError::NotFound("Order tidak ditemukan".to_string())
        })
    }

    #[instrument(skip(self), fields(id = id))]
    async fn track_order(&self, id: u32) -> Result<Order, ServiceError> {
        info!("Tracking order");
        let order = self.get_order(id).await?;
        info!(
            status = order.status().as_str(),
            stage = order.status().index(),
            "Order tracked"
        );
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        info!("Listing orders");
        let res = self.order_repo.list().await;
        match &res {
            Ok(orders) => info!("Fetched {} orders", orders.len()),
            Err(e) => error!("Failed to list orders: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn order_stats(&self) -> Result<OrderStats, ServiceError> {
        let orders = self.list_orders().await?;
        Ok(OrderStats::from_orders(&orders))
    }

    #[instrument(skip(self), fields(id = id, status = %status))]
    async fn update_order_status(&self, id: u32, status: &str) -> Result<Order, ServiceError> {
        // Any of the five stages is a valid target; there is no transition
        // restriction, this is an administrative override.
        let status = OrderStatus::parse(status)
            .ok_or_else(|| ServiceError::InvalidInput("Status tidak valid".to_string()))?;
        info!("Updating order status");
        let res = self.order_repo.update_status(id, status.as_str()).await;
        match &res {
            Ok(_) => info!("Order status updated successfully"),
            Err(e) => error!("Failed to update order status: {e}"),
        }
        res.map_err(|e| match e {
            crate::repository::repository_error::RepositoryError::NotFound(_) => {
                ServiceError::NotFound("Order tidak ditemukan".to_string())
            }
            other => ServiceError::from(other),
        })
    }

    #[instrument(skip(self), fields(id = id))]
    async fn delete_order(&self, id: u32) -> Result<(), ServiceError> {
        info!("Deleting order");
        let res = self.order_repo.delete(id).await;
        match &res {
            Ok(_) => info!("Order deleted successfully"),
            Err(e) => error!("Failed to delete order: {e}"),
        }
        res.map_err(|e| match e {
            crate::repository::repository_error::RepositoryError::NotFound(_) => {
                ServiceError::NotFound("Order tidak ditemukan".to_string())
            }
            other => ServiceError::from(other),
        })
    }
}
