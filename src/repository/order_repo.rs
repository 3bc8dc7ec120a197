use async_trait::async_trait;
use bson::{doc, Document};
use futures::stream::StreamExt;
use tracing::{error, info};

use crate::config::mongo_conf::MongoConfig;
use crate::model::order::Order;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: Order) -> RepositoryResult<Order>;
    async fn get_by_id(&self, id: u32) -> RepositoryResult<Order>;
    async fn list(&self) -> RepositoryResult<Vec<Order>>;
    async fn update_status(&self, id: u32, status: &str) -> RepositoryResult<Order>;
    async fn delete(&self, id: u32) -> RepositoryResult<()>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoOrderRepository {
    orders: mongodb::Collection<Order>,
    counters: mongodb::Collection<Document>,
}

impl MongoOrderRepository {
    /// Create a new MongoOrderRepository using MongoConfig
    pub async fn new(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        use mongodb::{options::ClientOptions, Client};

        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.app_name = Some("MouseSpaBackend".to_string());
        client_options.max_pool_size = Some(config.pool_size);
        client_options.connect_timeout = Some(std::time::Duration::from_secs(
            config.connection_timeout_secs,
        ));

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.database);
        let orders = db.collection::<Order>(config.order_collection());
        let counters = db.collection::<Document>(config.counter_collection());
        Ok(MongoOrderRepository { orders, counters })
    }

    /// Allocate the next order id from the counters collection. The atomic
    /// `$inc` guarantees distinct ids under concurrent creations.
    async fn next_id(&self) -> RepositoryResult<u32> {
        use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();
        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": "orders" }, doc! { "$inc": { "seq": 1 } }, options)
            .await
            .map_err(RepositoryError::from)?
            .ok_or_else(|| RepositoryError::database("Counter document missing after upsert"))?;

        match counter.get("seq") {
            Some(bson::Bson::Int32(seq)) => Ok(*seq as u32),
            Some(bson::Bson::Int64(seq)) => Ok(*seq as u32),
            _ => Err(RepositoryError::database("Counter document has no numeric seq")),
        }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[tracing::instrument(skip(self, order), fields(customer = %order.nama_lengkap))]
    async fn create(&self, order: Order) -> RepositoryResult<Order> {
        info!("Creating new order");
        let mut new_order = order;
        new_order.id = self.next_id().await?;
        let now = chrono::Utc::now().to_rfc3339();
        new_order.created_at = Some(now.clone());
        new_order.updated_at = Some(now);

        match self.orders.insert_one(new_order.clone(), None).await {
            Ok(_) => {
                info!(order_id = new_order.id, "Order created successfully");
                Ok(new_order)
            }
            Err(e) => {
                error!("Failed to create order: {}", e);
                Err(RepositoryError::database(format!("Failed to create order: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn get_by_id(&self, id: u32) -> RepositoryResult<Order> {
        info!("Fetching order by ID: {}", id);
        let filter = doc! { "id": id as i64 };
        match self.orders.find_one(filter, None).await {
            Ok(Some(order)) => Ok(order),
            Ok(None) => {
                error!("Order not found for ID: {}", id);
                Err(RepositoryError::not_found(format!("Order not found for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to fetch order by ID: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch order by ID: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Order>> {
        use mongodb::options::FindOptions;

        info!("Listing orders");
        // RFC 3339 UTC strings sort chronologically, so a plain descending
        // sort yields newest-first.
        let options = FindOptions::builder().sort(doc! { "created_at": -1 }).build();
        let mut cursor = self.orders.find(None, options).await.map_err(|e| {
            error!("Failed to list orders: {}", e);
            RepositoryError::database(format!("Failed to list orders: {}", e))
        })?;

        let mut orders = Vec::new();
        while let Some(order) = cursor.next().await {
            match order {
                Ok(o) => orders.push(o),
                Err(e) => {
                    error!("Failed to deserialize order: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize order: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} orders", orders.len());
        Ok(orders)
    }

    #[tracing::instrument(skip(self), fields(id = id, status = %status))]
    async fn update_status(&self, id: u32, status: &str) -> RepositoryResult<Order> {
        info!(order_id = id, status = %status, "Updating order status");
        let filter = doc! { "id": id as i64 };
        let update = doc! { "$set": {
            "status": status,
            "updated_at": chrono::Utc::now().to_rfc3339(),
        } };
        match self.orders.update_one(filter, update, None).await {
            // matched_count rather than modified_count: re-applying the
            // current status is a valid administrative action.
            Ok(result) if result.matched_count > 0 => {
                info!("Order status updated successfully for ID: {}", id);
                let mut updated = self.get_by_id(id).await?;
                updated.status = Some(status.to_string());
                Ok(updated)
            }
            Ok(_) => {
                error!("No order found to update status for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "No order found to update status for ID: {}",
                    id
                )))
            }
            Err(e) => {
                error!("Failed to update order status: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to update order status: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn delete(&self, id: u32) -> RepositoryResult<()> {
        info!("Deleting order with ID: {}", id);
        let filter = doc! { "id": id as i64 };
        match self.orders.delete_one(filter, None).await {
            Ok(result) if result.deleted_count > 0 => {
                info!("Order deleted successfully for ID: {}", id);
                Ok(())
            }
            Ok(_) => {
                error!("No order found to delete for ID: {}", id);
                Err(RepositoryError::not_found(format!("No order found to delete for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to delete order: {}", e);
                Err(RepositoryError::database(format!("Failed to delete order: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        match self.orders.count_documents(None, None).await {
            Ok(count) => Ok(count),
            Err(e) => {
                error!("Failed to count orders: {}", e);
                Err(RepositoryError::database(format!("Failed to count orders: {}", e)))
            }
        }
    }
}
