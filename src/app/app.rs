use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::mongo_conf::MongoConfig;
use crate::repository::order_repo::MongoOrderRepository;
use crate::service::order_service::OrderServiceImpl;

pub struct App {
    config: AppConfig,
    router: Router,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();

        let mongo_config = MongoConfig::from_env().expect("Mongo config error");
        let order_repo = Arc::new(
            MongoOrderRepository::new(&mongo_config)
                .await
                .expect("Order repo error"),
        );
        let order_service = Arc::new(OrderServiceImpl::new(order_repo));

        let router = Self::create_router(order_service);
        App { config, router }
    }

    /// The full application router. Takes the service so tests can drive the
    /// real route table against an in-memory repository.
    pub fn create_router(order_service: Arc<OrderServiceImpl>) -> Router {
        use crate::router::admin_router::admin_router;
        use crate::router::order_router::order_router;

        // The order form and admin board may be served from anywhere, so
        // the API stays permissive, like the original deployment.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::ORIGIN,
                header::CONTENT_TYPE,
                header::ACCEPT,
                header::AUTHORIZATION,
            ]);

        Router::new()
            .merge(order_router(order_service.clone()))
            .merge(admin_router(order_service))
            .route(
                "/health",
                get(|| async {
                    Json(json!({
                        "status": "ok",
                        "message": "MouseSpa Backend is running!",
                    }))
                }),
            )
            .layer(cors)
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .await
            .expect("Failed to start server");
    }
}
