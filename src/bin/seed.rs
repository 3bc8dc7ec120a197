use std::sync::Arc;

use dotenv::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mousespa_backend::config::mongo_conf::MongoConfig;
use mousespa_backend::dto::order_dto::CreateOrderRequest;
use mousespa_backend::model::order::PickupMethod;
use mousespa_backend::repository::order_repo::{MongoOrderRepository, OrderRepository};
use mousespa_backend::service::order_service::{OrderService, OrderServiceImpl};

fn sample_orders() -> Vec<CreateOrderRequest> {
    vec![
        CreateOrderRequest {
            nama_lengkap: "Budi Santoso".to_string(),
            nomor_telepon: "081234567890".to_string(),
            email: Some("budi.santoso@gmail.com".to_string()),
            layanan: vec!["Deep Cleaning".to_string(), "Premium Care".to_string()],
            jumlah_mousepad: 2,
            metode_pengambilan: PickupMethod::Pickup,
            alamat_pickup: Some("Jl. Sudirman No. 123, Jakarta Selatan".to_string()),
            catatan_tambahan: Some("Mousepad gaming ukuran XL".to_string()),
        },
        CreateOrderRequest {
            nama_lengkap: "Siti Rahayu".to_string(),
            nomor_telepon: "087654321098".to_string(),
            email: Some("siti.rahayu@yahoo.com".to_string()),
            layanan: vec!["Express Cleaning".to_string()],
            jumlah_mousepad: 1,
            metode_pengambilan: PickupMethod::SelfDeliver,
            alamat_pickup: None,
            catatan_tambahan: None,
        },
        CreateOrderRequest {
            nama_lengkap: "Ahmad Wijaya".to_string(),
            nomor_telepon: "082112345678".to_string(),
            email: Some("ahmad.wijaya@outlook.com".to_string()),
            layanan: vec!["Deep Cleaning".to_string(), "Stain Removal".to_string()],
            jumlah_mousepad: 3,
            metode_pengambilan: PickupMethod::Pickup,
            alamat_pickup: Some("Jl. Gatot Subroto No. 456, Bandung".to_string()),
            catatan_tambahan: Some("Ada noda kopi yang membandel".to_string()),
        },
        CreateOrderRequest {
            nama_lengkap: "Dewi Lestari".to_string(),
            nomor_telepon: "089876543210".to_string(),
            email: Some("dewi.lestari@gmail.com".to_string()),
            layanan: vec!["Express Cleaning".to_string()],
            jumlah_mousepad: 1,
            metode_pengambilan: PickupMethod::SelfDeliver,
            alamat_pickup: None,
            catatan_tambahan: Some("Butuh cepat, maksimal 2 hari".to_string()),
        },
        CreateOrderRequest {
            nama_lengkap: "Reza Pratama".to_string(),
            nomor_telepon: "081398765432".to_string(),
            email: Some("reza.pratama@hotmail.com".to_string()),
            layanan: vec![
                "Deep Cleaning".to_string(),
                "Stain Removal".to_string(),
                "Premium Care".to_string(),
            ],
            jumlah_mousepad: 5,
            metode_pengambilan: PickupMethod::Pickup,
            alamat_pickup: Some("Jl. Thamrin No. 321, Jakarta Pusat".to_string()),
            catatan_tambahan: Some("Untuk warnet, perlu invoice".to_string()),
        },
    ]
}

#[tokio::main]
async fn main() {
    let _ = dotenv();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mongo_config = MongoConfig::from_env().expect("Mongo config error");
    let order_repo = Arc::new(
        MongoOrderRepository::new(&mongo_config)
            .await
            .expect("Order repo error"),
    );

    let existing = order_repo.count().await.expect("Failed to count orders");
    if existing > 0 {
        warn!("Database sudah memiliki {} order. Skip seeding.", existing);
        return;
    }

    info!("🌱 Memulai seeding database...");
    let service = OrderServiceImpl::new(order_repo);

    let samples = sample_orders();
    let total = samples.len();
    let mut created = 0;
    for input in samples {
        let name = input.nama_lengkap.clone();
        match service.create_order(input).await {
            Ok(order) => {
                created += 1;
                info!("✅ Order berhasil dibuat: {} (#{})", name, order.id);
            }
            Err(e) => error!("❌ Gagal insert order untuk {}: {}", name, e),
        }
    }

    info!("🎉 Seeding selesai!");
    info!("📊 Total orders: {}/{}", created, total);
}
