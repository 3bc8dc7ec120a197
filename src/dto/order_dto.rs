use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::order::PickupMethod;

/// Body of `POST /api/orders`. Structural checks live here; the domain
/// rules (phone digit count, email shape, conditional pickup address) are
/// applied by the order service before anything is written.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, max = 100, message = "Field ini wajib diisi"))]
    pub nama_lengkap: String,

    #[validate(length(min = 1, max = 30, message = "Field ini wajib diisi"))]
    pub nomor_telepon: String,

    pub email: Option<String>,

    #[validate(length(min = 1, message = "Pilih minimal satu layanan"))]
    pub layanan: Vec<String>,

    pub jumlah_mousepad: i64,

    pub metode_pengambilan: PickupMethod,

    pub alamat_pickup: Option<String>,

    pub catatan_tambahan: Option<String>,
}

/// Body of `PUT /api/orders/{id}/status`. The value must parse as one of
/// the five fulfillment stages; the service rejects anything else.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 2, max = 50))]
    pub status: String,
}

/// Success envelope shared by every JSON endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            total: None,
        }
    }

    pub fn ok_with_total(message: impl Into<String>, data: T, total: usize) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            total: Some(total),
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: None,
            total: None,
        }
    }
}
