use serde::{Deserialize, Serialize};

/// Fulfillment stages, in display order. The ordering is fixed and used by
/// the tracking progress bar only; status updates may jump anywhere.
pub const STATUS_FLOW: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::PickedUp,
    OrderStatus::InProgress,
    OrderStatus::Done,
    OrderStatus::Delivered,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    PickedUp,
    InProgress,
    Done,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Done => "done",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Indonesian label shown to customers and admins.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Menunggu",
            OrderStatus::PickedUp => "Dijemput",
            OrderStatus::InProgress => "Dikerjakan",
            OrderStatus::Done => "Selesai",
            OrderStatus::Delivered => "Dikirim",
        }
    }

    pub fn parse(value: &str) -> Option<OrderStatus> {
        STATUS_FLOW.iter().copied().find(|s| s.as_str() == value)
    }

    /// Resolve a stored status value. Absent and unrecognized values both
    /// render as `pending`, so legacy rows never break a view.
    pub fn from_stored(raw: Option<&str>) -> OrderStatus {
        raw.and_then(OrderStatus::parse).unwrap_or(OrderStatus::Pending)
    }

    /// Position of this status in the fulfillment flow, 0-based.
    pub fn index(&self) -> usize {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::PickedUp => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::Done => 3,
            OrderStatus::Delivered => 4,
        }
    }

    /// Per-stage display state for the tracking progress bar. Strictly
    /// monotonic left to right; a stage is never completed and active at
    /// the same time.
    pub fn progress(&self) -> [StageState; 5] {
        let current = self.index();
        let mut stages = [StageState::Upcoming; 5];
        for (index, stage) in stages.iter_mut().enumerate() {
            if index < current {
                *stage = StageState::Completed;
            } else if index == current {
                *stage = StageState::Active;
            }
        }
        stages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Completed,
    Active,
    Upcoming,
}

/// How the customer's mousepads reach us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PickupMethod {
    Pickup,
    SelfDeliver,
}

impl PickupMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickupMethod::Pickup => "pickup",
            PickupMethod::SelfDeliver => "self-deliver",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PickupMethod::Pickup => "Pickup",
            PickupMethod::SelfDeliver => "Antar Sendiri",
        }
    }
}

/// The `layanan` field as it exists in the wild: either a JSON-encoded
/// array string (how it is stored) or an already-decoded array. Decoding is
/// explicit and never fails a render; a value that cannot be decoded is
/// treated as a single-item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceList {
    Decoded(Vec<String>),
    Raw(String),
}

impl ServiceList {
    /// Encode a selection the way it is persisted.
    pub fn encode(items: &[String]) -> ServiceList {
        ServiceList::Raw(serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string()))
    }

    pub fn items(&self) -> Vec<String> {
        match self {
            ServiceList::Decoded(items) => items.clone(),
            ServiceList::Raw(raw) => serde_json::from_str::<Vec<String>>(raw)
                .unwrap_or_else(|_| vec![raw.clone()]),
        }
    }

    /// Comma-joined display form; an undecodable scalar renders verbatim.
    pub fn display(&self) -> String {
        self.items().join(", ")
    }
}

/// One customer cleaning-service request, as persisted. Wire names are the
/// API contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub status: Option<String>,
    pub nama_lengkap: String,
    pub nomor_telepon: String,
    pub email: Option<String>,
    pub layanan: ServiceList,
    pub jumlah_mousepad: u32,
    pub metode_pengambilan: String,
    pub alamat_pickup: Option<String>,
    pub catatan_tambahan: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Order {
    pub fn status(&self) -> OrderStatus {
        OrderStatus::from_stored(self.status.as_deref())
    }
}

/// Aggregate counts for the admin board, recomputed from the full order set
/// on every load. The three buckets partition the total: unrecognized and
/// absent statuses count as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> OrderStats {
        let mut stats = OrderStats {
            total: orders.len(),
            ..OrderStats::default()
        };
        for order in orders {
            match order.status() {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::PickedUp | OrderStatus::InProgress => stats.in_progress += 1,
                OrderStatus::Done | OrderStatus::Delivered => stats.completed += 1,
            }
        }
        stats
    }
}
