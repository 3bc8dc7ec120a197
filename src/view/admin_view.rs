use crate::model::order::{Order, OrderStats};
use crate::util::escape::escape_html;

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// `d Mon yyyy` with Indonesian month abbreviations. Unparseable values
/// render verbatim (escaped) instead of breaking the board.
pub fn format_date_short(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(date) => {
            use chrono::Datelike;
            format!(
                "{} {} {}",
                date.day(),
                MONTHS_SHORT[date.month0() as usize],
                date.year()
            )
        }
        Err(_) => escape_html(raw),
    }
}

fn render_stats_cards(stats: &OrderStats) -> String {
    format!(
        concat!(
            r#"<section class="stats">"#,
            r#"<div class="stat-card"><span class="stat-value">{total}</span><span class="stat-label">Total Pesanan</span></div>"#,
            r#"<div class="stat-card"><span class="stat-value">{pending}</span><span class="stat-label">Menunggu</span></div>"#,
            r#"<div class="stat-card"><span class="stat-value">{in_progress}</span><span class="stat-label">Diproses</span></div>"#,
            r#"<div class="stat-card"><span class="stat-value">{completed}</span><span class="stat-label">Selesai</span></div>"#,
            "</section>"
        ),
        total = stats.total,
        pending = stats.pending,
        in_progress = stats.in_progress,
        completed = stats.completed,
    )
}

fn render_order_row(order: &Order) -> String {
    let status = order.status();
    let services = order
        .layanan
        .items()
        .iter()
        .map(|s| format!(r#"<span class="layanan-pill">{}</span>"#, escape_html(s)))
        .collect::<String>();
    let date = order
        .created_at
        .as_deref()
        .map(format_date_short)
        .unwrap_or_else(|| "-".to_string());

    format!(
        concat!(
            "<tr>",
            "<td><strong>#{id}</strong></td>",
            "<td>{name}</td>",
            "<td>{phone}</td>",
            r#"<td><div class="layanan-list">{services}</div></td>"#,
            "<td>{quantity}</td>",
            "<td>{method}</td>",
            r#"<td><span class="status-badge {status_class}">{status_label}</span></td>"#,
            "<td>{date}</td>",
            "</tr>"
        ),
        id = order.id,
        name = escape_html(&order.nama_lengkap),
        phone = escape_html(&order.nomor_telepon),
        services = services,
        quantity = order.jumlah_mousepad,
        method = escape_html(&order.metode_pengambilan),
        // The class comes from the enum, never from stored text.
        status_class = status.as_str(),
        status_label = status.label(),
        date = date,
    )
}

pub fn render_orders_table(orders: &[Order]) -> String {
    if orders.is_empty() {
        return r#"<p class="no-orders">Belum ada pesanan</p>"#.to_string();
    }

    let rows: String = orders.iter().map(render_order_row).collect();
    format!(
        concat!(
            r#"<table class="orders-table">"#,
            "<thead><tr>",
            "<th>ID</th><th>Nama</th><th>Telepon</th><th>Layanan</th>",
            "<th>Jumlah</th><th>Metode</th><th>Status</th><th>Tanggal</th>",
            "</tr></thead>",
            "<tbody>{rows}</tbody>",
            "</table>"
        ),
        rows = rows
    )
}

/// Full admin board document: stat cards plus the orders table.
pub fn render_admin_page(orders: &[Order], stats: &OrderStats) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="id">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            "<title>MouseSpa Admin</title>",
            "</head>",
            "<body>",
            "<h1>Dashboard Admin MouseSpa</h1>",
            "{stats}",
            "{table}",
            "</body>",
            "</html>"
        ),
        stats = render_stats_cards(stats),
        table = render_orders_table(orders),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::order::ServiceList;

    fn order(name: &str, status: Option<&str>) -> Order {
        Order {
            id: 1,
            status: status.map(str::to_string),
            nama_lengkap: name.to_string(),
            nomor_telepon: "08123456789".to_string(),
            email: None,
            layanan: ServiceList::encode(&["Deep Cleaning".to_string()]),
            jumlah_mousepad: 1,
            metode_pengambilan: "pickup".to_string(),
            alamat_pickup: Some("Jl. Sudirman No. 1".to_string()),
            catatan_tambahan: None,
            created_at: Some("2025-03-05T10:00:00+00:00".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short("2025-03-05T10:00:00+00:00"), "5 Mar 2025");
        assert_eq!(format_date_short("2025-08-17T00:00:00+00:00"), "17 Agu 2025");
    }

    #[test]
    fn test_format_date_short_falls_back_verbatim() {
        assert_eq!(format_date_short("kemarin"), "kemarin");
    }

    #[test]
    fn test_row_escapes_customer_fields() {
        let row = render_order_row(&order("<script>alert(1)</script>", None));
        assert!(row.contains("&lt;script&gt;"));
        assert!(!row.contains("<script>alert"));
    }

    #[test]
    fn test_unknown_status_renders_pending_label() {
        let row = render_order_row(&order("Budi", Some("teleported")));
        assert!(row.contains("Menunggu"));
        assert!(row.contains(r#"status-badge pending"#));
    }

    #[test]
    fn test_empty_list_placeholder() {
        let html = render_orders_table(&[]);
        assert!(html.contains("Belum ada pesanan"));
        assert!(!html.contains("<table"));
    }
}
