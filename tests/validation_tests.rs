use mousespa_backend::dto::order_dto::CreateOrderRequest;
use mousespa_backend::model::order::PickupMethod;
use mousespa_backend::service::order_service::validate_new_order;
use mousespa_backend::util::error::ServiceError;
use mousespa_backend::util::validation::{
    clamp_quantity, is_blank, is_valid_email, is_valid_phone, parse_quantity,
};
use validator::Validate;

fn valid_request() -> CreateOrderRequest {
    CreateOrderRequest {
        nama_lengkap: "Budi Santoso".to_string(),
        nomor_telepon: "08123456789".to_string(),
        email: Some("budi@gmail.com".to_string()),
        layanan: vec!["Deep Cleaning".to_string()],
        jumlah_mousepad: 2,
        metode_pengambilan: PickupMethod::SelfDeliver,
        alamat_pickup: None,
        catatan_tambahan: None,
    }
}

fn assert_invalid(result: Result<(), ServiceError>, expected_message: &str) {
    match result {
        Err(ServiceError::InvalidInput(msg)) => assert_eq!(msg, expected_message),
        other => panic!("expected InvalidInput({expected_message:?}), got {other:?}"),
    }
}

#[test]
fn test_phone_digit_count_rules() {
    assert!(is_valid_phone("08123456789")); // 11 digits
    assert!(!is_valid_phone("123")); // 3 digits
    assert!(is_valid_phone("0812-3456-789")); // 11 digits after stripping
    assert!(is_valid_phone("+62 812 3456 7890")); // 12 digits after stripping
    assert!(!is_valid_phone("081234567890123456")); // 18 digits
    assert!(!is_valid_phone(""));
}

#[test]
fn test_email_shape_rules() {
    assert!(is_valid_email("a@b.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(is_valid_email("a.b@mail.co.id"));
}

#[test]
fn test_blank_detection() {
    assert!(is_blank(""));
    assert!(is_blank("   "));
    assert!(!is_blank(" x "));
}

#[test]
fn test_quantity_is_always_clamped() {
    assert_eq!(clamp_quantity(0), 1);
    assert_eq!(clamp_quantity(21), 20);
    assert_eq!(clamp_quantity(-5), 1);
    assert_eq!(clamp_quantity(15), 15);

    assert_eq!(parse_quantity("0"), 1);
    assert_eq!(parse_quantity("21"), 20);
    assert_eq!(parse_quantity("abc"), 1);
    assert_eq!(parse_quantity(""), 1);
    assert_eq!(parse_quantity(" 15 "), 15);
}

#[test]
fn test_valid_request_passes_both_layers() {
    let request = valid_request();
    assert!(request.validate().is_ok());
    assert!(validate_new_order(&request).is_ok());
}

#[test]
fn test_structural_validation_rejects_empty_fields() {
    let mut request = valid_request();
    request.nama_lengkap = String::new();
    assert!(request.validate().is_err());

    let mut request = valid_request();
    request.layanan = vec![];
    assert!(request.validate().is_err());
}

#[test]
fn test_blank_name_is_required() {
    let mut request = valid_request();
    request.nama_lengkap = "   ".to_string();
    assert_invalid(validate_new_order(&request), "Nama lengkap wajib diisi");
}

#[test]
fn test_short_phone_is_rejected() {
    let mut request = valid_request();
    request.nomor_telepon = "123".to_string();
    assert_invalid(
        validate_new_order(&request),
        "Nomor telepon tidak valid (10-15 digit)",
    );
}

#[test]
fn test_dashed_phone_is_accepted() {
    let mut request = valid_request();
    request.nomor_telepon = "0812-3456-789".to_string();
    assert!(validate_new_order(&request).is_ok());
}

#[test]
fn test_email_without_tld_is_rejected() {
    let mut request = valid_request();
    request.email = Some("a@b".to_string());
    assert_invalid(validate_new_order(&request), "Format email tidak valid");
}

#[test]
fn test_missing_email_is_fine() {
    let mut request = valid_request();
    request.email = None;
    assert!(validate_new_order(&request).is_ok());

    request.email = Some("".to_string());
    assert!(validate_new_order(&request).is_ok());
}

#[test]
fn test_blank_services_are_rejected() {
    let mut request = valid_request();
    request.layanan = vec!["   ".to_string()];
    assert_invalid(validate_new_order(&request), "Pilih minimal satu layanan");
}

#[test]
fn test_pickup_requires_address() {
    let mut request = valid_request();
    request.metode_pengambilan = PickupMethod::Pickup;
    request.alamat_pickup = None;
    assert_invalid(validate_new_order(&request), "Alamat pickup wajib diisi");

    request.alamat_pickup = Some("   ".to_string());
    assert_invalid(validate_new_order(&request), "Alamat pickup wajib diisi");

    request.alamat_pickup = Some("Jl. Sudirman No. 123".to_string());
    assert!(validate_new_order(&request).is_ok());
}

#[test]
fn test_self_deliver_needs_no_address() {
    let mut request = valid_request();
    request.metode_pengambilan = PickupMethod::SelfDeliver;
    request.alamat_pickup = None;
    assert!(validate_new_order(&request).is_ok());
}
