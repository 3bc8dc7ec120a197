/// Field-level rules shared by the order intake form and the create
/// endpoint. These mirror what the form shows inline, so the messages built
/// on top of them must stay in sync with the UI copy.

/// Required-field check: whitespace-only input does not count.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `local@domain.tld`: an `@` with non-empty, whitespace-free segments and a
/// `.` inside the domain with non-empty sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Phone numbers are accepted in any punctuation style; only the digit count
/// matters. Valid when 10 to 15 digits remain after stripping.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (10..=15).contains(&digits)
}

/// Quantity is clamped, never rejected.
pub fn clamp_quantity(value: i64) -> u32 {
    value.clamp(1, 20) as u32
}

/// Free-text quantity input: non-numeric parses to 1, everything else is
/// clamped to [1, 20].
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .map(clamp_quantity)
        .unwrap_or(1)
}
