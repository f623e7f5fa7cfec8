//! Acceptance tests for the normalization rules, covering the accepted
//! shapes, the NANP structural checks, and extension-marker handling.

use phonedupe::numbers::{dedupe_lines, normalize, normalize_opt, OrderMode, RejectReason};

fn canonical(raw: &str) -> String {
    normalize(raw)
        .unwrap_or_else(|reason| panic!("{raw:?} should normalize, got {reason}"))
        .into_string()
}

#[test]
fn test_formatted_area_code_number() {
    assert_eq!(canonical("(415) 555-0123"), "+14155550123");
}

#[test]
fn test_country_coded_eleven_digits() {
    assert_eq!(canonical("14155550123"), "+14155550123");
}

#[test]
fn test_plus_prefixed_with_spaces() {
    assert_eq!(canonical("+1 415 555 0123"), "+14155550123");
}

#[test]
fn test_leading_zero_area_code_rejected() {
    assert_eq!(normalize("0123456789"), Err(RejectReason::InvalidAreaCode));
}

#[test]
fn test_n11_office_code_rejected() {
    assert_eq!(normalize("4159110123"), Err(RejectReason::N11Reserved));
    assert_eq!(normalize("4154110123"), Err(RejectReason::N11Reserved));
}

#[test]
fn test_three_formats_dedupe_to_one_entry() {
    let lines = ["(415) 555-0123", "415-555-0123", "4155550123"];
    let (numbers, stats) = dedupe_lines(&lines, OrderMode::Insertion);
    let out: Vec<&str> = numbers.iter().map(|n| n.as_str()).collect();
    assert_eq!(out, ["+14155550123"]);
    assert_eq!(stats.valid, 3);
    assert_eq!(stats.unique, 1);
}

#[test]
fn test_all_shapes_agree_on_canonical_output() {
    let body = "4155550123";
    let bare = canonical(body);
    assert_eq!(bare, canonical(&format!("1{body}")));
    assert_eq!(bare, canonical(&format!("+1{body}")));
}

#[test]
fn test_shape_rules_apply_to_every_accepted_shape() {
    // A body failing validation is rejected no matter how it arrived.
    for body in ["0155550123", "4150550123", "4155110123"] {
        assert!(normalize(body).is_err(), "{body} accepted bare");
        assert!(normalize(&format!("1{body}")).is_err(), "{body} accepted with 1");
        assert!(
            normalize(&format!("+1{body}")).is_err(),
            "{body} accepted with +1"
        );
    }
}

#[test]
fn test_extension_markers_truncate() {
    assert_eq!(canonical("415-555-0123 ext 99"), "+14155550123");
    assert_eq!(canonical("415-555-0123 x 99"), "+14155550123");
    assert_eq!(canonical("415-555-0123#99"), "+14155550123");
}

#[test]
fn test_everything_after_first_marker_is_discarded() {
    // The discarded tail may itself be garbage or more markers.
    assert_eq!(canonical("4155550123 # ext x ###"), "+14155550123");
}

#[test]
fn test_boolean_surface() {
    assert!(normalize_opt("4155550123").is_some());
    assert!(normalize_opt("garbage").is_none());
}
