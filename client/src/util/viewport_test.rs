use super::*;

#[test]
fn fragment_hrefs_resolve_to_ids() {
    assert_eq!(anchor_target("#systems"), Some("systems"));
    assert_eq!(anchor_target("#faq"), Some("faq"));
}

#[test]
fn bare_hash_and_external_links_are_ignored() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://example.com/#top"), None);
    assert_eq!(anchor_target("/page#section"), None);
}

#[test]
fn reveal_keys_are_distinct() {
    assert_eq!(reveal_key(0), "reveal-0");
    assert_ne!(reveal_key(1), reveal_key(2));
}
