use super::*;

#[test]
fn payload_keys_match_input_names() {
    let payload = contact_payload("Олена", "+380501234567");
    assert_eq!(payload["name"], "Олена");
    assert_eq!(payload["phone"], "+380501234567");
    assert_eq!(payload.as_object().map(serde_json::Map::len), Some(2));
}

#[test]
fn empty_values_are_kept() {
    let payload = contact_payload("", "");
    assert_eq!(payload, serde_json::json!({ "name": "", "phone": "" }));
}

