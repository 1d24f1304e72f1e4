use super::*;

fn ivan() -> LeadRequest {
    LeadRequest { name: "Ivan".into(), email: "i@x.com".into(), phone: "123".into(), message: "hi".into() }
}

#[test]
fn buyer_from_lead_matches_crm_shape() {
    let buyer = BuyerRequest::from_lead(&ivan());
    let value = serde_json::to_value(&buyer).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "title": "Лид с сайта (Ivan)",
            "description": "hi",
            "contact": { "name": "Ivan", "email": "i@x.com", "phone": "123" }
        })
    );
}

#[test]
fn lead_title_keeps_name_verbatim() {
    assert_eq!(lead_title("  Олена "), "Лид с сайта (  Олена )");
    assert_eq!(lead_title(""), "Лид с сайта ()");
}

#[test]
fn lead_request_missing_fields_default_to_empty() {
    let lead: LeadRequest = serde_json::from_str(r#"{"name":"Ivan"}"#).unwrap();
    assert_eq!(lead.name, "Ivan");
    assert!(lead.email.is_empty());
    assert!(lead.phone.is_empty());
    assert!(lead.message.is_empty());
}

#[test]
fn crm_error_display_includes_status() {
    let err = CrmError::Rejected { status: 422, body: "bad".into() };
    assert_eq!(err.to_string(), "CRM rejected lead: status 422");
}
