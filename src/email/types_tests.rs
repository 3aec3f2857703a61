//! Tests for email payload serialization.

use super::*;
use serde_json::json;

fn sender() -> Address {
    Address::new("noreply@example.com").with_name("Example Sender")
}

fn fully_populated() -> Email {
    Email::new(sender())
        .with_to(Address::new("alice@example.com").with_name("Alice"))
        .with_to("bob@example.com")
        .with_cc("carol@example.com")
        .with_bcc("audit@example.com")
        .with_subject("Your receipt")
        .with_text_content("Thanks for your order.")
        .with_html_content("<p>Thanks for your order.</p><img src=\"cid:logo\">")
        .with_template_id("receipt-v2")
        .with_template_value("order_id", 1042)
        .with_template_value("paid", true)
        .with_template_value("items", json!([{"sku": "A-1", "qty": 2}]))
        .with_template_value("coupon", serde_json::Value::Null)
        .with_attachment(
            Attachment::new("image/png")
                .with_file_name("logo.png")
                .with_content("iVBORw0KGgo=")
                .with_inline_id("logo"),
        )
        .with_header("X-Campaign", "spring")
        .with_reply_to("support@example.com")
        .with_send_time(1_735_689_600)
        .with_webhook_data("customer_id", "c-77")
        .with_tag("receipts")
        .with_tracking(
            TrackingSettings::new()
                .with_opens(true)
                .with_clicks(true)
                .with_unsubscribes(true)
                .with_unsubscribe_group_id(9),
        )
}

mod omission {
    use super::*;

    #[test]
    fn minimal_email_serializes_only_from() {
        let email = Email::new("noreply@example.com");

        let value = serde_json::to_value(&email).unwrap();

        assert_eq!(value, json!({"from": {"email": "noreply@example.com"}}));
    }

    #[test]
    fn address_without_name_omits_name() {
        let value = serde_json::to_value(Address::new("a@example.com")).unwrap();

        assert_eq!(value, json!({"email": "a@example.com"}));
    }

    #[test]
    fn attachment_always_sends_content_type() {
        let value = serde_json::to_value(Attachment::new("text/plain")).unwrap();

        assert_eq!(value, json!({"content_type": "text/plain"}));
    }

    #[test]
    fn default_tracking_serializes_to_empty_object() {
        let value = serde_json::to_value(TrackingSettings::default()).unwrap();

        assert_eq!(value, json!({}));
    }

    #[test]
    fn disabled_tracking_flags_are_omitted() {
        let tracking = TrackingSettings::new()
            .with_clicks(true)
            .with_unsubscribe_group_id(3);

        let value = serde_json::to_value(tracking).unwrap();

        assert_eq!(value, json!({"clicks": true, "unsubscribe_group_id": 3}));
    }

    #[test]
    fn no_nulls_for_unset_fields() {
        let body = serde_json::to_string(&Email::new(sender()).with_subject("Hi")).unwrap();

        assert!(!body.contains("null"));
        assert!(!body.contains("[]"));
        assert!(!body.contains("{}"));
    }
}

mod wire_names {
    use super::*;

    #[test]
    fn uses_snake_case_keys() {
        let value = serde_json::to_value(fully_populated()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "from",
            "to",
            "cc",
            "bcc",
            "subject",
            "text_content",
            "html_content",
            "template_id",
            "template_data",
            "attachments",
            "headers",
            "reply_to",
            "send_time",
            "webhook_data",
            "tag",
            "tracking",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 16);
    }

    #[test]
    fn nested_keys_are_snake_case() {
        let value = serde_json::to_value(fully_populated()).unwrap();

        assert_eq!(value["attachments"][0]["file_name"], "logo.png");
        assert_eq!(value["attachments"][0]["content_type"], "image/png");
        assert_eq!(value["attachments"][0]["inline_id"], "logo");
        assert_eq!(value["tracking"]["unsubscribe_group_id"], 9);
        assert_eq!(value["send_time"], 1_735_689_600_i64);
    }

    #[test]
    fn recipients_keep_insertion_order() {
        let value = serde_json::to_value(fully_populated()).unwrap();

        assert_eq!(value["to"][0]["email"], "alice@example.com");
        assert_eq!(value["to"][0]["name"], "Alice");
        assert_eq!(value["to"][1]["email"], "bob@example.com");
    }

    #[test]
    fn template_data_carries_arbitrary_shapes() {
        let value = serde_json::to_value(fully_populated()).unwrap();

        assert_eq!(
            value["template_data"],
            json!({
                "coupon": null,
                "items": [{"sku": "A-1", "qty": 2}],
                "order_id": 1042,
                "paid": true
            })
        );
    }

    #[test]
    fn request_envelope_wraps_emails() {
        let request = EmailRequest::new(vec![Email::new("a@example.com")]);

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value, json!({"emails": [{"from": {"email": "a@example.com"}}]}));
    }

    #[test]
    fn empty_request_still_sends_emails_key() {
        let body = serde_json::to_string(&EmailRequest::new(Vec::new())).unwrap();

        assert_eq!(body, r#"{"emails":[]}"#);
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn fully_populated_email_survives_round_trip() {
        let email = fully_populated();

        let body = serde_json::to_vec(&email).unwrap();
        let decoded: Email = serde_json::from_slice(&body).unwrap();

        assert_eq!(decoded, email);
    }

    #[test]
    fn minimal_email_decodes_with_defaults() {
        let decoded: Email =
            serde_json::from_str(r#"{"from":{"email":"noreply@example.com"}}"#).unwrap();

        assert_eq!(decoded, Email::new("noreply@example.com"));
    }

    #[test]
    fn equal_emails_serialize_identically() {
        let a = Email::new(sender())
            .with_header("X-B", "2")
            .with_header("X-A", "1");
        let b = Email::new(sender())
            .with_header("X-A", "1")
            .with_header("X-B", "2");

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

mod responses {
    use super::*;

    #[test]
    fn api_response_decodes_status() {
        let resp: ApiResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();

        assert_eq!(resp.status, "ok");
        assert!(resp.is_ok());
    }

    #[test]
    fn api_response_is_ok_ignores_case() {
        let resp = ApiResponse {
            status: "OK".to_string(),
        };

        assert!(resp.is_ok());
    }

    #[test]
    fn api_response_other_status_is_not_ok() {
        let resp = ApiResponse {
            status: "queued".to_string(),
        };

        assert!(!resp.is_ok());
    }

    #[test]
    fn api_response_ignores_unknown_fields() {
        let resp: ApiResponse =
            serde_json::from_str(r#"{"status":"ok","request_id":"r-1"}"#).unwrap();

        assert_eq!(resp.status, "ok");
    }

    #[test]
    fn api_response_without_status_decodes_empty() {
        let resp: ApiResponse = serde_json::from_str("{}").unwrap();

        assert_eq!(resp.status, "");
    }

    #[test]
    fn api_error_response_without_error_decodes_empty() {
        let resp: ApiErrorResponse = serde_json::from_str(r#"{"message":"x"}"#).unwrap();

        assert_eq!(resp.error, "");
    }

    #[test]
    fn api_error_response_decodes_message() {
        let resp: ApiErrorResponse = serde_json::from_str(r#"{"error":"invalid token"}"#).unwrap();

        assert_eq!(resp.error, "invalid token");
    }
}
