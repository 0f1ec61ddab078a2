use super::*;

fn sample_config() -> EmailJsConfig {
    EmailJsConfig {
        service_id: "service_abc".to_owned(),
        template_id: "template_xyz".to_owned(),
        public_key: "pk_123".to_owned(),
        to_email: "sales@agency.test".to_owned(),
        api_url: quote_flow::emailjs::DEFAULT_API_URL.to_owned(),
    }
}

#[test]
fn meta_selector_quotes_the_name() {
    assert_eq!(meta_selector("emailjs-service-id"), "meta[name=\"emailjs-service-id\"]");
}

#[test]
fn rejected_message_includes_status_and_body() {
    assert_eq!(rejected_message(400, "The user ID is invalid"), "email service responded 400: The user ID is invalid");
    assert_eq!(rejected_message(503, "  "), "email service responded 503");
}

#[test]
fn document_config_is_missing_outside_browser() {
    assert_eq!(
        config_from_document(),
        Err(ConfigError::Missing { var: META_SERVICE_ID.to_owned() })
    );
}

#[test]
fn unconfigured_transport_fails_with_config_reason() {
    let transport = EmailJsTransport::new(Err(ConfigError::Missing { var: META_PUBLIC_KEY.to_owned() }));
    let err = transport.config().unwrap_err();
    assert!(err.to_string().contains(META_PUBLIC_KEY));
}

#[test]
fn configured_transport_exposes_config() {
    let transport = EmailJsTransport::new(Ok(sample_config()));
    assert_eq!(transport.config(), Ok(&sample_config()));
}
