use super::*;

fn complete() -> FormFields {
    let mut fields = FormFields::default();
    fields.set(Field::Name, "Jane");
    fields.set(Field::Email, "jane@x.com");
    fields.set(Field::Service, "marketing");
    fields.set(Field::Message, "Need help");
    fields
}

// =============================================================
// Field
// =============================================================

#[test]
fn field_names_match_input_names() {
    let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["name", "email", "phone", "company", "service", "message"]);
}

#[test]
fn field_from_name_resolves_known_and_rejects_unknown() {
    for field in Field::ALL {
        assert_eq!(Field::from_name(field.name()), Some(field));
    }
    assert_eq!(Field::from_name("subject"), None);
}

#[test]
fn phone_and_company_are_optional() {
    let optional: Vec<_> = Field::ALL.into_iter().filter(|f| !f.is_required()).collect();
    assert_eq!(optional, [Field::Phone, Field::Company]);
}

// =============================================================
// ServiceCategory
// =============================================================

#[test]
fn service_slugs_resolve_back() {
    for service in ServiceCategory::ALL {
        assert_eq!(ServiceCategory::from_slug(service.slug()), Some(service));
    }
    assert_eq!(ServiceCategory::from_slug("catering"), None);
    assert_eq!(ServiceCategory::from_slug(""), None);
}

#[test]
fn service_labels_are_human_readable() {
    assert_eq!(ServiceCategory::SocialMedia.label(), "Social Media Management");
    assert_eq!(ServiceCategory::ItSecurity.label(), "IT Security");
}

// =============================================================
// FormFields
// =============================================================

#[test]
fn default_fields_are_empty() {
    assert!(FormFields::default().is_empty());
}

#[test]
fn last_write_per_field_wins_and_untouched_fields_stay_empty() {
    let mut fields = FormFields::default();
    fields.set(Field::Name, "J");
    fields.set(Field::Email, "j@x.com");
    fields.set(Field::Name, "Jane");
    fields.set(Field::Email, "jane@x.com");

    assert_eq!(fields.get(Field::Name), "Jane");
    assert_eq!(fields.get(Field::Email), "jane@x.com");
    for field in [Field::Phone, Field::Company, Field::Service, Field::Message] {
        assert_eq!(fields.get(field), "");
    }
}

#[test]
fn clear_resets_every_field() {
    let mut fields = complete();
    fields.set(Field::Phone, "555");
    fields.clear();
    assert_eq!(fields, FormFields::default());
}

#[test]
fn validate_accepts_required_only() {
    assert_eq!(complete().validate(), Ok(()));
}

#[test]
fn validate_lists_all_missing_required_fields_in_form_order() {
    let mut fields = FormFields::default();
    fields.set(Field::Email, "jane@x.com");
    fields.set(Field::Phone, "555");
    assert_eq!(
        fields.validate(),
        Err(FieldError::Missing(vec![Field::Name, Field::Service, Field::Message]))
    );
}

#[test]
fn validate_treats_whitespace_as_missing() {
    let mut fields = complete();
    fields.set(Field::Message, "   ");
    assert_eq!(fields.validate(), Err(FieldError::Missing(vec![Field::Message])));
}

#[test]
fn validate_rejects_malformed_email() {
    let mut fields = complete();
    fields.set(Field::Email, "jane.x.com");
    assert_eq!(fields.validate(), Err(FieldError::InvalidEmail));
}

#[test]
fn validate_rejects_service_outside_catalogue() {
    let mut fields = complete();
    fields.set(Field::Service, "catering");
    assert_eq!(fields.validate(), Err(FieldError::UnknownService("catering".to_owned())));
}

#[test]
fn email_shape_checks() {
    assert!(is_email_shaped("jane@x.com"));
    assert!(is_email_shaped("  jane@x.com "));
    assert!(!is_email_shaped(""));
    assert!(!is_email_shaped("@x.com"));
    assert!(!is_email_shaped("jane@"));
    assert!(!is_email_shaped("a@b@c"));
    assert!(!is_email_shaped("ja ne@x.com"));
}

#[test]
fn template_params_map_fields_to_template_names() {
    let mut fields = complete();
    fields.set(Field::Company, "Acme");
    let params = fields.template_params("sales@agency.test");

    assert_eq!(params.from_name, "Jane");
    assert_eq!(params.from_email, "jane@x.com");
    assert_eq!(params.phone, "");
    assert_eq!(params.company, "Acme");
    assert_eq!(params.service, "marketing");
    assert_eq!(params.message, "Need help");
    assert_eq!(params.to_email, "sales@agency.test");
}
