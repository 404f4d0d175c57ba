use super::*;

fn form(name: &str, email: &str) -> LeadForm {
    LeadForm { name: name.into(), email: email.into(), ..LeadForm::default() }
}

#[test]
fn complete_form_validates() {
    assert_eq!(form("Ann", "a@b.c").validate(), Ok(()));
}

#[test]
fn missing_name_is_reported() {
    let err = form("", "a@b.c").validate().unwrap_err();
    assert_eq!(err, LeadError::MissingRequired(vec![LeadField::Name]));
    assert_eq!(err.user_message(), "Заполни имя и email!");
}

#[test]
fn missing_both_lists_both_in_order() {
    let err = form("", "").validate().unwrap_err();
    assert_eq!(err, LeadError::MissingRequired(vec![LeadField::Name, LeadField::Email]));
}

#[test]
fn whitespace_only_fields_are_present() {
    assert_eq!(form(" ", "a@b.c").validate(), Ok(()));
    assert_eq!(form("Ann", "  ").validate(), Ok(()));
}

#[test]
fn optional_fields_are_not_required() {
    let f = LeadForm { phone: String::new(), message: String::new(), ..form("Ann", "a@b.c") };
    assert!(f.missing_required().is_empty());
}

#[test]
fn set_and_get_round_through_each_field() {
    let mut f = LeadForm::default();
    f.set(LeadField::Name, "Ann");
    f.set(LeadField::Email, "a@b.c");
    f.set(LeadField::Phone, "+7 900");
    f.set(LeadField::Message, "hi");
    assert_eq!(f.get(LeadField::Name), "Ann");
    assert_eq!(f.get(LeadField::Email), "a@b.c");
    assert_eq!(f.get(LeadField::Phone), "+7 900");
    assert_eq!(f.get(LeadField::Message), "hi");
}

#[test]
fn capture_keeps_fields_and_stamps_time() {
    let record = LeadRecord::capture(
        LeadForm { phone: "123".into(), message: "call me".into(), ..form("Ann", "a@b.c") },
        42,
    );
    assert_eq!(record.name, "Ann");
    assert_eq!(record.email, "a@b.c");
    assert_eq!(record.phone, "123");
    assert_eq!(record.message, "call me");
    assert_eq!(record.captured_at, 42);
}

#[test]
fn error_display_names_fields() {
    let err = LeadError::MissingRequired(vec![LeadField::Email]);
    assert_eq!(err.to_string(), "missing required lead fields: [Email]");
}
