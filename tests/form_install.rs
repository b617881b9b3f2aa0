mod common;

use form_guard::prelude::*;

fn install(layout: PageLayout) -> (HtmlPage, Result<FormBindings, FormError>) {
    let mut page = HtmlPage::from_layout(layout);
    let validator = FormValidator::new(AllowList::default(), HtmlEmailChecker::default());
    let result = validator.install(&mut page);
    (page, result)
}

#[test]
fn test_install_on_signup_form() {
    let (page, result) = install(PageLayout::signup_form());

    assert!(result.is_ok());
    assert_eq!(page.listener_count(), 2);
}

#[test]
fn test_install_missing_first_name_input() {
    let (page, result) = install(PageLayout::signup_form().without_control_named("firstName"));

    let err = result.unwrap_err();
    assert!(matches!(err, FormError::MissingControl { .. }));
    assert!(err.to_string().contains(r#"input[name="firstName"]"#));
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn test_install_missing_url_indicator() {
    let (mut page, result) = install(PageLayout::signup_form().without_indicator("error-message"));

    assert!(matches!(
        result,
        Err(FormError::MissingIndicator { ref id }) if id == "error-message"
    ));

    // Without validation the page submits whatever it holds
    assert!(page.submit().is_submitted());
}

#[test]
fn test_install_email_field_must_have_email_type() {
    let mut layout = PageLayout::signup_form();
    layout.controls[2] = ControlSpec::input(ControlType::Text, "email");

    let (_page, result) = install(layout);

    let err = result.unwrap_err();
    assert!(err.to_string().contains(r#"input[type="email"]"#));
}

#[test]
fn test_install_from_json_layout() {
    let layout = PageLayout::from_json(
        r#"{
            "controls": [
                { "tag": "input", "name": "firstName", "value": "Jane" },
                { "tag": "input", "name": "lastName", "value": "Doe" },
                { "tag": "input", "type": "email", "name": "email", "value": "jane@example.com" },
                { "tag": "input", "type": "url", "name": "url", "value": "https://www.asos.com/p" },
                { "tag": "button" }
            ],
            "indicators": [
                { "id": "first-name-error-message" },
                { "id": "last-name-error-message" },
                { "id": "email-error-message" },
                { "id": "error-message", "display": "block" }
            ]
        }"#,
    )
    .unwrap();

    let (mut page, result) = install(layout);
    assert!(result.is_ok());
    assert_eq!(
        page.indicator_display("error-message"),
        Some(DisplayStyle::Block)
    );

    // Prefilled values are valid: submitting re-evaluates and hides the indicator
    assert!(page.submit().is_submitted());
    assert!(common::shown_indicators(&page).is_empty());
}
