#![allow(dead_code)]

use form_guard::prelude::*;

pub const VALID: [&str; 4] = ["Jane", "Doe", "jane@example.com", "https://www.asos.com/prd/123"];

pub fn installed_page() -> (HtmlPage, FormBindings) {
    installed_page_with(PageLayout::signup_form(), AllowList::default())
}

pub fn installed_page_with(layout: PageLayout, allow_list: AllowList) -> (HtmlPage, FormBindings) {
    let mut page = HtmlPage::from_layout(layout);
    let validator = FormValidator::new(allow_list, HtmlEmailChecker::default());
    let bindings = validator.install(&mut page).unwrap();
    (page, bindings)
}

/// Types each value into its field, firing one `input` event per field.
pub fn fill(page: &mut HtmlPage, bindings: &FormBindings, values: [&str; 4]) {
    for (kind, value) in FieldKind::ALL.into_iter().zip(values) {
        page.input(bindings.control(kind), value).unwrap();
    }
}

/// Fields whose error indicator is currently shown.
pub fn shown_indicators(page: &HtmlPage) -> Vec<FieldKind> {
    FieldKind::ALL
        .into_iter()
        .filter(|kind| {
            page.indicator_display(kind.indicator_id())
                .is_some_and(|display| display.is_shown())
        })
        .collect()
}
