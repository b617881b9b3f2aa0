//! Sign-up form validation service.

use crate::domain::email::EmailChecker;
use crate::domain::entities::{AllowList, DisplayStyle, FieldKind, ValidityReport};
use crate::domain::form::{
    ControlHandle, ControlLocator, FormView, IndicatorHandle, ObservableForm, SubmitDecision,
};
use crate::error::FormError;
use tracing::{debug, info, trace};

/// Handles of the four error indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSet {
    pub first_name: IndicatorHandle,
    pub last_name: IndicatorHandle,
    pub email: IndicatorHandle,
    pub url: IndicatorHandle,
}

impl IndicatorSet {
    pub fn get(&self, kind: FieldKind) -> IndicatorHandle {
        match kind {
            FieldKind::FirstName => self.first_name,
            FieldKind::LastName => self.last_name,
            FieldKind::Email => self.email,
            FieldKind::Url => self.url,
        }
    }

    /// Shows the indicator of every invalid field and hides the rest.
    pub fn show(&self, view: &mut dyn FormView, report: &ValidityReport) {
        for kind in FieldKind::ALL {
            view.set_display(
                self.get(kind),
                DisplayStyle::for_validity(report.field(kind)),
            );
        }
    }

    pub fn hide_all(&self, view: &mut dyn FormView) {
        for kind in FieldKind::ALL {
            view.set_display(self.get(kind), DisplayStyle::None);
        }
    }
}

/// Every element the validator needs, resolved once at installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormBindings {
    pub submit: ControlHandle,
    pub first_name: ControlHandle,
    pub last_name: ControlHandle,
    pub email: ControlHandle,
    pub url: ControlHandle,
    pub indicators: IndicatorSet,
}

impl FormBindings {
    pub fn control(&self, kind: FieldKind) -> ControlHandle {
        match kind {
            FieldKind::FirstName => self.first_name,
            FieldKind::LastName => self.last_name,
            FieldKind::Email => self.email,
            FieldKind::Url => self.url,
        }
    }
}

/// Validates the sign-up form and gates its submission.
///
/// Checks, evaluated independently for every field:
/// - **First/last name**: non-blank after trimming
/// - **Email**: accepted by the configured [`EmailChecker`]
/// - **URL**: non-blank after trimming, and its extracted domain is on the [`AllowList`]
pub struct FormValidator<E: EmailChecker> {
    allow_list: AllowList,
    email_checker: E,
}

impl<E: EmailChecker> FormValidator<E> {
    /// Creates a new validator.
    pub fn new(allow_list: AllowList, email_checker: E) -> Self {
        Self {
            allow_list,
            email_checker,
        }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Resolves the submit button, the four inputs and the four indicators.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingControl`] or [`FormError::MissingIndicator`]
    /// for the first element that cannot be found.
    pub fn bind<V: FormView + ?Sized>(view: &V) -> Result<FormBindings, FormError> {
        let control = |kind: FieldKind| {
            let locator = kind.locator();
            view.locate_control(&locator)
                .ok_or_else(|| FormError::missing_control(locator))
        };
        let indicator = |kind: FieldKind| {
            view.locate_indicator(kind.indicator_id())
                .ok_or_else(|| FormError::missing_indicator(kind.indicator_id()))
        };

        let submit_locator = ControlLocator::submit_button();
        let submit = view
            .locate_control(&submit_locator)
            .ok_or_else(|| FormError::missing_control(submit_locator))?;

        Ok(FormBindings {
            submit,
            first_name: control(FieldKind::FirstName)?,
            last_name: control(FieldKind::LastName)?,
            email: control(FieldKind::Email)?,
            url: control(FieldKind::Url)?,
            indicators: IndicatorSet {
                first_name: indicator(FieldKind::FirstName)?,
                last_name: indicator(FieldKind::LastName)?,
                email: indicator(FieldKind::Email)?,
                url: indicator(FieldKind::Url)?,
            },
        })
    }

    /// Returns true if `url` is non-blank and points at an allowed domain.
    pub fn is_url_allowed(&self, url: &str) -> bool {
        self.allow_list.accepts_url(url)
    }

    /// Evaluates every field without touching the indicators.
    pub fn evaluate(&self, view: &dyn FormView, bindings: &FormBindings) -> ValidityReport {
        let value = |kind: FieldKind| view.value(bindings.control(kind)).unwrap_or_default();

        let report = ValidityReport {
            first_name: !value(FieldKind::FirstName).trim().is_empty(),
            last_name: !value(FieldKind::LastName).trim().is_empty(),
            email: self.email_checker.is_valid_email(value(FieldKind::Email)),
            url: self.is_url_allowed(value(FieldKind::Url)),
        };

        debug!(
            first_name = report.first_name,
            last_name = report.last_name,
            email = report.email,
            url = report.url,
            "Evaluated form fields"
        );
        report
    }

    /// Evaluates every field and updates all four indicators.
    ///
    /// Returns true when the whole form is valid.
    pub fn check_input_validity(&self, view: &mut dyn FormView, bindings: &FormBindings) -> bool {
        let report = self.evaluate(&*view, bindings);
        bindings.indicators.show(view, &report);
        report.is_valid()
    }
}

impl<E: EmailChecker + 'static> FormValidator<E> {
    /// Wires the validator into `form`.
    ///
    /// Registers a `submit` listener that cancels submission of an invalid
    /// form, and an `input` listener that hides all four indicators whenever
    /// any control is edited.
    ///
    /// Elements are resolved before anything is registered, so a page that
    /// lacks one of them is left without any validation behavior.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingControl`] or [`FormError::MissingIndicator`]
    /// if the page does not contain the expected markup.
    pub fn install<F: ObservableForm>(self, form: &mut F) -> Result<FormBindings, FormError> {
        let bindings = Self::bind(&*form)?;
        let allowed_domains = self.allow_list.len();

        form.on_submit(Box::new(move |view: &mut dyn FormView| {
            if self.check_input_validity(view, &bindings) {
                info!("Form valid, submission allowed");
                SubmitDecision::Proceed
            } else {
                info!("Form invalid, submission prevented");
                SubmitDecision::Cancel
            }
        }));

        let indicators = bindings.indicators;
        form.on_any_field_change(Box::new(
            move |view: &mut dyn FormView, control: ControlHandle| {
                trace!(control = control.index(), "Hiding error indicators");
                indicators.hide_all(view);
            },
        ));

        debug!(allowed_domains, "Form validator installed");
        Ok(bindings)
    }
}
