//! In-memory page with browser-like `submit` and `input` dispatch.

use super::layout::{ControlSpec, IndicatorSpec, PageLayout};
use crate::domain::entities::DisplayStyle;
use crate::domain::form::{
    ControlHandle, ControlLocator, ControlTag, ControlType, FormView, IndicatorHandle,
    InputHandler, ObservableForm, SubmitDecision, SubmitHandler,
};
use crate::error::FormError;
use std::fmt;
use tracing::{debug, trace};

/// Name/value pairs a successful submission would send.
pub type FormData = Vec<(String, String)>;

/// Result of dispatching a `submit` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Default action ran; carries the submitted data.
    Submitted(FormData),
    /// A listener prevented the default action.
    Prevented,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

#[derive(Debug, Clone)]
struct Control {
    tag: ControlTag,
    kind: ControlType,
    name: Option<String>,
    value: String,
}

impl From<ControlSpec> for Control {
    fn from(spec: ControlSpec) -> Self {
        Self {
            tag: spec.tag,
            kind: spec.effective_kind(),
            name: spec.name,
            value: spec.value,
        }
    }
}

#[derive(Debug, Clone)]
struct Indicator {
    id: String,
    display: DisplayStyle,
}

impl From<IndicatorSpec> for Indicator {
    fn from(spec: IndicatorSpec) -> Self {
        Self {
            id: spec.id,
            display: spec.display,
        }
    }
}

/// Element state, kept apart from the listeners so handlers can borrow it
/// mutably while the listener list is being iterated.
#[derive(Debug, Clone, Default)]
struct Document {
    controls: Vec<Control>,
    indicators: Vec<Indicator>,
}

impl FormView for Document {
    fn locate_control(&self, locator: &ControlLocator) -> Option<ControlHandle> {
        self.controls
            .iter()
            .position(|c| locator.matches(c.tag, c.kind, c.name.as_deref()))
            .map(ControlHandle::new)
    }

    fn locate_indicator(&self, id: &str) -> Option<IndicatorHandle> {
        self.indicators
            .iter()
            .position(|i| i.id == id)
            .map(IndicatorHandle::new)
    }

    fn value(&self, control: ControlHandle) -> Option<&str> {
        self.controls
            .get(control.index())
            .map(|c| c.value.as_str())
    }

    fn display(&self, indicator: IndicatorHandle) -> Option<DisplayStyle> {
        self.indicators.get(indicator.index()).map(|i| i.display)
    }

    fn set_display(&mut self, indicator: IndicatorHandle, display: DisplayStyle) {
        if let Some(target) = self.indicators.get_mut(indicator.index()) {
            target.display = display;
        }
    }
}

#[derive(Default)]
struct Listeners {
    submit: Vec<SubmitHandler>,
    input: Vec<InputHandler>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("submit", &self.submit.len())
            .field("input", &self.input.len())
            .finish()
    }
}

/// A single-form page.
///
/// Events are dispatched synchronously: every listener runs to completion,
/// in registration order, before the dispatching call returns.
///
/// # Examples
///
/// ```
/// use form_guard::domain::form::ControlLocator;
/// use form_guard::infrastructure::page::{HtmlPage, SubmitOutcome};
///
/// let mut page = HtmlPage::signup_form();
/// page.fill(&ControlLocator::input_named("firstName"), "Jane").unwrap();
///
/// // No listeners yet: the form submits whatever it holds.
/// assert!(matches!(page.submit(), SubmitOutcome::Submitted(_)));
/// ```
#[derive(Debug, Default)]
pub struct HtmlPage {
    document: Document,
    listeners: Listeners,
}

impl HtmlPage {
    pub fn from_layout(layout: PageLayout) -> Self {
        Self {
            document: Document {
                controls: layout.controls.into_iter().map(Control::from).collect(),
                indicators: layout.indicators.into_iter().map(Indicator::from).collect(),
            },
            listeners: Listeners::default(),
        }
    }

    /// The standard product sign-up page.
    pub fn signup_form() -> Self {
        Self::from_layout(PageLayout::signup_form())
    }

    /// Handles of every control in the form, in document order.
    pub fn controls(&self) -> impl Iterator<Item = ControlHandle> + use<> {
        (0..self.document.controls.len()).map(ControlHandle::new)
    }

    /// Number of registered `submit` and `input` listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.submit.len() + self.listeners.input.len()
    }

    /// Display style of the indicator with the given id.
    pub fn indicator_display(&self, id: &str) -> Option<DisplayStyle> {
        self.document
            .locate_indicator(id)
            .and_then(|handle| self.document.display(handle))
    }

    /// Sets a control's value as the user would, then fires `input`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownControl`] if the handle is not part of this page.
    pub fn input(
        &mut self,
        control: ControlHandle,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let target = self
            .document
            .controls
            .get_mut(control.index())
            .ok_or(FormError::UnknownControl(control.index()))?;
        target.value = value.into();

        trace!(control = control.index(), "Dispatching input event");
        let document: &mut dyn FormView = &mut self.document;
        for handler in self.listeners.input.iter_mut() {
            handler(&mut *document, control);
        }

        Ok(())
    }

    /// Locates a control and types `value` into it.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingControl`] if nothing matches `locator`.
    pub fn fill(
        &mut self,
        locator: &ControlLocator,
        value: impl Into<String>,
    ) -> Result<ControlHandle, FormError> {
        let control = self
            .document
            .locate_control(locator)
            .ok_or_else(|| FormError::missing_control(locator.clone()))?;
        self.input(control, value)?;
        Ok(control)
    }

    /// Fires `submit`.
    ///
    /// All listeners run even after one has cancelled. The default action is
    /// prevented if any of them returned [`SubmitDecision::Cancel`].
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut prevented = false;
        let document: &mut dyn FormView = &mut self.document;
        for handler in self.listeners.submit.iter_mut() {
            if handler(&mut *document) == SubmitDecision::Cancel {
                prevented = true;
            }
        }

        if prevented {
            debug!("Form submission prevented");
            return SubmitOutcome::Prevented;
        }

        let data: FormData = self
            .document
            .controls
            .iter()
            .filter(|c| c.tag != ControlTag::Button)
            .filter_map(|c| c.name.clone().map(|name| (name, c.value.clone())))
            .collect();
        debug!(fields = data.len(), "Form submitted");
        SubmitOutcome::Submitted(data)
    }
}

impl FormView for HtmlPage {
    fn locate_control(&self, locator: &ControlLocator) -> Option<ControlHandle> {
        self.document.locate_control(locator)
    }

    fn locate_indicator(&self, id: &str) -> Option<IndicatorHandle> {
        self.document.locate_indicator(id)
    }

    fn value(&self, control: ControlHandle) -> Option<&str> {
        self.document.value(control)
    }

    fn display(&self, indicator: IndicatorHandle) -> Option<DisplayStyle> {
        self.document.display(indicator)
    }

    fn set_display(&mut self, indicator: IndicatorHandle, display: DisplayStyle) {
        self.document.set_display(indicator, display);
    }
}

impl ObservableForm for HtmlPage {
    fn on_submit(&mut self, handler: SubmitHandler) {
        self.listeners.submit.push(handler);
    }

    fn on_any_field_change(&mut self, handler: InputHandler) {
        self.listeners.input.push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_locate_returns_first_match_in_document_order() {
        let mut layout = PageLayout::signup_form();
        layout
            .controls
            .push(ControlSpec::input(ControlType::Email, "backupEmail"));
        let page = HtmlPage::from_layout(layout);

        let handle = page
            .locate_control(&ControlLocator::input_of_type(ControlType::Email))
            .unwrap();
        assert_eq!(handle.index(), 2);
    }

    #[test]
    fn test_untyped_button_is_a_submit_button() {
        let layout = PageLayout::from_json(r#"{ "controls": [ { "tag": "button" } ] }"#).unwrap();
        let page = HtmlPage::from_layout(layout);

        assert!(page.locate_control(&ControlLocator::submit_button()).is_some());
    }

    #[test]
    fn test_submit_without_listeners_sends_named_fields() {
        let mut page = HtmlPage::signup_form();
        page.fill(&ControlLocator::input_named("firstName"), "Jane")
            .unwrap();

        let outcome = page.submit();
        let SubmitOutcome::Submitted(data) = outcome else {
            panic!("expected submission");
        };
        assert_eq!(data.len(), 4);
        assert_eq!(data[0], ("firstName".to_string(), "Jane".to_string()));
    }

    #[test]
    fn test_submit_runs_every_listener_after_cancel() {
        let mut page = HtmlPage::signup_form();
        let calls = Rc::new(Cell::new(0));

        let first = calls.clone();
        page.on_submit(Box::new(move |_: &mut dyn FormView| {
            first.set(first.get() + 1);
            SubmitDecision::Cancel
        }));
        let second = calls.clone();
        page.on_submit(Box::new(move |_: &mut dyn FormView| {
            second.set(second.get() + 1);
            SubmitDecision::Proceed
        }));

        assert_eq!(page.submit(), SubmitOutcome::Prevented);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_input_updates_value_before_listeners_run() {
        let mut page = HtmlPage::signup_form();
        let seen = Rc::new(Cell::new(false));

        let flag = seen.clone();
        page.on_any_field_change(Box::new(
            move |view: &mut dyn FormView, control: ControlHandle| {
                flag.set(view.value(control) == Some("Doe"));
            },
        ));

        page.fill(&ControlLocator::input_named("lastName"), "Doe")
            .unwrap();
        assert!(seen.get());
    }

    #[test]
    fn test_input_unknown_handle() {
        let mut page = HtmlPage::signup_form();
        let result = page.input(ControlHandle::new(99), "x");
        assert!(matches!(result, Err(FormError::UnknownControl(99))));
    }

    #[test]
    fn test_fill_missing_control() {
        let mut page = HtmlPage::signup_form();
        let result = page.fill(&ControlLocator::input_named("phone"), "123");
        assert!(matches!(result, Err(FormError::MissingControl { .. })));
    }

    #[test]
    fn test_set_display_ignores_unknown_handle() {
        let mut page = HtmlPage::signup_form();
        page.set_display(IndicatorHandle::new(42), DisplayStyle::Block);

        assert_eq!(page.display(IndicatorHandle::new(42)), None);
    }

    #[test]
    fn test_indicator_display_by_id() {
        let mut page = HtmlPage::signup_form();
        let handle = page.locate_indicator("error-message").unwrap();
        page.set_display(handle, DisplayStyle::Block);

        assert_eq!(
            page.indicator_display("error-message"),
            Some(DisplayStyle::Block)
        );
        assert_eq!(page.indicator_display("missing"), None);
    }

    #[test]
    fn test_controls_lists_every_control() {
        let page = HtmlPage::signup_form();
        assert_eq!(page.controls().count(), 5);
        assert_eq!(page.listener_count(), 0);
    }
}
