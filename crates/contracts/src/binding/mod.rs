//! Form-action bindings
//!
//! A binding ties one page trigger (a form submit or a button click) to one
//! HTTP call against the registry API and to the element that shows the
//! JSON response. Everything here is DOM-agnostic; the browser side only
//! supplies element values and writes the rendered text back.

pub mod dispatch;
pub mod endpoint;
pub mod payload;
pub mod render;
pub mod table;

use std::fmt;

pub use dispatch::{ActionOutcome, ActionRequest, OutcomeKind, RawResponse, ResponseArtifact, Transport};
pub use endpoint::EndpointTemplate;
pub use payload::RequestPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// Whether requests of this method carry the form payload as a JSON body
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DOM event that fires a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Submit,
    Click,
}

impl TriggerKind {
    pub fn event_name(&self) -> &'static str {
        match self {
            TriggerKind::Submit => "submit",
            TriggerKind::Click => "click",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBinding {
    /// Id of the form (submit) or button (click) element
    pub trigger_id: &'static str,
    pub trigger: TriggerKind,
    pub method: HttpMethod,
    pub endpoint: EndpointTemplate,
    /// Id of the element whose text receives the rendered response
    pub result_id: &'static str,
}

impl ActionBinding {
    pub fn form_submit(
        form_id: &'static str,
        method: HttpMethod,
        endpoint: EndpointTemplate,
        result_id: &'static str,
    ) -> Self {
        Self {
            trigger_id: form_id,
            trigger: TriggerKind::Submit,
            method,
            endpoint,
            result_id,
        }
    }

    pub fn button_click(
        button_id: &'static str,
        method: HttpMethod,
        endpoint: EndpointTemplate,
        result_id: &'static str,
    ) -> Self {
        Self {
            trigger_id: button_id,
            trigger: TriggerKind::Click,
            method,
            endpoint,
            result_id,
        }
    }

    /// Submit bindings clear their form after a successful response
    pub fn resets_form(&self) -> bool {
        self.trigger == TriggerKind::Submit
    }

    /// Whether the trigger form should be cleared once `outcome` is shown
    pub fn clears_form_after(&self, outcome: &ActionOutcome) -> bool {
        self.resets_form() && outcome.should_reset_form()
    }
}

impl fmt::Display for ActionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} -> {} {} -> #{}",
            self.trigger_id,
            self.trigger.event_name(),
            self.method,
            self.endpoint,
            self.result_id
        )
    }
}
