//! FormActionBinder: attaches one DOM listener per action binding.
//!
//! Each listener owns its element handles and spawns one local future per
//! trigger. There is no cancellation: when a trigger fires again before the
//! previous response arrives, whichever response settles last stays on
//! screen.

pub mod transport;

use std::rc::Rc;

use contracts::binding::dispatch::run_binding;
use contracts::binding::render::render_error;
use contracts::binding::{ActionBinding, EndpointTemplate, HttpMethod, TriggerKind};
use contracts::error::BindingError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlFormElement};

use crate::shared::dom;
use transport::GlooTransport;

/// Attach every binding in `bindings`, returns how many were attached
///
/// A binding whose elements are missing is logged and skipped; the rest are
/// still attached.
pub fn bind_all(bindings: &[ActionBinding], base: &str) -> usize {
    let base: Rc<str> = Rc::from(base);
    let mut attached = 0;

    for binding in bindings {
        let result = match binding.trigger {
            TriggerKind::Submit => bind_form_submit(
                binding.trigger_id,
                binding.method,
                binding.endpoint.clone(),
                binding.result_id,
                base.clone(),
            ),
            TriggerKind::Click => bind_button_click(
                binding.trigger_id,
                binding.method,
                binding.endpoint.clone(),
                binding.result_id,
                base.clone(),
            ),
        };

        match result {
            Ok(()) => {
                log::debug!("Bound {}", binding);
                attached += 1;
            }
            Err(e) => log::error!("Failed to bind {}: {}", binding, e),
        }
    }

    attached
}

/// On submit: send the form's named fields as JSON, show the response and
/// clear the form if the server accepted it
pub fn bind_form_submit(
    form_id: &'static str,
    method: HttpMethod,
    endpoint: EndpointTemplate,
    result_id: &'static str,
    base: Rc<str>,
) -> Result<(), BindingError> {
    let document = dom::document()?;
    let form: HtmlFormElement = dom::element_as(&document, form_id, "form")?;
    let result = dom::element(&document, result_id)?;
    let binding = Rc::new(ActionBinding::form_submit(form_id, method, endpoint, result_id));

    let target = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();

        // Read synchronously: the values must be the ones present at submit time
        let payload = match dom::form_payload(&target) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("{}: {}", binding, e);
                dom::show_text(&result, &render_error(&e));
                return;
            }
        };

        let form = target.clone();
        let result = result.clone();
        let binding = binding.clone();
        let base = base.clone();
        spawn_local(async move {
            let outcome =
                run_binding(&GlooTransport, &binding, &base, dom::input_value, Some(&payload)).await;
            dom::show_text(&result, &outcome.text);
            if binding.clears_form_after(&outcome) {
                form.reset();
            }
        });
    }) as Box<dyn FnMut(Event)>);

    listen(&form, form_id, TriggerKind::Submit, on_submit)
}

/// On click: resolve path parameters from their inputs, send a bodiless
/// request and show the response
pub fn bind_button_click(
    button_id: &'static str,
    method: HttpMethod,
    endpoint: EndpointTemplate,
    result_id: &'static str,
    base: Rc<str>,
) -> Result<(), BindingError> {
    let document = dom::document()?;
    let button = dom::element(&document, button_id)?;
    let result = dom::element(&document, result_id)?;

    // Parameter inputs are read at click time, but must exist from the start
    for id in endpoint.param_ids() {
        dom::element(&document, id)?;
    }

    let binding = Rc::new(ActionBinding::button_click(button_id, method, endpoint, result_id));

    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        let result = result.clone();
        let binding = binding.clone();
        let base = base.clone();
        spawn_local(async move {
            let outcome = run_binding(&GlooTransport, &binding, &base, dom::input_value, None).await;
            dom::show_text(&result, &outcome.text);
        });
    }) as Box<dyn FnMut(Event)>);

    listen(&button, button_id, TriggerKind::Click, on_click)
}

fn listen(
    target: &Element,
    id: &str,
    trigger: TriggerKind,
    handler: Closure<dyn FnMut(Event)>,
) -> Result<(), BindingError> {
    target
        .add_event_listener_with_callback(trigger.event_name(), handler.as_ref().unchecked_ref())
        .map_err(|e| BindingError::Listener {
            id: id.to_string(),
            event: trigger.event_name(),
            message: format!("{:?}", e),
        })?;
    // Listeners live as long as the page
    handler.forget();
    Ok(())
}
