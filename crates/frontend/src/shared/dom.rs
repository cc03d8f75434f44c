//! Element lookups and form reading on the live document.

use contracts::binding::RequestPayload;
use contracts::error::{ActionError, BindingError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FormData, HtmlFormElement, HtmlInputElement};

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn document() -> Result<Document, BindingError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BindingError::MissingElement("document".to_string()))
}

pub fn element(document: &Document, id: &str) -> Result<Element, BindingError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindingError::MissingElement(id.to_string()))
}

/// Element by id, checked against the expected DOM interface
pub fn element_as<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, BindingError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| BindingError::WrongElementKind {
            id: id.to_string(),
            expected,
        })
}

/// Current value of an `<input>`; `None` if it is missing or not an input
pub fn input_value(id: &str) -> Option<String> {
    let document = document().ok()?;
    element_as::<HtmlInputElement>(&document, id, "input")
        .ok()
        .map(|input| input.value())
}

/// Named fields of `form` in document order
///
/// Same entries the browser would submit. Non-text values (file inputs) are
/// skipped.
pub fn form_payload(form: &HtmlFormElement) -> Result<RequestPayload, ActionError> {
    let read_error = |e: JsValue| ActionError::Encode(format!("cannot read form: {}", js_error(e)));

    let data = FormData::new_with_form(form).map_err(read_error)?;
    let entries = js_sys::try_iter(&data)
        .map_err(read_error)?
        .ok_or_else(|| ActionError::Encode("form data is not iterable".to_string()))?;

    let mut payload = RequestPayload::new();
    for entry in entries {
        let pair: js_sys::Array = entry.map_err(read_error)?.unchecked_into();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            payload.insert(name, value);
        }
    }
    Ok(payload)
}

pub fn show_text(target: &Element, text: &str) {
    target.set_text_content(Some(text));
}
