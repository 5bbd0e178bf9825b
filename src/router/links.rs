// ============================================================================
// LINKS - Intercepción de clicks en enlaces internos
// ============================================================================
// Un solo listener delegado en document: los enlaces con `data-route` se
// navegan con el historial de la app en lugar de recargar la página.
// ============================================================================

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use crate::dom::document;
use crate::router::history::AppHistory;

/// Atributo que marca un enlace como navegación interna
pub const ROUTE_ATTR: &str = "data-route";

/// Registrar el listener delegado. Se desregistra al soltar el EventListener.
pub fn intercept_links(history: AppHistory) -> Result<EventListener, JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    // No pasivo: hace falta preventDefault
    let listener = EventListener::new_with_options(
        &doc,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(e) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            // Dejar pasar ctrl/cmd/shift-click y botones distintos del principal
            if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
                return;
            }
            let Some(path) = route_target(e) else {
                return;
            };
            e.prevent_default();
            history.push(&path);
        },
    );
    Ok(listener)
}

/// Path del enlace interno más cercano al target del click
fn route_target(e: &MouseEvent) -> Option<String> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let link = target.closest(&format!("[{}]", ROUTE_ATTR)).ok()??;
    link.get_attribute(ROUTE_ATTR)
}
