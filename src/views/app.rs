// ============================================================================
// APP VIEW - Layout (header + nav) y despacho de la vista activa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{text_element, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::views::{
    render_about, render_contact, render_faq, render_home, render_nav, render_not_found,
};

/// Renderizar la vista de una ruta
pub fn render_view(route: Route, path: &str) -> Result<Element, JsValue> {
    match route {
        Route::Home => render_home(),
        Route::About => render_about(),
        Route::Faq => render_faq(),
        Route::Contact => render_contact(),
        Route::NotFound => render_not_found(path),
    }
}

/// Renderizar aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let location = state.location.value();

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(text_element("span", &CONFIG.app_title)?)?
        .child(render_nav(location.route)?)?
        .build();

    let main = ElementBuilder::new("main")?
        .class("app-main")
        .child(render_view(location.route, &location.path)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-layout")
        .child(header)?
        .child(main)?
        .build())
}
