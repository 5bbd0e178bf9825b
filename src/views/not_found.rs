use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{text_element, ElementBuilder};
use crate::router::Route;
use crate::views::nav::render_route_link;

pub fn render_not_found(path: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("view view-not-found")
        .child(text_element("h1", "Page not found")?)?
        .child(text_element("p", &format!("Nothing lives at {}.", path))?)?
        .child(render_route_link(Route::Home, "Back to home", "btn-primary")?)?
        .build())
}
