use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{text_element, ElementBuilder};
use crate::router::Route;
use crate::views::nav::render_route_link;

pub fn render_home() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("view view-home")
        .child(text_element("h1", &CONFIG.app_title)?)?
        .child(text_element(
            "p",
            "A statistical classifier that estimates which block cipher (AES, DES or Blowfish) produced a ciphertext.",
        )?)?
        .child(render_route_link(Route::About, "How it works", "btn-primary")?)?
        .build())
}
