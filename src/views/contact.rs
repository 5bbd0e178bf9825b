use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{text_element, ElementBuilder};

const CONTACT_EMAIL: &str = "contact@encryption-analyzer.dev";

pub fn render_contact() -> Result<Element, JsValue> {
    let mail = ElementBuilder::new("a")?
        .attr("href", &format!("mailto:{}", CONTACT_EMAIL))?
        .text(CONTACT_EMAIL)
        .build();

    Ok(ElementBuilder::new("section")?
        .class("view view-contact")
        .child(text_element("h1", "Contact")?)?
        .child(text_element("p", "Questions, bug reports or datasets to share:")?)?
        .child(mail)?
        .build())
}
