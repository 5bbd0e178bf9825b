use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{text_element, ElementBuilder};

/// Cifrados que el modelo distingue
const ALGORITHMS: [&str; 3] = ["AES", "DES", "Blowfish"];

pub fn render_about() -> Result<Element, JsValue> {
    let algorithms = ALGORITHMS
        .iter()
        .map(|name| text_element("li", name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ElementBuilder::new("section")?
        .class("view view-about")
        .child(text_element("h1", "About")?)?
        .child(text_element(
            "p",
            "The analyzer extracts statistical features from a ciphertext (entropy, \
             compression ratio, Fourier and wavelet summaries, Markov transitions) \
             and feeds them to a trained classifier.",
        )?)?
        .child(text_element("p", "Supported algorithms:")?)?
        .child(ElementBuilder::new("ul")?.children(algorithms)?.build())?
        .build())
}
