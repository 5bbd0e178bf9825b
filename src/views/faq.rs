// ============================================================================
// FAQ - Preguntas frecuentes (datos embebidos en JSON)
// ============================================================================

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{text_element, ElementBuilder};

const FAQ_JSON: &str = include_str!("../../assets/faq.json");

#[derive(Debug, Clone, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

pub fn load_faq() -> Result<Vec<FaqEntry>, String> {
    serde_json::from_str(FAQ_JSON).map_err(|e| format!("Error parseando FAQ: {}", e))
}

pub fn render_faq() -> Result<Element, JsValue> {
    let entries = load_faq().map_err(|e| JsValue::from_str(&e))?;

    let mut list = ElementBuilder::new("dl")?.class("faq-list");
    for entry in &entries {
        list = list
            .child(text_element("dt", &entry.question)?)?
            .child(text_element("dd", &entry.answer)?)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("view view-faq")
        .child(text_element("h1", "Frequently asked questions")?)?
        .child(list.build())?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_faq_parses() {
        let entries = load_faq().expect("faq.json válido");
        assert!(!entries.is_empty());
        assert!(entries
            .iter()
            .all(|e| !e.question.trim().is_empty() && !e.answer.trim().is_empty()));
    }
}
