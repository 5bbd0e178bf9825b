// ============================================================================
// NAV - Barra de navegación y enlaces internos
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::router::history::join_base;
use crate::router::{Route, ROUTE_ATTR};

/// Enlace interno: `href` real (con base) para abrir en pestaña nueva,
/// `data-route` para que el router lo intercepte.
pub fn render_route_link(route: Route, text: &str, class: &str) -> Result<Element, JsValue> {
    let path = route.path().unwrap_or("/");
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", &join_base(&CONFIG.base_path, path))?
        .attr(ROUTE_ATTR, path)?
        .text(text)
        .build())
}

/// Un enlace por entrada de la tabla; la ruta activa lleva la clase `active`
pub fn render_nav(active: Route) -> Result<Element, JsValue> {
    let links = Route::all()
        .map(|route| -> Result<Element, JsValue> {
            let class = if route == active { "nav-link active" } else { "nav-link" };
            let link = render_route_link(route, route.title(), class)?;
            if route == active {
                link.set_attribute("aria-current", "page")?;
            }
            Ok(link)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ElementBuilder::new("nav")?
        .class("app-nav")
        .children(links)?
        .build())
}
