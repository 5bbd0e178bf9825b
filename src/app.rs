// ============================================================================
// APP - Raíz de la aplicación: punto de montaje + estado + router
// ============================================================================

use gloo_events::EventListener;
use gloo_history::HistoryListener;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{append_child, clear_children, get_element_by_id, set_document_title};
use crate::router::{links, AppHistory};
use crate::state::AppState;
use crate::views::render_app;

/// Aplicación principal (una sola instancia por proceso, ver lib.rs)
pub struct App {
    state: AppState,
    root: Element,
    history: AppHistory,
    app_title: String,
    // Los listeners viven lo mismo que la App
    _history_listener: HistoryListener,
    _link_listener: EventListener,
}

impl App {
    /// Localizar el punto de montaje, resolver la ruta inicial y
    /// engancharse al historial
    pub fn new(config: &AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id(&config.mount_id).ok_or_else(|| {
            JsValue::from_str(&format!("No #{} element found", config.mount_id))
        })?;

        let history = AppHistory::new(&config.base_path);
        let initial_path = history.current_path();
        let state = AppState::new(&initial_path);
        log::info!(
            "🧭 [ROUTER] Ruta inicial {} -> {}",
            initial_path,
            state.current_route()
        );

        // Re-render batcheado ante cualquier cambio de ubicación
        state.subscribe_to_changes(crate::schedule_render);

        // push propios y back/forward actualizan la ruta activa
        let history_listener = {
            let state = state.clone();
            history.listen(move |path| {
                if state.set_path(&path) {
                    log::info!("🧭 [ROUTER] {} -> {}", path, state.current_route());
                }
            })
        };
        let link_listener = links::intercept_links(history.clone())?;

        Ok(Self {
            state,
            root,
            history,
            app_title: config.app_title.clone(),
            _history_listener: history_listener,
            _link_listener: link_listener,
        })
    }

    /// Renderizar aplicación (reemplaza todo el contenido del punto de montaje)
    pub fn render(&self) -> Result<(), JsValue> {
        let route = self.state.current_route();
        log::debug!("🎬 [RENDER] {}", route);

        mount_view(&self.root, || render_app(&self.state))?;
        set_document_title(&format!("{} · {}", route.title(), self.app_title));
        Ok(())
    }

    /// Navegación interna. Ir a la ubicación actual no agrega entrada al historial.
    pub fn navigate(&self, path: &str) {
        if !self.history.push(path) {
            log::debug!("🧭 [ROUTER] Ya en {}, navegación ignorada", path);
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Construir la vista y solo entonces reemplazar el contenido del punto de
/// montaje: si la construcción falla, el árbol anterior se conserva.
fn mount_view<F>(root: &Element, build: F) -> Result<(), JsValue>
where
    F: FnOnce() -> Result<Element, JsValue>,
{
    let view = build()?;
    clear_children(root);
    append_child(root, &view)
}
