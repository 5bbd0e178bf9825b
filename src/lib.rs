// ============================================================================
// ENCRYPTION ANALYZER - FRONTEND SPA (RUST + WASM)
// ============================================================================
// - Router: tabla estática path -> vista + gloo-history
// - State: ruta activa en un ReactiveState
// - Views: funciones que construyen DOM
// - App: punto de montaje, una sola instancia por proceso
// ============================================================================

pub mod config;
pub mod router;
pub mod state;
mod dom;
mod views;
mod app;

use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
    static RENDER_SCHEDULED: Cell<bool> = Cell::new(false);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 {} - Rust + WASM ({})", CONFIG.app_title, CONFIG.environment);

    if let Err(e) = start() {
        log::error!("❌ [APP] Error iniciando la app: {:?}", e);
        return Err(e);
    }
    Ok(())
}

/// Crear, montar y registrar la única instancia de App
fn start() -> Result<(), JsValue> {
    if APP.with(|app_cell| app_cell.borrow().is_some()) {
        return Err(JsValue::from_str("App already mounted"));
    }

    let app = App::new(&CONFIG)?;
    app.render()?;
    log::info!("✅ [APP] Montada en #{}", CONFIG.mount_id);

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Ejecutar una operación sobre la App montada, logueando errores
fn with_app<F>(op: F)
where
    F: FnOnce(&App) -> Result<(), JsValue>,
{
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = op(app) {
                log::error!("❌ [APP] {:?}", e);
            }
        }
        None => log::warn!("⚠️ [APP] App no está inicializada"),
    });
}

/// Programar un re-render en el próximo tick. Varias llamadas seguidas
/// producen un solo render.
pub(crate) fn schedule_render() {
    if RENDER_SCHEDULED.with(|scheduled| scheduled.replace(true)) {
        return;
    }
    gloo_timers::callback::Timeout::new(0, || {
        RENDER_SCHEDULED.with(|scheduled| scheduled.set(false));
        rerender_app();
    })
    .forget();
}

/// Re-render completo de la app montada
pub fn rerender_app() {
    with_app(App::render);
}

/// Navegar desde JavaScript (equivalente a un click en un enlace interno)
#[wasm_bindgen]
pub fn navigate(path: &str) {
    with_app(|app| {
        app.navigate(path);
        Ok(())
    });
}

/// Título de la vista activa, o None si la app no está montada
#[wasm_bindgen]
pub fn current_route() -> Option<String> {
    APP.with(|app_cell| {
        app_cell
            .borrow()
            .as_ref()
            .map(|app| app.state().current_route().title().to_string())
    })
}
