// ============================================================================
// ROUTER MODULE - Tabla de rutas + historial del navegador
// ============================================================================

pub mod route;
pub mod history;
pub mod links;

pub use route::*;
pub use history::AppHistory;
pub use links::ROUTE_ATTR;
