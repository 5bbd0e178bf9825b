// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::router::Route;
use crate::state::ReactiveState;

/// Ruta activa + path que la produjo (para mostrar en Not Found)
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub route: Route,
    pub path: String,
}

impl Location {
    pub fn from_path(path: &str) -> Self {
        Self {
            route: Route::resolve(path),
            path: path.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub location: ReactiveState<Location>,
}

impl AppState {
    pub fn new(initial_path: &str) -> Self {
        Self {
            location: ReactiveState::new(Location::from_path(initial_path)),
        }
    }

    pub fn current_route(&self) -> Route {
        self.location.value().route
    }

    /// Cambiar de ubicación. Devuelve false (sin notificar) si no cambia nada.
    pub fn set_path(&self, path: &str) -> bool {
        let next = Location::from_path(path);
        if self.location.value() == next {
            return false;
        }
        self.location.set(next);
        true
    }

    /// Suscribirse a cambios de estado para re-renderizar
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.location.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn initial_path_sets_active_route() {
        let state = AppState::new("/faq");
        assert_eq!(state.current_route(), Route::Faq);
        assert_eq!(state.location.value().path, "/faq");
    }

    #[test]
    fn set_path_notifies_only_on_change() {
        let state = AppState::new("/");
        let renders = Rc::new(Cell::new(0));
        {
            let renders = renders.clone();
            state.subscribe_to_changes(move || renders.set(renders.get() + 1));
        }

        assert!(!state.set_path("/"));
        assert!(state.set_path("/contact"));
        assert_eq!(state.current_route(), Route::Contact);
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn unknown_paths_keep_the_requested_path() {
        let state = AppState::new("/");
        assert!(state.set_path("/missing"));
        assert_eq!(state.current_route(), Route::NotFound);
        assert_eq!(state.location.value().path, "/missing");
        // Otro path desconocido también re-renderiza (cambia el texto mostrado)
        assert!(state.set_path("/also-missing"));
    }
}
