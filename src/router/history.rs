// ============================================================================
// HISTORY - Navegación sobre gloo-history (BrowserHistory) + base path
// ============================================================================

use gloo_history::{BrowserHistory, History, HistoryListener};
use crate::router::route::normalize_path;

/// Quitar el base path de un pathname del navegador (sin distinguir mayúsculas).
/// Si el pathname no está bajo el base, se devuelve tal cual.
pub fn strip_base(base: &str, pathname: &str) -> String {
    if base == "/" {
        return pathname.to_string();
    }
    let under_base = pathname
        .get(..base.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(base));
    if !under_base {
        return pathname.to_string();
    }
    match &pathname[base.len()..] {
        "" => "/".to_string(),
        rest if rest.starts_with('/') => rest.to_string(),
        _ => pathname.to_string(),
    }
}

/// Prefijar un path de la app con el base path
pub fn join_base(base: &str, path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    if base == "/" {
        path
    } else {
        format!("{}{}", base, path)
    }
}

/// Separar "path?query#hash" en ("path", "?query#hash")
fn split_path(url: &str) -> (&str, &str) {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    url.split_at(end)
}

/// Misma ubicación: paths iguales tras normalizar (como en la resolución de
/// rutas) y query + fragmento idénticos.
pub fn is_same_location(current: &str, target: &str) -> bool {
    let (current_path, current_rest) = split_path(current);
    let (target_path, target_rest) = split_path(target);
    current_rest == target_rest
        && normalize_path(current_path).eq_ignore_ascii_case(&normalize_path(target_path))
}

/// Historial del navegador visto desde la app (paths sin base)
#[derive(Clone)]
pub struct AppHistory {
    history: BrowserHistory,
    base: String,
}

impl AppHistory {
    pub fn new(base: &str) -> Self {
        Self {
            history: BrowserHistory::new(),
            base: base.to_string(),
        }
    }

    /// Path actual de la app (sin base, sin query)
    pub fn current_path(&self) -> String {
        strip_base(&self.base, self.history.location().path())
    }

    /// Path + query + fragmento actuales (sin base)
    pub fn current_location(&self) -> String {
        let location = self.history.location();
        format!(
            "{}{}{}",
            strip_base(&self.base, location.path()),
            location.query_str(),
            location.hash()
        )
    }

    /// pushState salvo que el destino sea la ubicación actual.
    /// Devuelve si se agregó una entrada.
    pub fn push(&self, path: &str) -> bool {
        if is_same_location(&self.current_location(), path) {
            log::debug!("🧭 [HISTORY] Ya en {}, push ignorado", path);
            return false;
        }
        let url = join_base(&self.base, path);
        log::debug!("🧭 [HISTORY] push {}", url);
        self.history.push(url);
        true
    }

    /// Escuchar cambios de ubicación (push propios y back/forward).
    /// El callback recibe el path actual; se desregistra al soltar el listener.
    pub fn listen<F>(&self, on_change: F) -> HistoryListener
    where
        F: Fn(String) + 'static,
    {
        let this = self.clone();
        self.history.listen(move || on_change(this.current_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;

    #[test]
    fn strip_base_with_root_base_is_identity() {
        assert_eq!(strip_base("/", "/faq"), "/faq");
        assert_eq!(strip_base("/", "/"), "/");
    }

    #[test]
    fn strip_base_removes_prefix_on_segment_boundary() {
        assert_eq!(strip_base("/analyzer", "/analyzer/faq"), "/faq");
        assert_eq!(strip_base("/analyzer", "/analyzer"), "/");
        assert_eq!(strip_base("/analyzer", "/analyzer/"), "/");
        assert_eq!(strip_base("/analyzer", "/analyzerx/faq"), "/analyzerx/faq");
        assert_eq!(strip_base("/analyzer", "/other"), "/other");
        assert_eq!(strip_base("/analyzer", "/an"), "/an");
    }

    #[test]
    fn strip_base_ignores_case_like_route_matching() {
        let stripped = strip_base("/analyzer", "/Analyzer/faq");
        assert_eq!(stripped, "/faq");
        assert_eq!(Route::resolve(&stripped), Route::Faq);
        assert_eq!(strip_base("/analyzer", "/ANALYZER"), "/");
        assert_eq!(strip_base("/analyzer", "/ANALYZERX/faq"), "/ANALYZERX/faq");
    }

    #[test]
    fn join_base_prefixes_paths() {
        assert_eq!(join_base("/", "/about"), "/about");
        assert_eq!(join_base("/", "about"), "/about");
        assert_eq!(join_base("/analyzer", "/about"), "/analyzer/about");
        assert_eq!(join_base("/analyzer", "/"), "/analyzer/");
    }

    #[test]
    fn same_location_uses_route_normalization() {
        assert!(is_same_location("/about", "/about"));
        assert!(is_same_location("/about", "/about/"));
        assert!(is_same_location("/faq", "/FAQ"));
        assert!(is_same_location("/missing", "/missing"));
        assert!(is_same_location("/about?x=1", "/about/?x=1"));
    }

    #[test]
    fn query_or_fragment_changes_are_new_locations() {
        assert!(!is_same_location("/about", "/about?x=1"));
        assert!(!is_same_location("/about?x=1", "/about"));
        assert!(!is_same_location("/faq", "/faq#encryption"));
        assert!(!is_same_location("/missing", "/also-missing"));
        assert!(!is_same_location("/", "/about"));
    }
}
