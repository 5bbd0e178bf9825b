// ============================================================================
// ROUTE - Tabla de rutas estática y resolución de paths
// ============================================================================

use std::fmt;

/// Vista asociada a una ruta. `NotFound` no está en la tabla:
/// es el resultado explícito de un path sin coincidencia.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Faq,
    Contact,
    NotFound,
}

impl Route {
    /// Tabla literal: path -> vista. Paths únicos.
    pub const ROUTES: [(&'static str, Route); 4] = [
        ("/", Route::Home),
        ("/about", Route::About),
        ("/faq", Route::Faq),
        ("/contact", Route::Contact),
    ];

    /// Resolver un path (sin base) a su vista.
    /// Ignora query, fragmento, una barra final y mayúsculas.
    pub fn resolve(path: &str) -> Route {
        let normalized = normalize_path(path);
        Self::ROUTES
            .iter()
            .find(|(route_path, _)| route_path.eq_ignore_ascii_case(&normalized))
            .map(|(_, route)| *route)
            .unwrap_or(Route::NotFound)
    }

    /// Rutas navegables, en el orden de la tabla
    pub fn all() -> impl Iterator<Item = Route> {
        Self::ROUTES.iter().map(|(_, route)| *route)
    }

    /// Path canónico. `NotFound` no tiene path propio.
    pub fn path(&self) -> Option<&'static str> {
        Self::ROUTES
            .iter()
            .find(|(_, route)| route == self)
            .map(|(path, _)| *path)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Faq => "FAQ",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Quita query y fragmento, asegura "/" inicial y elimina una barra final
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim();

    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_four_distinct_paths() {
        let paths: Vec<&str> = Route::ROUTES.iter().map(|(p, _)| *p).collect();
        assert_eq!(paths, vec!["/", "/about", "/faq", "/contact"]);
        let unique: HashSet<&str> = paths.iter().copied().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn each_table_path_resolves_to_its_view_only() {
        for (path, route) in Route::ROUTES {
            assert_eq!(Route::resolve(path), route);
            for (other_path, other) in Route::ROUTES {
                if other_path != path {
                    assert_ne!(Route::resolve(path), other);
                }
            }
        }
    }

    #[test]
    fn about_resolves_to_about() {
        assert_eq!(Route::resolve("/about"), Route::About);
    }

    #[test]
    fn unknown_path_resolves_to_not_found() {
        assert_eq!(Route::resolve("/unknown"), Route::NotFound);
        assert_eq!(Route::resolve("/about/team"), Route::NotFound);
        assert_eq!(Route::resolve("/faqs"), Route::NotFound);
    }

    #[test]
    fn trailing_slash_case_query_and_fragment_are_ignored() {
        assert_eq!(Route::resolve("/about/"), Route::About);
        assert_eq!(Route::resolve("/FAQ"), Route::Faq);
        assert_eq!(Route::resolve("/contact?from=nav"), Route::Contact);
        assert_eq!(Route::resolve("/faq#encryption"), Route::Faq);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("about"), Route::About);
    }

    #[test]
    fn path_round_trips_through_the_table() {
        for route in Route::all() {
            let path = route.path().expect("table route has a path");
            assert_eq!(Route::resolve(path), route);
        }
        assert_eq!(Route::NotFound.path(), None);
        assert_eq!(Route::all().count(), 4);
    }

    #[test]
    fn normalize_keeps_root() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/?q=1"), "/");
        assert_eq!(normalize_path("/faq/"), "/faq");
    }
}
