//! Client-side routes

use serde::{Deserialize, Serialize};

/// One page of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Services,
    Plans,
    About,
    Contact,
}

impl Route {
    /// Navigation order
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Services,
        Self::Plans,
        Self::About,
        Self::Contact,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Services => "/services",
            Self::Plans => "/plans",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    /// Link text in the header
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Plans => "Plans",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Exact match on a pathname. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Like `from_path`, but unknown paths land on Home
    pub fn resolve(path: &str) -> Self {
        Self::from_path(path).unwrap_or_else(|| {
            tracing::debug!(path, "unknown route, falling back to home");
            Self::Home
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_path_maps_to_one_route() {
        let cases = [
            ("/", Route::Home),
            ("/services", Route::Services),
            ("/plans", Route::Plans),
            ("/about", Route::About),
            ("/contact", Route::Contact),
        ];
        for (path, expected) in cases {
            assert_eq!(Route::from_path(path), Some(expected));
            assert_eq!(expected.path(), path);
        }
    }

    #[test]
    fn test_routes_are_distinct() {
        let paths: HashSet<_> = Route::ALL.iter().map(|r| r.path()).collect();
        let labels: HashSet<_> = Route::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
        assert_eq!(labels.len(), Route::ALL.len());
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Route::from_path("/plans/"), Some(Route::Plans));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert_eq!(Route::from_path("/pricing"), None);
        assert_eq!(Route::from_path("/services/extra"), None);
        assert_eq!(Route::resolve("/pricing"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
    }
}
