//! Route Guard
//!
//! Decides which view a path renders, or where it redirects, given the
//! session flag. Token presence is the only input.

use std::fmt;

/// Client routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Predict,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Predict => "/predict",
        }
    }

    /// Parse a known path; a trailing slash is ignored
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "/login" => Some(Route::Login),
            "/predict" => Some(Route::Predict),
            _ => None,
        }
    }

    /// Landing route for a session state
    pub fn home(authenticated: bool) -> Route {
        if authenticated {
            Route::Predict
        } else {
            Route::Login
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of guarding a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

impl RouteDecision {
    /// Route the user ends up on
    pub fn target(&self) -> Route {
        match self {
            RouteDecision::Render(route) | RouteDecision::Redirect(route) => *route,
        }
    }
}

/// Guard a navigation to `path`
pub fn resolve(path: &str, authenticated: bool) -> RouteDecision {
    match (Route::from_path(path), authenticated) {
        (Some(Route::Login), false) => RouteDecision::Render(Route::Login),
        (Some(Route::Login), true) => RouteDecision::Redirect(Route::Predict),
        (Some(Route::Predict), true) => RouteDecision::Render(Route::Predict),
        (Some(Route::Predict), false) => RouteDecision::Redirect(Route::Login),
        (None, authenticated) => RouteDecision::Redirect(Route::home(authenticated)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_routes() {
        assert_eq!(resolve("/login", false), RouteDecision::Render(Route::Login));
        assert_eq!(resolve("/predict", false), RouteDecision::Redirect(Route::Login));
        assert_eq!(resolve("/", false), RouteDecision::Redirect(Route::Login));
        assert_eq!(resolve("/admin", false), RouteDecision::Redirect(Route::Login));
    }

    #[test]
    fn test_authenticated_routes() {
        assert_eq!(resolve("/login", true), RouteDecision::Redirect(Route::Predict));
        assert_eq!(resolve("/predict", true), RouteDecision::Render(Route::Predict));
        assert_eq!(resolve("/anything/else", true), RouteDecision::Redirect(Route::Predict));
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(Route::from_path("/predict/"), Some(Route::Predict));
        assert_eq!(Route::from_path("/login?next=x"), Some(Route::Login));
        assert_eq!(Route::from_path("/"), None);
        assert_eq!(Route::from_path(""), None);
        assert_eq!(Route::from_path("/predictions"), None);
    }

    #[test]
    fn test_target() {
        assert_eq!(resolve("/nope", true).target(), Route::Predict);
        assert_eq!(Route::Login.to_string(), "/login");
    }
}
