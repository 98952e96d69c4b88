#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Changes the visible view of the application.
pub trait Navigator {
    fn go_to(&mut self, route: Route);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Route {
        self.current
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Navigator for Router {
    fn go_to(&mut self, route: Route) {
        tracing::info!("navigating from {} to {}", self.current.path(), route.path());
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Login.path(), "/");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }

    #[test]
    fn router_goes_to() {
        let mut router = Router::default();
        assert_eq!(router.current(), Route::Login);
        router.go_to(Route::Dashboard);
        assert_eq!(router.current(), Route::Dashboard);
    }
}
