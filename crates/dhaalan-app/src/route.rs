#![forbid(unsafe_code)]

/// Top-level pages reachable from the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Exhibitors,
    Opportunities,
    Schedule,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Exhibitors,
        Route::Opportunities,
        Route::Schedule,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Exhibitors => "/exhibitors",
            Route::Opportunities => "/opportunities",
            Route::Schedule => "/schedule",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Catalog key for the nav label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Route::Home => "nav.home",
            Route::Exhibitors => "nav.exhibitors",
            Route::Opportunities => "nav.opportunities",
            Route::Schedule => "nav.schedule",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nowhere"), None);
    }
}
