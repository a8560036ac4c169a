//! Logical routes
//!
//! The closed set of client-side paths. Resolution from a location fragment
//! is total: anything unrecognized lands on the home route, never an error.

/// One logical page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Menu,
    Reservation,
}

impl Route {
    /// Resolve a raw location fragment (without the leading `#`).
    pub fn parse(fragment: &str) -> Self {
        match fragment {
            "" | "/" => Route::Home,
            "/menu" => Route::Menu,
            "/reservation" => Route::Reservation,
            _ => Route::Home,
        }
    }

    /// Canonical fragment form, written back to `location.hash` on navigate.
    pub fn as_path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Menu => "/menu",
            Route::Reservation => "/reservation",
        }
    }
}
