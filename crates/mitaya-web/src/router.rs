//! Fragment-based client router
//!
//! Maps `location.hash` onto the closed [`Route`] set. Navigation only
//! writes the fragment; the visible path updates when the browser echoes
//! the `hashchange` event back, so the signal is always consistent with the
//! address bar (including back/forward navigation and hand-edited URLs).

use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use mitaya_core::Route;

/// Router handle, provided through context at app start. One instance per
/// app, but constructed explicitly so tests can wire their own.
#[derive(Clone, Copy)]
pub struct RouterContext {
    path: RwSignal<Route>,
}

impl RouterContext {
    /// The current logical path. Reactive; resolution is total, so this
    /// never errors (unknown fragments read as [`Route::Home`]).
    pub fn path(&self) -> Route {
        self.path.get()
    }

    /// Request navigation by rewriting the fragment. The path signal is
    /// not touched here; it updates on the resulting `hashchange` event.
    pub fn navigate(&self, route: Route) {
        let _ = window().location().set_hash(route.as_path());
    }
}

fn current_fragment() -> String {
    window()
        .location()
        .hash()
        .map(|hash| hash.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

/// Create the router, subscribe it to `hashchange`, and provide it through
/// context. The subscription is removed on teardown.
pub fn provide_router() {
    let path = RwSignal::new(Route::parse(&current_fragment()));

    let handle = window_event_listener(leptos::ev::hashchange, move |_| {
        path.set(Route::parse(&current_fragment()));
    });
    on_cleanup(move || handle.remove());

    provide_context(RouterContext { path });
}

/// Access the router. Panics when called outside the provider tree; that
/// is a wiring bug, not a runtime condition.
pub fn use_router() -> RouterContext {
    expect_context::<RouterContext>()
}
