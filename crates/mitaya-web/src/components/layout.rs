//! Site chrome: header with navigation, language switch and cart trigger,
//! footer, and the cart drawer mounted once for the whole app.

use leptos::prelude::*;
use mitaya_core::Route;

use crate::components::CartDrawer;
use crate::router::use_router;
use crate::state::use_app;

const NAV_LINKS: &[(&str, Route)] = &[
    ("nav.home", Route::Home),
    ("nav.menu", Route::Menu),
    ("nav.reservation", Route::Reservation),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let app = use_app();
    let router = use_router();

    // Mobile nav state
    let (mobile_open, set_mobile_open) = signal(false);

    view! {
        <div class="site">
            <header class="site-header">
                <div class="container header-inner">
                    <div class="brand" on:click=move |_| router.navigate(Route::Home)>
                        "Mitaya's Restaurant"
                    </div>

                    <nav class="nav-desktop">
                        {NAV_LINKS
                            .iter()
                            .map(|&(key, route)| {
                                view! {
                                    <button
                                        class="nav-link"
                                        class:nav-link-active=move || router.path() == route
                                        on:click=move |_| router.navigate(route)
                                    >
                                        {move || app.t(key)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="header-actions">
                        <button
                            class="lang-toggle"
                            aria-label="Switch Language"
                            on:click=move |_| app.set_language(app.language().toggled())
                        >
                            {move || app.language().tag()}
                        </button>

                        <button
                            class="cart-trigger"
                            aria-label="Open Cart"
                            on:click=move |_| app.set_cart_open(true)
                        >
                            "🛒"
                            <Show when={move || app.cart_item_count() > 0}>
                                <span class="cart-badge">{move || app.cart_item_count()}</span>
                            </Show>
                        </button>

                        <button
                            class="mobile-toggle"
                            aria-label="Toggle Menu"
                            on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        >
                            {move || if mobile_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </header>

            <Show when=move || mobile_open.get()>
                <nav class="nav-mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|&(key, route)| {
                            view! {
                                <button
                                    class="nav-mobile-link"
                                    class:nav-link-active=move || router.path() == route
                                    on:click=move |_| {
                                        router.navigate(route);
                                        set_mobile_open.set(false);
                                    }
                                >
                                    {move || app.t(key)}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>

            <main class="content">{children()}</main>

            <footer class="site-footer">
                <div class="container footer-grid">
                    <div>
                        <h3 class="footer-brand">"Mitaya's Restaurant"</h3>
                        <p class="footer-tagline">{move || app.t("hero.subtitle")}</p>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Contact"</h4>
                        <p class="footer-line">{move || app.t("footer.address")}</p>
                        <p class="footer-line">"www.mitaya-restaurant.com"</p>
                    </div>
                    <div class="footer-rights">
                        <p>{move || app.t("footer.rights")}</p>
                    </div>
                </div>
            </footer>

            <CartDrawer />
        </div>
    }
}
