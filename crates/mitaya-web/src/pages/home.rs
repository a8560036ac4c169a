//! Home page: hero banner and a small featured-dishes strip.

use leptos::prelude::*;
use mitaya_core::{format_price, Category, MenuItem, Route, MENU_ITEMS};

use crate::router::use_router;
use crate::state::use_app;

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();
    let router = use_router();

    let featured: Vec<MenuItem> = MENU_ITEMS
        .iter()
        .filter(|item| item.category == Category::Main)
        .take(3)
        .cloned()
        .collect();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero-title">{move || app.t("hero.title")}</h1>
                <p class="hero-subtitle">{move || app.t("hero.subtitle")}</p>
                <button
                    class="hero-cta"
                    on:click=move |_| router.navigate(Route::Reservation)
                >
                    {move || app.t("hero.cta")}
                </button>
            </section>

            <section class="featured container">
                {featured
                    .into_iter()
                    .map(|item| {
                        let name = item.name.clone();
                        let description = item.description.clone();
                        let alt = name.en.clone();

                        view! {
                            <div class="featured-card">
                                <img class="featured-image" src=item.image.clone() alt=alt />
                                <div class="featured-body">
                                    <h3>{move || name.get(app.language()).to_string()}</h3>
                                    <p class="featured-description">
                                        {move || description.get(app.language()).to_string()}
                                    </p>
                                    <span class="featured-price">{format_price(item.price)}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
