//! Menu browser page
//!
//! Category tabs, free-text search, and a vegetarian-only toggle over the
//! static catalog. The result set is a memo over the four inputs (the
//! language counts: search matches against the active language's text).

use leptos::prelude::*;
use mitaya_core::{filter_menu, format_price, CategoryFilter, MenuItem, CATEGORIES, MENU_ITEMS};

use crate::state::use_app;

#[component]
pub fn MenuPage() -> impl IntoView {
    let app = use_app();

    let (active_filter, set_active_filter) = signal(CategoryFilter::Popular);
    let (query, set_query) = signal(String::new());
    let (vegetarian_only, set_vegetarian_only) = signal(false);

    let filtered = Memo::new(move |_| {
        filter_menu(
            &MENU_ITEMS,
            active_filter.get(),
            &query.get(),
            vegetarian_only.get(),
            app.language(),
        )
        .into_iter()
        .cloned()
        .collect::<Vec<MenuItem>>()
    });

    view! {
        <div class="menu-page container">
            <h1 class="page-title">{move || app.t("menu.title")}</h1>

            <div class="menu-controls">
                <div class="category-tabs">
                    {CATEGORIES
                        .iter()
                        .map(|(filter, label)| {
                            let filter = *filter;
                            let label = label.clone();
                            view! {
                                <button
                                    class="category-tab"
                                    class:category-tab-active=move || active_filter.get() == filter
                                    on:click=move |_| set_active_filter.set(filter)
                                >
                                    {move || label.get(app.language()).to_string()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="menu-search-group">
                    <input
                        type="text"
                        class="menu-search"
                        placeholder=move || app.t("menu.search")
                        prop:value=move || query.get()
                        on:input=move |e| set_query.set(event_target_value(&e))
                    />
                    <button
                        class="veg-toggle"
                        class:veg-toggle-active=move || vegetarian_only.get()
                        title=move || app.t("menu.vegetarian")
                        on:click=move |_| set_vegetarian_only.update(|v| *v = !*v)
                    >
                        "🌿"
                    </button>
                </div>
            </div>

            <div class="menu-grid">
                <For
                    each=move || filtered.get()
                    key=|item| item.id.clone()
                    children=move |item| {
                        let name = item.name.clone();
                        let description = item.description.clone();
                        let alt = name.en.clone();
                        let image = item.image.clone();
                        let price = item.price;
                        let is_vegetarian = item.is_vegetarian;
                        let add_item = item;

                        view! {
                            <div class="menu-card">
                                <div class="menu-card-media">
                                    <img src=image alt=alt loading="lazy" />
                                    <Show when=move || is_vegetarian>
                                        <span class="veg-badge">"VEG"</span>
                                    </Show>
                                </div>
                                <div class="menu-card-body">
                                    <div class="menu-card-head">
                                        <h3>{move || name.get(app.language()).to_string()}</h3>
                                        <span class="menu-card-price">
                                            {format_price(price)}
                                        </span>
                                    </div>
                                    <p class="menu-card-description">
                                        {move || description.get(app.language()).to_string()}
                                    </p>
                                    <button
                                        class="menu-card-add"
                                        on:click=move |_| app.add_to_cart(&add_item)
                                    >
                                        {move || app.t("menu.add")}
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || filtered.get().is_empty()>
                <div class="menu-empty">
                    <p>"No dishes found matching your criteria."</p>
                </div>
            </Show>
        </div>
    }
}
