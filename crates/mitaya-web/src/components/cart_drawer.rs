//! Cart drawer component
//!
//! Slide-in panel over a backdrop, visible when the store's drawer flag is
//! set. Every line exposes the quantity stepper (minus disabled at the
//! quantity-1 floor) and an explicit remove button.

use leptos::prelude::*;
use mitaya_core::format_price;

use crate::state::use_app;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let app = use_app();

    view! {
        <Show when=move || app.is_cart_open()>
            <div class="drawer-backdrop" on:click=move |_| app.set_cart_open(false)></div>

            <aside class="cart-drawer">
                <div class="drawer-header">
                    <h2>{move || app.t("cart.title")}</h2>
                    <button
                        class="drawer-close"
                        aria-label="Close Cart"
                        on:click=move |_| app.set_cart_open(false)
                    >
                        "✕"
                    </button>
                </div>

                <div class="drawer-body">
                    <Show
                        when=move || !app.cart_is_empty()
                        fallback=move || {
                            view! { <p class="cart-empty">{move || app.t("cart.empty")}</p> }
                        }
                    >
                        <For
                            each=move || app.cart_items()
                            key=|line| (line.item.id.clone(), line.quantity)
                            children=move |line| {
                                let item = line.item.clone();
                                let quantity = line.quantity;
                                let dec_id = item.id.clone();
                                let inc_id = item.id.clone();
                                let remove_id = item.id.clone();
                                let name = item.name.clone();
                                let image = item.image.clone();
                                let alt = name.en.clone();

                                view! {
                                    <div class="cart-line">
                                        <img class="cart-line-image" src=image alt=alt />
                                        <div class="cart-line-info">
                                            <h4>
                                                {move || name.get(app.language()).to_string()}
                                            </h4>
                                            <p class="cart-line-price">
                                                {format_price(item.price)}
                                            </p>
                                            <div class="cart-line-actions">
                                                <div class="quantity-stepper">
                                                    <button
                                                        aria-label="Decrease quantity"
                                                        disabled={quantity <= 1}
                                                        on:click=move |_| {
                                                            app.update_quantity(&dec_id, -1)
                                                        }
                                                    >
                                                        "−"
                                                    </button>
                                                    <span class="quantity-value">{quantity}</span>
                                                    <button
                                                        aria-label="Increase quantity"
                                                        on:click=move |_| {
                                                            app.update_quantity(&inc_id, 1)
                                                        }
                                                    >
                                                        "+"
                                                    </button>
                                                </div>
                                                <button
                                                    class="cart-line-remove"
                                                    aria-label="Remove item"
                                                    on:click=move |_| app.remove_from_cart(&remove_id)
                                                >
                                                    "🗑"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </Show>
                </div>

                <Show when=move || !app.cart_is_empty()>
                    <div class="drawer-footer">
                        <div class="drawer-total-row">
                            <span>{move || app.t("cart.total")}</span>
                            <span class="drawer-total">
                                {move || format_price(app.cart_total())}
                            </span>
                        </div>
                        <button class="checkout-button">{move || app.t("cart.checkout")}</button>
                    </div>
                </Show>
            </aside>
        </Show>
    }
}
