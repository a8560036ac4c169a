//! Reservation page
//!
//! Form state machine: Editing -> Submitting -> Success -> Editing. An
//! invalid submit stays in Editing with field-level errors and never
//! reaches the simulated booking call. The success banner auto-dismisses
//! after a fixed display window; that timer is cancelled on teardown so a
//! discarded view is never written to.

use std::time::Duration;

use chrono::Local;
use leptos::leptos_dom::helpers::{set_timeout, set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use mitaya_core::{validate, ReservationErrors, ReservationForm};

use crate::state::use_app;

/// Simulated booking call latency. A real deployment replaces the timer
/// with an actual request and gets an error path at the same time.
const SUBMIT_DELAY_MS: u64 = 1_500;
/// How long the success banner stays up before the form returns.
const SUCCESS_DISPLAY_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    Editing,
    Submitting,
    Success,
}

#[component]
pub fn ReservationPage() -> impl IntoView {
    let app = use_app();

    let (status, set_status) = signal(FormStatus::Editing);
    let (errors, set_errors) = signal(ReservationErrors::default());

    let (name, set_name) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (guests, set_guests) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    // Pending success-banner dismiss timer, cleared on teardown.
    let dismiss_timer = StoredValue::new(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = dismiss_timer.get_value() {
            handle.clear();
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Submitting {
            return;
        }

        let form = ReservationForm {
            name: name.get_untracked(),
            date: date.get_untracked(),
            guests: guests.get_untracked(),
            notes: notes.get_untracked(),
        };

        match validate(&form, Local::now().naive_local()) {
            Err(field_errors) => set_errors.set(field_errors),
            Ok(reservation) => {
                set_errors.set(ReservationErrors::default());
                set_status.set(FormStatus::Submitting);

                // Simulated booking call: fixed delay, always succeeds in
                // this scope. Fire and forget.
                set_timeout(
                    move || {
                        leptos::logging::log!("reservation confirmed: {reservation:?}");
                        set_status.set(FormStatus::Success);
                        set_name.set(String::new());
                        set_date.set(String::new());
                        set_guests.set(String::new());
                        set_notes.set(String::new());

                        let handle = set_timeout_with_handle(
                            move || set_status.set(FormStatus::Editing),
                            Duration::from_millis(SUCCESS_DISPLAY_MS),
                        )
                        .ok();
                        dismiss_timer.set_value(handle);
                    },
                    Duration::from_millis(SUBMIT_DELAY_MS),
                );
            }
        }
    };

    view! {
        <div class="reservation-page container">
            <div class="reservation-info">
                <h1 class="page-title">{move || app.t("res.title")}</h1>
                <p class="reservation-blurb">
                    "Reserve your table for an unforgettable dining experience. \
                     For parties larger than 10, please contact us directly."
                </p>
                <div class="contact-list">
                    <div class="contact-item">
                        <h3>"Address"</h3>
                        <p>"123 Culinary Ave, Food City, FC 90210"</p>
                    </div>
                    <div class="contact-item">
                        <h3>"Phone"</h3>
                        <p>"+1 (555) 123-4567"</p>
                    </div>
                    <div class="contact-item">
                        <h3>"Email"</h3>
                        <p>"reservations@mitaya-restaurant.com"</p>
                    </div>
                </div>
            </div>

            <div class="reservation-panel">
                <Show
                    when=move || status.get() != FormStatus::Success
                    fallback=move || {
                        view! {
                            <div class="reservation-success">
                                <div class="success-mark">"✓"</div>
                                <h2>{move || app.t("res.success")}</h2>
                                <p>"We look forward to seeing you!"</p>
                                <button
                                    class="success-again"
                                    on:click=move |_| set_status.set(FormStatus::Editing)
                                >
                                    "Make Another Reservation"
                                </button>
                            </div>
                        }
                    }
                >
                    <form class="reservation-form" on:submit=submit>
                        <div class="form-field">
                            <label>{move || app.t("res.name")}</label>
                            <input
                                type="text"
                                placeholder="John Doe"
                                prop:value=move || name.get()
                                on:input=move |e| set_name.set(event_target_value(&e))
                            />
                            {move || {
                                errors
                                    .get()
                                    .name
                                    .map(|e| view! { <p class="field-error">{e.to_string()}</p> })
                            }}
                        </div>

                        <div class="form-row">
                            <div class="form-field">
                                <label>{move || app.t("res.date")}</label>
                                <input
                                    type="datetime-local"
                                    prop:value=move || date.get()
                                    on:input=move |e| set_date.set(event_target_value(&e))
                                />
                                {move || {
                                    errors
                                        .get()
                                        .date
                                        .map(|e| {
                                            view! { <p class="field-error">{e.to_string()}</p> }
                                        })
                                }}
                            </div>
                            <div class="form-field">
                                <label>{move || app.t("res.guests")}</label>
                                <input
                                    type="number"
                                    min="1"
                                    max="10"
                                    prop:value=move || guests.get()
                                    on:input=move |e| set_guests.set(event_target_value(&e))
                                />
                                {move || {
                                    errors
                                        .get()
                                        .guests
                                        .map(|e| {
                                            view! { <p class="field-error">{e.to_string()}</p> }
                                        })
                                }}
                            </div>
                        </div>

                        <div class="form-field">
                            <label>{move || app.t("res.notes")}</label>
                            <textarea
                                placeholder="Allergies, special occasions, high chair needed..."
                                prop:value=move || notes.get()
                                on:input=move |e| set_notes.set(event_target_value(&e))
                            ></textarea>
                        </div>

                        <button
                            type="submit"
                            class="form-submit"
                            disabled=move || status.get() == FormStatus::Submitting
                        >
                            {move || {
                                if status.get() == FormStatus::Submitting {
                                    "…"
                                } else {
                                    app.t("res.submit")
                                }
                            }}
                        </button>

                        <Show when=move || !errors.get().is_empty()>
                            <p class="form-error-summary">{move || app.t("res.error")}</p>
                        </Show>
                    </form>
                </Show>
            </div>
        </div>
    }
}
