use std::rc::Rc;

use eco_route_lib::eco_score::{eco_score, trees_equivalent, ScoreBand};
use eco_route_lib::simulator::CompletionRecord;
use gloo_console::error;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api;
use crate::Route;

const RETURN_DELAY_MS: u32 = 2_000;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub record: Option<Rc<CompletionRecord>>,
}

/// Post-trip summary: eco score, saved CO₂, and a one-shot save to the
/// backend. Saving is best-effort; a failure is shown but the trip stays
/// completed.
#[function_component]
pub fn TripSummary(props: &Props) -> Html {
    let saving = use_state(|| false);
    let save_state = use_state(|| None::<Result<(), api::ApiError>>);
    // Holding the handle here means leaving the page cancels the
    // scheduled return to the planner.
    let return_timeout = use_mut_ref(|| None::<Timeout>);

    let navigator = use_navigator().unwrap();

    let Some(record) = &props.record else {
        let on_click = {
            let navigator = navigator.clone();
            Callback::from(move |_| navigator.push(&Route::Planner))
        };
        return html! {
            <div class="trip-summary component-container">
                <h1>{"No trip to summarize"}</h1>
                <button onclick={on_click}>{"Back to route planning"}</button>
            </div>
        };
    };

    let stats = record.trip_stats;
    let score = eco_score(stats.co2_saved);
    let band = ScoreBand::of(score);
    let trees = trees_equivalent(stats.co2_saved);

    let on_save = {
        let record = record.clone();
        let saving = saving.clone();
        let save_state = save_state.clone();
        let return_timeout = return_timeout.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }
            saving.set(true);

            let request = api::SaveTripRequest {
                start_location: record.start_location.clone(),
                end_location: record.end_location.clone(),
                distance_km: record.trip_stats.distance_traveled,
                duration_minutes: record.trip_stats.time_traveled,
                co2_saved_grams: record.trip_stats.co2_saved * 1000.0,
                eco_score: eco_score(record.trip_stats.co2_saved),
            };

            let saving = saving.clone();
            let save_state = save_state.clone();
            let return_timeout = return_timeout.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let result = api::save_trip(&request).await;
                if let Err(e) = &result {
                    error!(format!("Error saving trip: {e}"));
                } else {
                    let navigator = navigator.clone();
                    *return_timeout.borrow_mut() = Some(Timeout::new(RETURN_DELAY_MS, move || {
                        navigator.push(&Route::Planner);
                    }));
                }
                save_state.set(Some(result));
                saving.set(false);
            });
        })
    };

    html! {
        <div class="trip-summary component-container">
            <h1>{"Trip Summary"}</h1>
            <label>{format!("{} → {}", record.start_location, record.end_location)}</label>
            <label>{format!("Completed {}", record.completed_at.format("%d/%m/%Y %H:%M"))}</label>

            <div class="eco-score">
                <b class={format!("score band-{}", band.label().to_lowercase())}>{score}</b>
                <label>{format!("{} Eco Score", band.label())}</label>
            </div>

            <div class="stats-row">
                <div class="stat-cell">
                    <label>{"Distance"}</label>
                    <b>{format!("{:.1} km", stats.distance_traveled)}</b>
                </div>
                <div class="stat-cell">
                    <label>{"CO₂ Saved"}</label>
                    <b>{format!("{:.2} kg", stats.co2_saved)}</b>
                </div>
                <div class="stat-cell">
                    <label>{"Duration"}</label>
                    <b>{format!("{:.0} min", stats.time_traveled)}</b>
                </div>
                <div class="stat-cell">
                    <label>{"Trees equivalent"}</label>
                    <b>{format!("🌳 {trees}")}</b>
                </div>
            </div>

            { match &*save_state {
                Some(Ok(())) => html! {
                    <label class="save-success">{"✅ Trip saved! Returning to planner..."}</label>
                },
                Some(Err(_)) => html! {
                    <label class="error">{"Could not save the trip. It is still recorded here."}</label>
                },
                None => html! {
                    <button class="save-btn" onclick={on_save} disabled={*saving}>
                        { if *saving { "Saving..." } else { "💾 Save Trip" } }
                    </button>
                },
            }}
        </div>
    }
}
