use chrono::Utc;
use eco_route_lib::cities;
use eco_route_lib::route::{Route as EcoRoute, RouteSelection};
use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api;
use crate::route_store::{RouteStore, SessionRouteStore};
use crate::Route;

#[function_component]
pub fn RoutePlanner() -> Html {
    let start_location = use_state(String::new);
    let end_location = use_state(String::new);
    let preference = use_state(|| "balanced".to_string());
    let routes = use_state(Vec::<EcoRoute>::new);
    let selected_idx = use_state(|| None::<usize>);
    let loading = use_state(|| false);
    let error_msg = use_state(String::new);

    let navigator = use_navigator().unwrap();

    let on_start_input = {
        let start_location = start_location.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            start_location.set(input.value());
            error_msg.set(String::new());
        })
    };

    let on_end_input = {
        let end_location = end_location.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            end_location.set(input.value());
            error_msg.set(String::new());
        })
    };

    let on_preference_change = {
        let preference = preference.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            preference.set(select.value());
        })
    };

    let on_search = {
        let start_location = start_location.clone();
        let end_location = end_location.clone();
        let preference = preference.clone();
        let routes = routes.clone();
        let selected_idx = selected_idx.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |_| {
            let start = (*start_location).trim().to_string();
            let end = (*end_location).trim().to_string();

            if start.is_empty() || end.is_empty() {
                error_msg.set("Please enter both start and end locations".into());
                return;
            }
            if start == end {
                error_msg.set("Start and end location cannot be the same".into());
                return;
            }
            let Some(start_coords) = cities::lookup(&start) else {
                error_msg.set(format!("Location \"{start}\" not found"));
                return;
            };
            let Some(end_coords) = cities::lookup(&end) else {
                error_msg.set(format!("Location \"{end}\" not found"));
                return;
            };

            loading.set(true);
            error_msg.set(String::new());

            let request = api::RouteRequest::new(start_coords, end_coords, &preference);
            let routes = routes.clone();
            let selected_idx = selected_idx.clone();
            let loading = loading.clone();
            let error_msg = error_msg.clone();
            spawn_local(async move {
                match api::recommend_routes(&request).await {
                    Ok(found) => {
                        routes.set(found);
                        selected_idx.set(None);
                    }
                    Err(e) => {
                        error!(format!("Error fetching routes: {e}"));
                        error_msg.set("Failed to get routes".into());
                        routes.set(Vec::new());
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_start_navigation = {
        let start_location = start_location.clone();
        let end_location = end_location.clone();
        let routes = routes.clone();
        let selected_idx = selected_idx.clone();
        let error_msg = error_msg.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(idx) = *selected_idx else {
                error_msg.set("Please select a route first".into());
                return;
            };
            let Some(route) = routes.get(idx) else {
                error_msg.set("Selected route not found".into());
                return;
            };

            let start = (*start_location).trim().to_string();
            let end = (*end_location).trim().to_string();
            let selection = RouteSelection {
                route: route.clone(),
                start_coords: cities::lookup(&start),
                end_coords: cities::lookup(&end),
                start_location: start,
                end_location: end,
                start_time: Some(Utc::now()),
            };

            SessionRouteStore.store_selection(&selection);
            navigator.push(&Route::Navigate);
        })
    };

    let select_route = {
        let selected_idx = selected_idx.clone();
        move |idx: usize| {
            let selected_idx = selected_idx.clone();
            Callback::from(move |_| {
                selected_idx.set(if *selected_idx == Some(idx) { None } else { Some(idx) });
            })
        }
    };

    html! {
        <div class="route-planner component-container">
            <h1>{"🗺 Plan Your Route"}</h1>

            <div class="search-form">
                <label>{"📍 Start Location"}</label>
                <input
                    type="text"
                    list="cities"
                    placeholder="e.g. Mumbai"
                    value={(*start_location).clone()}
                    oninput={on_start_input}
                />
                <label>{"🎯 Destination"}</label>
                <input
                    type="text"
                    list="cities"
                    placeholder="e.g. Bangalore"
                    value={(*end_location).clone()}
                    oninput={on_end_input}
                />
                <label>{"⚙ Preference"}</label>
                <select value={(*preference).clone()} onchange={on_preference_change}>
                    <option value="balanced">{"Balanced"}</option>
                    <option value="eco">{"Most Eco-friendly"}</option>
                    <option value="fastest">{"Fastest"}</option>
                </select>
            </div>

            <datalist id="cities">
                { for cities::CITIES.iter().map(|(name, _)| html! { <option value={*name} /> }) }
            </datalist>

            <button class="search-btn" onclick={on_search} disabled={*loading}>
                { if *loading { "Searching..." } else { "🔍 Find Routes" } }
            </button>

            if !error_msg.is_empty() {
                <label class="error">{(*error_msg).clone()}</label>
            }

            <div class="route-list">
                { for routes.iter().enumerate().map(|(idx, route)| {
                    let class = if *selected_idx == Some(idx) { "route-card selected" } else { "route-card" };
                    html! {
                        <div key={idx} class={class} onclick={select_route(idx)}>
                            <h2>{route.title.clone().unwrap_or_default()}</h2>
                            <label>{route.description.clone().unwrap_or_default()}</label>
                            <label>{format!("{:.1} km", route.distance_km.unwrap_or_default())}</label>
                            <label>{format!("{:.0} min", route.duration_minutes.unwrap_or_default())}</label>
                            <label>{format!("CO₂ saved: {:.1} kg", route.co2_saved_kg.unwrap_or_default())}</label>
                            <label>{format!("₹{:.0}", route.cost_estimate.unwrap_or_default())}</label>
                            <label>{format!("Air quality: {}", route.air_quality_label.clone().unwrap_or_default())}</label>
                        </div>
                    }
                })}
            </div>

            if !routes.is_empty() {
                <button class="navigate-btn" onclick={on_start_navigation}>
                    {"🚗 Start Navigation"}
                </button>
            }
        </div>
    }
}
