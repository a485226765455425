use eco_route_lib::simulator::{
    CompletionRecord, NavPhase, TripSimulator, SUMMARY_DELAY_MS, TICK_INTERVAL_MS,
};
use gloo_console::info;
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::route_store::{RouteStore, SessionRouteStore};
use crate::Route;

pub enum Msg {
    Start,
    Pause,
    Resume,
    Cancel,
    Tick,
    ShowSummary,
    BackToPlanner,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub on_trip_complete: Callback<CompletionRecord>,
}

/// Turn-by-turn navigation view. Owns the one periodic timer of the
/// page: an `Interval` exists exactly while the simulator is navigating,
/// and both it and the deferred summary transition are RAII handles, so
/// tearing the component down cancels everything.
pub struct NavigationPanel {
    simulator: Option<TripSimulator>,
    clock: Option<Interval>,
    summary_timeout: Option<Timeout>,
}

impl Component for NavigationPanel {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        // Adopt the planned route exactly once. Absent or malformed means
        // the view stays in its "no route" state and no timer ever starts.
        let simulator = SessionRouteStore.take_selection().map(TripSimulator::new);

        Self {
            simulator,
            clock: None,
            summary_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(simulator) = self.simulator.as_mut() else {
            if let Msg::BackToPlanner = msg {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Planner);
                }
            }
            return false;
        };

        match msg {
            Msg::Start => {
                if simulator.start() {
                    info!("Navigation started");
                    self.start_clock(ctx);
                }
                true
            }
            Msg::Pause => {
                if simulator.pause() {
                    self.clock = None;
                }
                true
            }
            Msg::Resume => {
                if simulator.resume() {
                    self.start_clock(ctx);
                }
                true
            }
            Msg::Cancel => {
                if simulator.cancel() {
                    info!("Navigation cancelled");
                    self.clock = None;
                }
                true
            }
            Msg::Tick => {
                if let Some(record) = simulator.tick() {
                    // Terminal tick: stop the clock, hand the record off
                    // once, then give the completed view a moment before
                    // moving on to the summary.
                    self.clock = None;
                    info!(format!(
                        "Trip completed: {} km",
                        record.trip_stats.distance_traveled
                    ));
                    ctx.props().on_trip_complete.emit(record);

                    let link = ctx.link().clone();
                    self.summary_timeout = Some(Timeout::new(SUMMARY_DELAY_MS, move || {
                        link.send_message(Msg::ShowSummary);
                    }));
                }
                true
            }
            Msg::ShowSummary => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Summary);
                }
                false
            }
            Msg::BackToPlanner => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Planner);
                }
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Both handles cancel on drop; a mid-trip unmount leaves no
        // ticking timer or pending summary transition behind.
        self.clock.take();
        self.summary_timeout.take();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(simulator) = &self.simulator else {
            return self.view_no_route(ctx);
        };

        if simulator.phase() == NavPhase::Completed {
            return html! {
                <div class="navigation completed-box component-container">
                    <h1>{"✅ Trip completed successfully!"}</h1>
                    <label>{"Check summary for details"}</label>
                </div>
            };
        }

        let link = ctx.link();
        let selection = simulator.selection();
        let stats = simulator.stats();
        let current = simulator.current_direction();

        html! {
            <div class="navigation component-container">
                <div class="trip-header">
                    <h1>{format!("{} → {}", selection.start_location, selection.end_location)}</h1>
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
                        <label>{"Time"}</label>
                        <b>{format!("{:.0} min", stats.time_traveled)}</b>
                    </div>
                    <div class="stat-cell">
                        <label>{"Speed"}</label>
                        <b>{format!("{:.0} km/h", stats.current_speed)}</b>
                    </div>
                </div>

                <div class="current-direction">
                    <h2>{format!("{} Current Direction", current.direction.icon())}</h2>
                    <label>{current.instruction.clone()}</label>
                    <label>{format!("Distance: {:.1} km", current.distance)}</label>
                    if let Some(next_turn) = &current.next_turn {
                        <label class="next-turn">{format!("Next: {next_turn}")}</label>
                    }
                </div>

                <div class="route-overview">
                    <h2>{"🗺 Route Overview"}</h2>
                    { for simulator.steps().iter().enumerate().map(|(idx, step)| {
                        let class = if idx == simulator.current_step() {
                            "step current"
                        } else if idx < simulator.current_step() {
                            "step done"
                        } else {
                            "step"
                        };
                        html! {
                            <div key={idx} class={class}>
                                {format!("Step {}: {}", step.step, step.instruction)}
                            </div>
                        }
                    })}
                </div>

                { self.view_controls(link, simulator) }
            </div>
        }
    }
}

impl NavigationPanel {
    fn start_clock(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        // Replacing the handle drops (and thereby cancels) any previous
        // interval, so at most one clock ticks per panel instance.
        self.clock = Some(Interval::new(TICK_INTERVAL_MS, move || {
            link.send_message(Msg::Tick);
        }));
    }

    fn view_no_route(&self, ctx: &Context<Self>) -> Html {
        let on_click = ctx.link().callback(|_| Msg::BackToPlanner);
        html! {
            <div class="navigation no-route component-container">
                <h1>{"❌ No route selected"}</h1>
                <label>{"Please plan a route first"}</label>
                <button onclick={on_click}>{"Back to route planning"}</button>
            </div>
        }
    }

    fn view_controls(&self, link: &yew::html::Scope<Self>, simulator: &TripSimulator) -> Html {
        match simulator.phase() {
            NavPhase::Idle => html! {
                <button class="start-btn" onclick={link.callback(|_| Msg::Start)}>
                    {"▶ Start Navigation"}
                </button>
            },
            NavPhase::Navigating => html! {
                <div class="controls">
                    <label class="navigating-hint">
                        {format!("🚗 Navigating... step {} of {}",
                            simulator.current_step(), simulator.steps().len())}
                    </label>
                    <button onclick={link.callback(|_| Msg::Pause)}>{"⏸ Pause"}</button>
                    <button onclick={link.callback(|_| Msg::Cancel)}>{"✖ Cancel"}</button>
                </div>
            },
            NavPhase::Paused => html! {
                <div class="controls">
                    <label class="paused-hint">{"⏸ Paused"}</label>
                    <button onclick={link.callback(|_| Msg::Resume)}>{"▶ Resume"}</button>
                    <button onclick={link.callback(|_| Msg::Cancel)}>{"✖ Cancel"}</button>
                </div>
            },
            NavPhase::Completed => Html::default(),
        }
    }
}
