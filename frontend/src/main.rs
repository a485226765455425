use std::rc::Rc;

use eco_route_lib::simulator::CompletionRecord;
use gloo_console::info;
use yew::prelude::*;
use yew_router::{BrowserRouter, Routable, Switch};

use crate::components::{
    navigation_panel::NavigationPanel, route_planner::RoutePlanner, trip_summary::TripSummary,
};

mod api;
mod components;
mod route_store;

#[derive(Clone, Debug, PartialEq, Routable)]
enum Route {
    #[at("/")]
    Planner,
    #[at("/navigate")]
    Navigate,
    #[at("/summary")]
    Summary,
    #[not_found]
    #[at("/404")]
    Invalid,
}

enum MainMsg {
    TripCompleted(CompletionRecord),
}

/// App root. Holds the one completed-trip record of the session so the
/// summary view survives the route change out of the navigation page.
struct Model {
    completed_trip: Option<Rc<CompletionRecord>>,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            completed_trip: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::TripCompleted(record) => {
                info!(format!(
                    "Trip completed: {} → {}",
                    record.start_location, record.end_location
                ));
                self.completed_trip = Some(Rc::new(record));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_trip_complete = ctx.link().callback(MainMsg::TripCompleted);
        let completed_trip = self.completed_trip.clone();

        html! {
            <BrowserRouter>
                <Switch<Route> render={move |route| match route {
                    Route::Planner => html! { <RoutePlanner /> },
                    Route::Navigate => html! {
                        <NavigationPanel on_trip_complete={on_trip_complete.clone()} />
                    },
                    Route::Summary => html! {
                        <TripSummary record={completed_trip.clone()} />
                    },
                    Route::Invalid => html! {
                        <div class="component-container">
                            <h1>{"Page not found"}</h1>
                        </div>
                    },
                }} />
            </BrowserRouter>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
