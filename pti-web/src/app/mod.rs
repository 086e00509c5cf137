use yew::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;
pub use state::{AppState, DashboardAction, DashboardModel};

/// Root component mounted by the wasm entry point.
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    bootstrap::use_cue_player(&app_state);

    let handlers = AppHandlers::new(&app_state);
    view::render_app(&app_state, &handlers)
}
