use pti_core::{MeterView, ProgressView};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub view: ProgressView,
    pub on_update: Callback<()>,
    pub on_reset: Callback<()>,
}

fn meter_row(view: &MeterView) -> Html {
    let meter = view.meter;
    html! {
        <div class={classes!("meter", format!("meter-{meter}"))}>
            <div class="meter-head">
                <span class="meter-label">{ meter.label() }</span>
                <span id={meter.value_id()} class="meter-value">{ view.label.clone() }</span>
            </div>
            <div class="bar-wrap">
                <div id={meter.fill_id()} class="bar-fill" style={view.width_style()}></div>
            </div>
        </div>
    }
}

#[function_component(ProgressPanel)]
pub fn progress_panel(p: &Props) -> Html {
    let on_update = {
        let cb = p.on_update.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="progress-panel">
            { for p.view.meters.iter().map(meter_row) }
            <div class="controls">
                <button id="updateDemo" class="btn" onclick={on_update}>{ "Update Progress" }</button>
                <button id="resetDemo" class="btn btn-ghost" onclick={on_reset}>{ "Reset" }</button>
            </div>
        </div>
    }
}
