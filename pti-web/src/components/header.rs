use pti_core::SoundGate;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub status: AttrValue,
    pub gate: SoundGate,
    pub on_toggle_sound: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_toggle = {
        let cb = p.on_toggle_sound.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let label = if p.gate.is_enabled() {
        "Mute sound"
    } else {
        "Unmute sound"
    };

    html! {
        <header class="hud">
            <h1 class="hud-title">{ "Path to Independence" }</h1>
            <div class="hud-status">
                <span class="status-dot" aria-hidden="true"></span>
                <span id="statusText" aria-live="polite">{ p.status.clone() }</span>
            </div>
            <button id="soundToggle" class="icon-btn" aria-label={label} onclick={on_toggle}>
                { p.gate.icon() }
            </button>
        </header>
    }
}
