use pti_core::{ContractMode, ThemeCatalog};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub theme: AttrValue,
    pub contract_mode: AttrValue,
    pub auto_sound: bool,
    pub on_theme_change: Callback<String>,
    pub on_contract_mode_change: Callback<String>,
    pub on_auto_sound_change: Callback<bool>,
}

fn select_change(cb: Callback<String>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
            cb.emit(sel.value());
        }
    })
}

#[function_component(SettingsPanel)]
pub fn settings_panel(p: &Props) -> Html {
    let on_auto_sound = {
        let cb = p.on_auto_sound_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.checked());
            }
        })
    };

    html! {
        <div class="settings-panel">
            <div class="field">
                <label for="themeSelect">{ "Theme" }</label>
                <select id="themeSelect" onchange={select_change(p.on_theme_change.clone())}>
                    { for ThemeCatalog::global().options().map(|(value, label)| html! {
                        <option value={value.to_string()} selected={p.theme.as_str() == value}>{ label }</option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label for="contractMode">{ "Contract" }</label>
                <select id="contractMode" onchange={select_change(p.on_contract_mode_change.clone())}>
                    { for ContractMode::ALL.iter().map(|mode| html! {
                        <option value={mode.as_str()} selected={p.contract_mode.as_str() == mode.as_str()}>{ mode.label() }</option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label for="autoSound">{ "Sound effects" }</label>
                <input id="autoSound" type="checkbox" checked={p.auto_sound} onchange={on_auto_sound} />
            </div>
        </div>
    }
}
