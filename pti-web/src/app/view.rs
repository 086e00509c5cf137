use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::contract_panel::ContractPanel;
use crate::components::header::Header;
use crate::components::progress_panel::ProgressPanel;
use crate::components::settings_panel::SettingsPanel;
use crate::components::tab_bar::TabBar;
use pti_core::TabId;
use yew::prelude::*;

fn panel(tab: TabId, active: TabId, body: Html) -> Html {
    let class = classes!("panel", (tab != active).then_some("hidden"));
    html! {
        <section id={tab.as_str()} class={class} data-tab-content={tab.as_str()} role="tabpanel">
            { body }
        </section>
    }
}

pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let dashboard = state.dashboard();
    let active = dashboard.tabs().active();
    let prefs = &*state.prefs;
    let contract = AttrValue::from(prefs.contract_mode().text());

    html! {
        <div class="app-shell">
            <Header
                status={AttrValue::from(dashboard.status().message())}
                gate={dashboard.gate()}
                on_toggle_sound={handlers.toggle_sound.clone()}
            />
            <TabBar active={active} on_select={handlers.select_tab.clone()} />
            <main id="main">
                { panel(TabId::Dashboard, active, html! {
                    <ProgressPanel
                        view={dashboard.progress()}
                        on_update={handlers.update.clone()}
                        on_reset={handlers.reset.clone()}
                    />
                }) }
                { panel(TabId::Contract, active, html! {
                    <ContractPanel
                        text={contract}
                        on_download={handlers.download.clone()}
                        on_copy={handlers.copy.clone()}
                    />
                }) }
                { panel(TabId::Settings, active, html! {
                    <SettingsPanel
                        theme={AttrValue::from(prefs.theme.clone())}
                        contract_mode={AttrValue::from(prefs.contract_mode.clone())}
                        auto_sound={prefs.auto_sound}
                        on_theme_change={handlers.theme_change.clone()}
                        on_contract_mode_change={handlers.contract_mode_change.clone()}
                        on_auto_sound_change={handlers.auto_sound_change.clone()}
                    />
                }) }
            </main>
        </div>
    }
}
