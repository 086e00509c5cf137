use pti_core::{TabId, TabSet};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub active: TabId,
    pub on_select: Callback<TabId>,
}

#[function_component(TabBar)]
pub fn tab_bar(p: &Props) -> Html {
    html! {
        <nav class="tabs" role="tablist">
            { for TabSet::new(p.active).states().map(|(tab, active)| {
                let on_click = {
                    let cb = p.on_select.clone();
                    Callback::from(move |_| cb.emit(tab))
                };
                html! {
                    <button
                        class={classes!("tab", active.then_some("active"))}
                        data-tab={tab.as_str()}
                        role="tab"
                        aria-selected={active.to_string()}
                        onclick={on_click}
                    >
                        { tab.label() }
                    </button>
                }
            }) }
        </nav>
    }
}
