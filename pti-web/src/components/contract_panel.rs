use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub text: AttrValue,
    pub on_download: Callback<()>,
    pub on_copy: Callback<()>,
}

#[function_component(ContractPanel)]
pub fn contract_panel(p: &Props) -> Html {
    let on_download = {
        let cb = p.on_download.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_copy = {
        let cb = p.on_copy.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="contract-panel">
            <pre id="contractViewer" class="contract-viewer">{ p.text.clone() }</pre>
            <div class="controls">
                <button id="downloadContract" class="btn" onclick={on_download}>{ "Download" }</button>
                <button id="copyContract" class="btn btn-ghost" onclick={on_copy}>{ "Copy" }</button>
            </div>
        </div>
    }
}
