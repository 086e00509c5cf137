#![cfg(target_arch = "wasm32")]

use pti_core::{Palette, PreferenceStore, Preferences, STORAGE_KEY, TabId, Theme, palette_for};
use pti_web::app::App;
use pti_web::dom;
use pti_web::storage::WebPreferenceStore;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use std::time::Duration;
use web_sys::{Event, HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_record() {
    let storage = dom::local_storage().expect("localStorage");
    storage.remove_item(STORAGE_KEY).expect("remove record");
}

fn root_property(name: &str) -> String {
    dom::root_element()
        .expect("html element")
        .style()
        .get_property_value(name)
        .expect("read property")
}

fn stored_record() -> Option<Preferences> {
    let storage = dom::local_storage().expect("localStorage");
    storage
        .get_item(STORAGE_KEY)
        .expect("read record")
        .map(|raw| Preferences::from_json(&raw).expect("stored record decodes"))
}

async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(10)).await;
}

async fn mount_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
}

fn select(id: &str) -> HtmlSelectElement {
    dom::document()
        .expect("document")
        .get_element_by_id(id)
        .expect("select exists")
        .dyn_into()
        .expect("element is a select")
}

async fn change_select(id: &str, value: &str) {
    let el = select(id);
    el.set_value(value);
    el.dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    settle().await;
}

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    // A fresh host per mount keeps earlier apps' listeners out of the way.
    if let Some(stale) = doc.get_element_by_id("app") {
        stale.remove();
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn preferences_round_trip_through_local_storage() {
    clear_record();
    let store = WebPreferenceStore;
    assert_eq!(store.load_preferences().expect("load"), None);

    let prefs = Preferences::default()
        .with_theme("matrix")
        .with_contract_mode("detailed")
        .with_auto_sound(false);
    store.save_preferences(&prefs).expect("save");
    assert_eq!(store.load_preferences().expect("load"), Some(prefs));
    clear_record();
}

#[wasm_bindgen_test]
fn corrupted_record_reports_decode_error() {
    let storage = dom::local_storage().expect("localStorage");
    storage.set_item(STORAGE_KEY, "{oops").expect("write garbage");
    assert!(WebPreferenceStore.load_preferences().is_err());
    clear_record();
}

#[wasm_bindgen_test]
fn apply_theme_writes_custom_properties() {
    pti_web::theme::apply_theme(Theme::Night);
    let night = palette_for("night");
    assert_eq!(root_property("--accent"), night.accent);
    assert_eq!(root_property("--panel2"), night.panel2);

    pti_web::theme::apply_theme(Theme::from_name("unknown"));
    assert_eq!(root_property("--accent"), Palette::neon().accent);
}

#[wasm_bindgen_test]
async fn tab_click_shows_exactly_one_panel() {
    clear_record();
    mount_app().await;

    let doc = dom::document().expect("document");
    for tab_id in TabId::ALL {
        let tab: HtmlElement = doc
            .query_selector(&format!(".tab[data-tab='{tab_id}']"))
            .expect("query tab")
            .expect("tab exists")
            .dyn_into()
            .expect("tab is an element");
        tab.click();
        settle().await;

        let active = doc.query_selector_all(".tab.active").expect("active tabs");
        assert_eq!(active.length(), 1, "after clicking {tab_id}");
        let visible = doc
            .query_selector_all("[data-tab-content]:not(.hidden)")
            .expect("visible panels");
        assert_eq!(visible.length(), 1, "after clicking {tab_id}");
        let panel = doc.get_element_by_id(tab_id.as_str()).expect("panel exists");
        assert!(!panel.class_list().contains("hidden"), "{tab_id} panel shown");
    }
}

#[wasm_bindgen_test]
async fn theme_change_saves_record_and_repaints_root() {
    clear_record();
    mount_app().await;

    change_select("themeSelect", "matrix").await;
    let saved = stored_record().expect("theme change writes the record");
    assert_eq!(saved.theme, "matrix");
    assert_eq!(saved.contract_mode, "simple");
    assert!(saved.auto_sound);
    let matrix = palette_for("matrix");
    assert_eq!(root_property("--accent"), matrix.accent);
    assert_eq!(root_property("--bg1"), matrix.bg1);
    clear_record();
}

#[wasm_bindgen_test]
async fn contract_mode_change_saves_record_and_swaps_text() {
    clear_record();
    mount_app().await;

    change_select("contractMode", "detailed").await;
    let saved = stored_record().expect("mode change writes the record");
    assert_eq!(saved.contract_mode, "detailed");
    let viewer = dom::document()
        .expect("document")
        .get_element_by_id("contractViewer")
        .expect("contract viewer");
    let text = viewer.text_content().unwrap_or_default();
    assert!(text.contains("(Detailed)"), "viewer shows {text}");
    clear_record();
}

#[wasm_bindgen_test]
async fn auto_sound_change_alone_does_not_save() {
    clear_record();
    mount_app().await;

    let checkbox: HtmlInputElement = dom::document()
        .expect("document")
        .get_element_by_id("autoSound")
        .expect("autosound checkbox")
        .dyn_into()
        .expect("element is an input");
    checkbox.set_checked(false);
    checkbox
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    settle().await;
    assert_eq!(stored_record(), None);

    // The unchecked value rides along with the next saved change.
    change_select("themeSelect", "night").await;
    let saved = stored_record().expect("theme change writes the record");
    assert!(!saved.auto_sound);
    assert_eq!(saved.theme, "night");
    clear_record();
}

#[wasm_bindgen_test]
async fn stored_record_is_restored_on_mount() {
    let storage = dom::local_storage().expect("localStorage");
    storage
        .set_item(
            STORAGE_KEY,
            r#"{"theme":"night","contractMode":"detailed","autoSound":false}"#,
        )
        .expect("seed record");
    mount_app().await;

    let night = palette_for("night");
    assert_eq!(root_property("--accent"), night.accent);
    assert_eq!(root_property("--panel"), night.panel);
    assert_eq!(select("themeSelect").value(), "night");
    assert_eq!(select("contractMode").value(), "detailed");
    let checkbox: HtmlInputElement = dom::document()
        .expect("document")
        .get_element_by_id("autoSound")
        .expect("autosound checkbox")
        .dyn_into()
        .expect("element is an input");
    assert!(!checkbox.checked());
    clear_record();
}
