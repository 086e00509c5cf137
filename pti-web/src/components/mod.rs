pub mod contract_panel;
pub mod header;
pub mod progress_panel;
pub mod settings_panel;
pub mod tab_bar;
