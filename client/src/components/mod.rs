pub mod chat_trigger;
pub mod chat_widget;
pub mod consent_controls;
pub mod identify_modal;
pub mod site_nav;
pub mod theme_toggle;
