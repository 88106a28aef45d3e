pub mod bar_chart;
pub mod dashboard_shell;
pub mod language_toggle;
pub mod logo;
pub mod modal;
pub mod offer_modal;
pub mod public_shell;
pub mod search_box;
pub mod stat_card;
pub mod status_badge;
