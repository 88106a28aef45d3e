//! CPP Network portal core
//!
//! Platform-agnostic navigation state machine, render plan, static catalog
//! and dictionary for the CPP Network affiliate portal. Nothing in this crate
//! touches the browser.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod i18n;
pub mod page;
pub mod plan;
pub mod role;
pub mod roster;
pub mod state;

// Re-export commonly used types
pub use catalog::{
    AdminStats, AffiliateStats, Catalog, CatalogError, DEMO_AFFILIATE_ID, NetworkHighlights,
    Offer, OfferId, OfferStatus, PayoutEvent, PayoutModel, SeriesPoint,
};
pub use i18n::{Dictionary, DictionaryError, Locale, TextDirection, t, tr};
pub use page::{MENU_CATALOG, Menu, Page, PageGroup, menu_for};
pub use plan::{RenderPlan, Shell, View, render_plan};
pub use role::Role;
pub use roster::{ROSTER_SEED, RosterEntry, affiliate_roster};
pub use state::{Action, AppState, TransitionError};
