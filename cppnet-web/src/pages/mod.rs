pub mod admin_dashboard;
pub mod advertisers;
pub mod affiliate_dashboard;
pub mod affiliates;
pub mod landing;
pub mod login;
pub mod marketplace;
pub mod not_found;
pub mod offer_manager;
pub mod placeholder;
pub mod roster;
