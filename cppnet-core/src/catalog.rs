//! Read-only offer and statistics catalog supplied to every page.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const DEFAULT_CATALOG_DATA: &str = include_str!("../data/catalog.json");

/// Base URL of generated tracking links.
pub const TRACKING_BASE_URL: &str = "https://cpanetwork.com/click";
/// Affiliate id baked into the demo tracking links.
pub const DEMO_AFFILIATE_ID: u32 = 1234;

static SHARED: Lazy<Catalog> = Lazy::new(Catalog::load_from_static);

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate offer id {0}")]
    DuplicateOffer(OfferId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(pub u32);

impl std::fmt::Display for OfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// How an offer pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayoutModel {
    Cpi,
    Cpl,
    Cpa,
    Cps,
}

impl PayoutModel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpi => "CPI",
            Self::Cpl => "CPL",
            Self::Cpa => "CPA",
            Self::Cps => "CPS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Active,
    Private,
    Paused,
}

impl OfferStatus {
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Active => "status.active",
            Self::Private => "status.private",
            Self::Paused => "status.paused",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub name: String,
    pub payout_cents: i64,
    pub model: PayoutModel,
    #[serde(default)]
    pub geo: Vec<String>,
    pub category: String,
    pub status: OfferStatus,
    /// Conversion rate in percent.
    pub conversion_rate: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl Offer {
    #[must_use]
    pub fn geo_label(&self) -> String {
        self.geo.join(", ")
    }

    /// First letter of the name, shown when the offer has no image.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    #[must_use]
    pub fn tracking_link(&self, affiliate_id: u32) -> String {
        format!("{TRACKING_BASE_URL}?offer_id={}&aff_id={affiliate_id}", self.id)
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.id.to_string().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AffiliateStats {
    pub earnings_cents: i64,
    #[serde(default)]
    pub earnings_trend: Option<f64>,
    pub balance_cents: i64,
    pub conversions: u64,
    #[serde(default)]
    pub conversions_trend: Option<f64>,
    pub epc_cents: i64,
    #[serde(default)]
    pub epc_trend: Option<f64>,
    #[serde(default)]
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdminStats {
    pub revenue_cents: i64,
    #[serde(default)]
    pub revenue_trend: Option<f64>,
    pub active_offers: u64,
    pub active_affiliates: u64,
    #[serde(default)]
    pub affiliates_trend: Option<f64>,
    pub pending_payouts_cents: i64,
    #[serde(default)]
    pub series: Vec<SeriesPoint>,
}

/// Headline figures on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NetworkHighlights {
    pub affiliates: String,
    pub paid_out: String,
    pub offers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutEvent {
    pub user: String,
    pub amount_cents: i64,
    pub method: String,
    pub minutes_ago: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    offers: Vec<Offer>,
    #[serde(default)]
    affiliate_stats: AffiliateStats,
    #[serde(default)]
    admin_stats: AdminStats,
    #[serde(default)]
    network: NetworkHighlights,
    #[serde(default)]
    recent_payouts: Vec<PayoutEvent>,
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or two offers share an id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        let mut seen = std::collections::BTreeSet::new();
        for offer in &catalog.offers {
            if !seen.insert(offer.id) {
                return Err(CatalogError::DuplicateOffer(offer.id));
            }
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_CATALOG_DATA).unwrap_or_else(|err| {
            log::error!("failed to load catalog: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    #[must_use]
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    #[must_use]
    pub fn offer(&self, id: OfferId) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.id == id)
    }

    #[must_use]
    pub fn featured(&self, count: usize) -> &[Offer] {
        &self.offers[..count.min(self.offers.len())]
    }

    /// Offers whose name contains `term` (case-insensitive) or whose id
    /// contains it. A blank term matches everything.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Offer> {
        let needle = term.trim().to_lowercase();
        self.offers
            .iter()
            .filter(|offer| needle.is_empty() || offer.matches(&needle))
            .collect()
    }

    #[must_use]
    pub const fn affiliate_stats(&self) -> &AffiliateStats {
        &self.affiliate_stats
    }

    #[must_use]
    pub const fn admin_stats(&self) -> &AdminStats {
        &self.admin_stats
    }

    #[must_use]
    pub const fn network(&self) -> &NetworkHighlights {
        &self.network
    }

    #[must_use]
    pub fn recent_payouts(&self) -> &[PayoutEvent] {
        &self.recent_payouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_name_case_insensitively_and_id() {
        let catalog = Catalog::load_from_static();
        let names: Vec<_> = catalog.search("KING").iter().map(|o| o.id).collect();
        assert_eq!(names, vec![OfferId(1)]);
        let by_id: Vec<_> = catalog.search("4").iter().map(|o| o.id).collect();
        assert_eq!(by_id, vec![OfferId(4)]);
        assert_eq!(catalog.search("   ").len(), catalog.offers().len());
        assert!(catalog.search("no such offer").is_empty());
    }

    #[test]
    fn featured_is_clamped_to_catalog_size() {
        let catalog = Catalog::load_from_static();
        assert_eq!(catalog.featured(4).len(), 4);
        assert_eq!(catalog.featured(50).len(), catalog.offers().len());
        assert!(Catalog::default().featured(4).is_empty());
    }

    #[test]
    fn tracking_link_embeds_offer_and_affiliate() {
        let catalog = Catalog::load_from_static();
        let offer = catalog.offer(OfferId(3)).unwrap();
        assert_eq!(
            offer.tracking_link(DEMO_AFFILIATE_ID),
            "https://cpanetwork.com/click?offer_id=3&aff_id=1234"
        );
        assert_eq!(offer.initial(), 'D');
        assert_eq!(offer.geo_label(), "DE, FR");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"offers": [
            {"id": 7, "name": "A", "payout_cents": 1, "model": "CPA", "category": "x", "status": "active", "conversion_rate": 1.0},
            {"id": 7, "name": "B", "payout_cents": 1, "model": "CPL", "category": "x", "status": "paused", "conversion_rate": 1.0}
        ]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateOffer(OfferId(7))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Catalog::from_json("{\"offers\": 5}"),
            Err(CatalogError::Json(_))
        ));
    }
}
