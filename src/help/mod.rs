//! Indicator help
//!
//! A static table of indicator key → {display name, category, documentation
//! path}, with category filtering, search and documentation URLs.
//!
//! The table is an explicit [`HelpCatalog`] value: build it once (usually
//! with [`HelpCatalog::bundled`]) and pass it by reference.
//!
//! ```
//! use talib_facade::help::{Category, HelpCatalog, HelpRequest, HelpOutput};
//!
//! let catalog = HelpCatalog::bundled()?;
//! let sma = catalog.resource("sma")?;
//! assert_eq!(sma.url(), "https://madbomber.github.io/sqa-tai/indicators/overlap/sma/");
//!
//! let momentum = catalog.by_category(Category::MomentumIndicators);
//! assert!(momentum.contains_key("rsi"));
//!
//! let found = catalog.query(&HelpRequest::search("moving average"))?;
//! assert!(matches!(found, HelpOutput::Listing(ref m) if m.contains_key("sma")));
//! # Ok::<(), talib_facade::Error>(())
//! ```

mod resource;

pub use resource::Resource;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Base URL for the documentation site
pub const BASE_URL: &str = "https://madbomber.github.io/sqa-tai";

/// Key that selects the whole table in [`HelpCatalog::query`].
pub const ALL: &str = "all";

const BUNDLED: &str = include_str!("data.json");

/// Indicator group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    OverlapStudies,
    MomentumIndicators,
    VolatilityIndicators,
    VolumeIndicators,
    PriceTransform,
    CycleIndicators,
    StatisticalFunctions,
    PatternRecognition,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::OverlapStudies,
        Category::MomentumIndicators,
        Category::VolatilityIndicators,
        Category::VolumeIndicators,
        Category::PriceTransform,
        Category::CycleIndicators,
        Category::StatisticalFunctions,
        Category::PatternRecognition,
    ];

    /// Snake-case tag as stored in the table.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::OverlapStudies => "overlap_studies",
            Category::MomentumIndicators => "momentum_indicators",
            Category::VolatilityIndicators => "volatility_indicators",
            Category::VolumeIndicators => "volume_indicators",
            Category::PriceTransform => "price_transform",
            Category::CycleIndicators => "cycle_indicators",
            Category::StatisticalFunctions => "statistical_functions",
            Category::PatternRecognition => "pattern_recognition",
        }
    }

    /// Title-cased label, e.g. `Momentum Indicators`.
    pub fn label(self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(&[' ', '-'][..], "_");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown category: {s}")))
    }
}

/// One row of the help table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub name: String,
    pub category: Category,
    pub path: String,
}

impl IndicatorMeta {
    /// `BASE_URL/path/`
    pub fn url(&self) -> String {
        documentation_url(&self.path)
    }
}

pub(crate) fn documentation_url(path: &str) -> String {
    format!("{BASE_URL}/{path}/")
}

/// Read-only help table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpCatalog {
    indicators: BTreeMap<String, IndicatorMeta>,
}

impl HelpCatalog {
    /// The table compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let indicators: BTreeMap<String, IndicatorMeta> = serde_json::from_str(json)?;
        tracing::debug!(count = indicators.len(), "loaded help catalog");
        Ok(Self { indicators })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&IndicatorMeta> {
        self.indicators.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndicatorMeta)> {
        self.indicators.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Help resource for one indicator.
    pub fn resource(&self, key: &str) -> Result<Resource> {
        let meta = self
            .get(key)
            .ok_or_else(|| Error::UnknownIndicator(key.to_string()))?;
        Ok(Resource::new(key, &meta.name, meta.category, &meta.path))
    }

    /// Key → URL for every indicator.
    pub fn all(&self) -> BTreeMap<String, String> {
        self.urls(|_, _| true)
    }

    /// Key → URL for the indicators of one category.
    pub fn by_category(&self, category: Category) -> BTreeMap<String, String> {
        self.urls(|_, meta| meta.category == category)
    }

    /// Key → URL for indicators whose key or display name contains `query`,
    /// ignoring case.
    pub fn search(&self, query: &str) -> BTreeMap<String, String> {
        let query = query.to_lowercase();
        self.urls(|key, meta| {
            key.to_lowercase().contains(&query) || meta.name.to_lowercase().contains(&query)
        })
    }

    fn urls<F>(&self, mut keep: F) -> BTreeMap<String, String>
    where
        F: FnMut(&str, &IndicatorMeta) -> bool,
    {
        self.indicators
            .iter()
            .filter(|(k, v)| keep(k, v))
            .map(|(k, v)| (k.clone(), v.url()))
            .collect()
    }

    /// Answer a [`HelpRequest`].
    ///
    /// Precedence: the [`ALL`] key, then category, then search, then a
    /// single-indicator lookup (which alone honors `open` and `format`).
    pub fn query(&self, request: &HelpRequest) -> Result<HelpOutput> {
        if request.indicator.as_deref() == Some(ALL) {
            return Ok(HelpOutput::Listing(self.all()));
        }
        if let Some(category) = request.category {
            return Ok(HelpOutput::Listing(self.by_category(category)));
        }
        if let Some(query) = &request.search {
            return Ok(HelpOutput::Listing(self.search(query)));
        }

        let key = request.indicator.as_deref().unwrap_or_default();
        let resource = self.resource(key)?;
        if request.open {
            resource.open();
        }
        Ok(match request.format {
            HelpFormat::Uri => HelpOutput::Uri(resource.uri()?),
            HelpFormat::Hash => HelpOutput::Summary(HelpSummary {
                name: resource.name().to_string(),
                category: resource.category(),
                url: resource.url().to_string(),
            }),
            HelpFormat::Resource => HelpOutput::Resource(resource),
        })
    }
}

/// Shape of a single-indicator answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpFormat {
    #[default]
    Resource,
    Uri,
    Hash,
}

impl FromStr for HelpFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "resource" => Ok(Self::Resource),
            "uri" | "url" => Ok(Self::Uri),
            "hash" => Ok(Self::Hash),
            other => Err(Error::InvalidParameter(format!("unknown help format: {other}"))),
        }
    }
}

/// A help query: an indicator key or a listing option, plus output options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpRequest {
    pub indicator: Option<String>,
    pub category: Option<Category>,
    pub search: Option<String>,
    pub open: bool,
    pub format: HelpFormat,
}

impl HelpRequest {
    pub fn indicator(key: impl Into<String>) -> Self {
        Self {
            indicator: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn all() -> Self {
        Self::indicator(ALL)
    }

    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: HelpFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// `format: Hash` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpSummary {
    pub name: String,
    pub category: Category,
    pub url: String,
}

/// Answer to a [`HelpRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum HelpOutput {
    Resource(Resource),
    Uri(Url),
    Summary(HelpSummary),
    Listing(BTreeMap<String, String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> HelpCatalog {
        HelpCatalog::bundled().unwrap()
    }

    #[test]
    fn test_base_url_configured() {
        assert_eq!(BASE_URL, "https://madbomber.github.io/sqa-tai");
    }

    #[test]
    fn test_bundled_table_loads() {
        let catalog = catalog();
        assert!(!catalog.is_empty());
        assert!(catalog.len() > 100);
    }

    #[test]
    fn test_every_category_is_populated() {
        let catalog = catalog();
        for category in Category::ALL {
            assert!(
                !catalog.by_category(category).is_empty(),
                "{category} has no indicators"
            );
        }
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::MomentumIndicators.label(), "Momentum Indicators");
        assert_eq!(Category::PriceTransform.label(), "Price Transform");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "momentum_indicators".parse::<Category>().unwrap(),
            Category::MomentumIndicators
        );
        assert_eq!(
            "Pattern Recognition".parse::<Category>().unwrap(),
            Category::PatternRecognition
        );
        assert!("astrology".parse::<Category>().is_err());
    }

    #[test]
    fn test_help_format_from_str() {
        assert_eq!("uri".parse::<HelpFormat>().unwrap(), HelpFormat::Uri);
        assert_eq!("HASH".parse::<HelpFormat>().unwrap(), HelpFormat::Hash);
        assert!("xml".parse::<HelpFormat>().is_err());
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let json = r#"{"foo": {"name": "Foo", "category": "astrology", "path": "x/foo"}}"#;
        assert!(matches!(HelpCatalog::from_json(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_custom_table() {
        let json = r#"{"foo": {"name": "Foo Bar", "category": "volume_indicators", "path": "x/foo"}}"#;
        let catalog = HelpCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.all().get("foo").map(String::as_str),
            Some("https://madbomber.github.io/sqa-tai/x/foo/")
        );
    }

    #[test]
    fn test_query_precedence_all_wins() {
        let catalog = catalog();
        let request = HelpRequest {
            indicator: Some(ALL.to_string()),
            category: Some(Category::VolumeIndicators),
            ..HelpRequest::default()
        };
        match catalog.query(&request).unwrap() {
            HelpOutput::Listing(map) => assert_eq!(map.len(), catalog.len()),
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[test]
    fn test_query_without_indicator_is_unknown() {
        let catalog = catalog();
        assert!(matches!(
            catalog.query(&HelpRequest::default()),
            Err(Error::UnknownIndicator(_))
        ));
    }
}
