use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::RiskProfile;
use crate::types::Percent;

/// Expected return used for an asset name the catalog does not know.
pub const DEFAULT_EXPECTED_RETURN: Percent = dec!(5.0);

/// Risk score used for an asset name the catalog does not know.
pub const DEFAULT_RISK_SCORE: u8 = 5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Asset classes the catalog carries estimates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    #[serde(rename = "Government Bonds")]
    GovernmentBonds,
    #[serde(rename = "Corporate Bonds")]
    CorporateBonds,
    #[serde(rename = "Large Cap Stocks")]
    LargeCapStocks,
    #[serde(rename = "Mid Cap Stocks")]
    MidCapStocks,
    #[serde(rename = "Small Cap Stocks")]
    SmallCapStocks,
    #[serde(rename = "International Stocks")]
    InternationalStocks,
    #[serde(rename = "Emerging Markets")]
    EmergingMarkets,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Commodities")]
    Commodities,
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "High-Yield Bonds")]
    HighYieldBonds,
    #[serde(rename = "Treasury Inflation-Protected Securities")]
    Tips,
}

/// Static estimates for one asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetClassSpec {
    /// Annual return estimates in percent, indexed by risk tier
    /// (0 = conservative, 1 = balanced, 2 = aggressive)
    pub return_range: [Percent; 3],
    /// Risk score on a 1-10 scale
    pub risk_score: u8,
}

/// Result of looking an asset up by name, with defaults applied when the
/// name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetLookup {
    pub asset: Option<AssetClass>,
    pub expected_return: Percent,
    pub risk_score: u8,
}

impl AssetLookup {
    pub fn is_known(&self) -> bool {
        self.asset.is_some()
    }
}

/// One row of the catalog as exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub conservative_return: Percent,
    pub balanced_return: Percent,
    pub aggressive_return: Percent,
    pub risk_score: u8,
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

const GOVERNMENT_BONDS: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(1.5), dec!(2.5), dec!(3.5)],
    risk_score: 2,
};
const CORPORATE_BONDS: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(3.0), dec!(4.0), dec!(5.0)],
    risk_score: 3,
};
const LARGE_CAP_STOCKS: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(5.0), dec!(7.0), dec!(9.0)],
    risk_score: 5,
};
const MID_CAP_STOCKS: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(6.0), dec!(8.0), dec!(10.0)],
    risk_score: 6,
};
const SMALL_CAP_STOCKS: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(7.0), dec!(9.0), dec!(12.0)],
    risk_score: 7,
};
const INTERNATIONAL_STOCKS: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(5.5), dec!(7.5), dec!(10.5)],
    risk_score: 6,
};
const EMERGING_MARKETS: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(7.0), dec!(9.0), dec!(13.0)],
    risk_score: 8,
};
const REAL_ESTATE: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(4.0), dec!(6.0), dec!(8.0)],
    risk_score: 6,
};
const COMMODITIES: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(3.0), dec!(5.0), dec!(8.0)],
    risk_score: 7,
};
const CASH: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(0.5), dec!(1.0), dec!(1.5)],
    risk_score: 1,
};
const HIGH_YIELD_BONDS: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(4.0), dec!(5.5), dec!(7.0)],
    risk_score: 4,
};
const TIPS: AssetClassSpec = AssetClassSpec {
    return_range: [dec!(1.0), dec!(2.0), dec!(3.0)],
    risk_score: 2,
};

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

impl AssetClass {
    pub const ALL: [AssetClass; 12] = [
        AssetClass::GovernmentBonds,
        AssetClass::CorporateBonds,
        AssetClass::LargeCapStocks,
        AssetClass::MidCapStocks,
        AssetClass::SmallCapStocks,
        AssetClass::InternationalStocks,
        AssetClass::EmergingMarkets,
        AssetClass::RealEstate,
        AssetClass::Commodities,
        AssetClass::Cash,
        AssetClass::HighYieldBonds,
        AssetClass::Tips,
    ];

    /// Display name, also the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            AssetClass::GovernmentBonds => "Government Bonds",
            AssetClass::CorporateBonds => "Corporate Bonds",
            AssetClass::LargeCapStocks => "Large Cap Stocks",
            AssetClass::MidCapStocks => "Mid Cap Stocks",
            AssetClass::SmallCapStocks => "Small Cap Stocks",
            AssetClass::InternationalStocks => "International Stocks",
            AssetClass::EmergingMarkets => "Emerging Markets",
            AssetClass::RealEstate => "Real Estate",
            AssetClass::Commodities => "Commodities",
            AssetClass::Cash => "Cash",
            AssetClass::HighYieldBonds => "High-Yield Bonds",
            AssetClass::Tips => "Treasury Inflation-Protected Securities",
        }
    }

    /// Exact match on the display name.
    pub fn from_name(name: &str) -> Option<AssetClass> {
        Self::ALL.into_iter().find(|asset| asset.name() == name)
    }

    pub fn spec(self) -> &'static AssetClassSpec {
        match self {
            AssetClass::GovernmentBonds => &GOVERNMENT_BONDS,
            AssetClass::CorporateBonds => &CORPORATE_BONDS,
            AssetClass::LargeCapStocks => &LARGE_CAP_STOCKS,
            AssetClass::MidCapStocks => &MID_CAP_STOCKS,
            AssetClass::SmallCapStocks => &SMALL_CAP_STOCKS,
            AssetClass::InternationalStocks => &INTERNATIONAL_STOCKS,
            AssetClass::EmergingMarkets => &EMERGING_MARKETS,
            AssetClass::RealEstate => &REAL_ESTATE,
            AssetClass::Commodities => &COMMODITIES,
            AssetClass::Cash => &CASH,
            AssetClass::HighYieldBonds => &HIGH_YIELD_BONDS,
            AssetClass::Tips => &TIPS,
        }
    }

    pub fn expected_return(self, profile: RiskProfile) -> Percent {
        self.spec().expected_return(profile.tier())
    }

    pub fn risk_score(self) -> u8 {
        self.spec().risk_score
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AssetClassSpec {
    /// Return estimate for a tier index. Tiers past the last column use the
    /// aggressive estimate.
    pub fn expected_return(&self, tier: usize) -> Percent {
        self.return_range[tier.min(self.return_range.len() - 1)]
    }
}

/// Look an asset up by display name. Unknown names get
/// [`DEFAULT_EXPECTED_RETURN`] and [`DEFAULT_RISK_SCORE`] rather than an error.
pub fn lookup(name: &str, profile: RiskProfile) -> AssetLookup {
    match AssetClass::from_name(name) {
        Some(asset) => AssetLookup {
            asset: Some(asset),
            expected_return: asset.expected_return(profile),
            risk_score: asset.risk_score(),
        },
        None => AssetLookup {
            asset: None,
            expected_return: DEFAULT_EXPECTED_RETURN,
            risk_score: DEFAULT_RISK_SCORE,
        },
    }
}

/// The full catalog in declaration order.
pub fn catalog() -> Vec<CatalogEntry> {
    AssetClass::ALL
        .iter()
        .map(|asset| {
            let spec = asset.spec();
            CatalogEntry {
                name: asset.name().to_string(),
                conservative_return: spec.return_range[0],
                balanced_return: spec.return_range[1],
                aggressive_return: spec.return_range[2],
                risk_score: spec.risk_score,
            }
        })
        .collect()
}
