//! Configuration types for tax regimes.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the engine deployment, read from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name shown on exported payslips.
    pub name: String,
    /// The version of the configuration set.
    pub version: String,
    /// ISO currency code of every monetary amount (e.g., "INR").
    pub currency: String,
    /// Code of the regime used when a caller does not name one.
    pub default_regime: String,
    /// Settings for the advisory collaborator.
    #[serde(default)]
    pub advisor: AdvisorSettings,
}

/// Settings for the generative-text advisory service.
///
/// The API key is not part of the file; it is read from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorSettings {
    /// Base URL of the text-generation service.
    #[serde(default = "default_advisor_base_url")]
    pub base_url: String,
    /// Model identifier passed to the service.
    #[serde(default = "default_advisor_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_advisor_temperature")]
    pub temperature: f32,
    /// Nucleus sampling cutoff.
    #[serde(default = "default_advisor_top_p")]
    pub top_p: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_advisor_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_advisor_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_advisor_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_advisor_temperature() -> f32 {
    0.7
}

fn default_advisor_top_p() -> f32 {
    0.95
}

fn default_advisor_timeout_secs() -> u64 {
    30
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            base_url: default_advisor_base_url(),
            model: default_advisor_model(),
            temperature: default_advisor_temperature(),
            top_p: default_advisor_top_p(),
            timeout_secs: default_advisor_timeout_secs(),
        }
    }
}

/// One marginal-rate band of a slab table.
///
/// `width` is the amount of income taxed in this band. The final band of a
/// table has no width and absorbs all remaining income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabBand {
    /// Income taxed in this band, or `None` for the unbounded final band.
    #[serde(default)]
    pub width: Option<Decimal>,
    /// Marginal rate as a fraction (0.05 for 5%).
    pub rate: Decimal,
}

impl SlabBand {
    /// Creates a bounded band.
    pub fn bounded(width: Decimal, rate: Decimal) -> Self {
        Self {
            width: Some(width),
            rate,
        }
    }

    /// Creates the unbounded final band.
    pub fn unbounded(rate: Decimal) -> Self {
        Self { width: None, rate }
    }
}

/// An ordered, validated sequence of slab bands covering `[0, ∞)`.
///
/// Construction enforces that the table is non-empty, that only the last
/// band is unbounded, that bounded widths are positive, and that rates lie
/// in `[0, 1]` and never decrease.
///
/// # Example
///
/// ```
/// use inhand_engine::config::{SlabBand, SlabTable};
/// use rust_decimal::Decimal;
///
/// let table = SlabTable::new(vec![
///     SlabBand::bounded(Decimal::from(300_000), Decimal::ZERO),
///     SlabBand::unbounded(Decimal::new(5, 2)),
/// ])
/// .unwrap();
/// assert_eq!(table.bands().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SlabBand>", into = "Vec<SlabBand>")]
pub struct SlabTable {
    bands: Vec<SlabBand>,
}

impl SlabTable {
    /// Builds a slab table, checking its invariants.
    pub fn new(bands: Vec<SlabBand>) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidSlabTable { message };

        let Some((last, bounded)) = bands.split_last() else {
            return Err(invalid("slab table must not be empty".to_string()));
        };

        if last.width.is_some() {
            return Err(invalid("final band must be unbounded".to_string()));
        }

        for (index, band) in bounded.iter().enumerate() {
            match band.width {
                None => {
                    return Err(invalid(format!(
                        "band {} is unbounded but is not the final band",
                        index + 1
                    )));
                }
                Some(width) if width <= Decimal::ZERO => {
                    return Err(invalid(format!(
                        "band {} must have a positive width, got {}",
                        index + 1,
                        width
                    )));
                }
                Some(_) => {}
            }
        }

        for (index, band) in bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
                return Err(invalid(format!(
                    "band {} rate must be between 0 and 1, got {}",
                    index + 1,
                    band.rate
                )));
            }
        }

        if let Some(index) = bands.windows(2).position(|pair| pair[1].rate < pair[0].rate) {
            return Err(invalid(format!(
                "band {} rate is lower than the band before it",
                index + 2
            )));
        }

        Ok(Self { bands })
    }

    /// Returns the bands in order, lowest income first.
    pub fn bands(&self) -> &[SlabBand] {
        &self.bands
    }
}

impl TryFrom<Vec<SlabBand>> for SlabTable {
    type Error = EngineError;

    fn try_from(bands: Vec<SlabBand>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<SlabTable> for Vec<SlabBand> {
    fn from(table: SlabTable) -> Self {
        table.bands
    }
}

/// The provident-fund contribution rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidentFundRule {
    /// Fraction of basic pay contributed (0.12 for 12%).
    pub rate: Decimal,
    /// Ceiling on the annual contribution.
    pub annual_cap: Decimal,
}

/// A complete tax regime: slabs plus every statutory constant the
/// breakdown needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    /// Short code used to select the regime (e.g., "fy2025_26").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Assessment-year label printed on payslips (e.g., "AY 2026-27").
    pub assessment_year: String,
    /// Marginal-rate slabs.
    pub slabs: SlabTable,
    /// Taxable income at or below which no tax is due.
    pub rebate_threshold: Decimal,
    /// Surcharge applied to the slab tax (0.04 for 4%).
    pub cess_rate: Decimal,
    /// Flat deduction subtracted from gross before tax.
    pub standard_deduction: Decimal,
    /// Provident-fund contribution rule.
    pub provident_fund: ProvidentFundRule,
    /// Flat professional tax charged every month.
    pub professional_tax_monthly: Decimal,
}

impl RegimeConfig {
    /// Checks the regime's monetary constants and fractions.
    ///
    /// The slab table is already valid by construction.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::InvalidRegime {
            code: self.code.clone(),
            message: message.to_string(),
        };

        if self.code.trim().is_empty() {
            return Err(invalid("code must not be empty"));
        }
        if self.rebate_threshold < Decimal::ZERO {
            return Err(invalid("rebate_threshold must not be negative"));
        }
        if self.cess_rate < Decimal::ZERO || self.cess_rate > Decimal::ONE {
            return Err(invalid("cess_rate must be between 0 and 1"));
        }
        if self.standard_deduction < Decimal::ZERO {
            return Err(invalid("standard_deduction must not be negative"));
        }
        if self.provident_fund.rate < Decimal::ZERO || self.provident_fund.rate > Decimal::ONE {
            return Err(invalid("provident_fund.rate must be between 0 and 1"));
        }
        if self.provident_fund.annual_cap < Decimal::ZERO {
            return Err(invalid("provident_fund.annual_cap must not be negative"));
        }
        if self.professional_tax_monthly < Decimal::ZERO {
            return Err(invalid("professional_tax_monthly must not be negative"));
        }

        Ok(())
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    /// Regimes keyed by code.
    regimes: BTreeMap<String, RegimeConfig>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    ///
    /// Fails when the metadata names a default regime that is not present.
    pub fn new(metadata: EngineMetadata, regimes: Vec<RegimeConfig>) -> EngineResult<Self> {
        let regimes: BTreeMap<String, RegimeConfig> = regimes
            .into_iter()
            .map(|regime| (regime.code.clone(), regime))
            .collect();

        if !regimes.contains_key(&metadata.default_regime) {
            return Err(EngineError::RegimeNotFound {
                code: metadata.default_regime.clone(),
            });
        }

        Ok(Self { metadata, regimes })
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns all regimes, ordered by code.
    pub fn regimes(&self) -> &BTreeMap<String, RegimeConfig> {
        &self.regimes
    }
}
