//! Named settings
//!
//! Settings are a flat key-value store: the currency used for display, the
//! sync token and the date of the last successful sync.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The settings the application knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingName {
    Currency,
    SyncToken,
    LastSyncDate,
}

impl SettingName {
    pub const ALL: [SettingName; 3] = [Self::Currency, Self::SyncToken, Self::LastSyncDate];

    /// Key used in storage and files
    pub fn key(&self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::SyncToken => "syncToken",
            Self::LastSyncDate => "lastSyncDate",
        }
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.key() == s)
            .ok_or_else(|| format!("Unknown setting: {}", s))
    }
}

/// A single setting value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub name: SettingName,
    pub value: String,
}

impl Setting {
    pub fn new(name: SettingName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Self::Usd, Self::Eur, Self::Gbp];

    /// ISO code stored in the `currency` setting
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }

    /// Resolve a stored setting value; unknown or empty values fall back to USD
    pub fn from_setting(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s) || c.symbol() == s)
            .ok_or_else(|| format!("Unknown currency: {} (expected USD, EUR or GBP)", s))
    }
}
