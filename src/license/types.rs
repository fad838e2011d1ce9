//! License types and their validity periods.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::LicenseError;

/// A PRO license grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseType {
    /// 30 days.
    #[serde(rename = "1_month")]
    OneMonth,
    /// 180 days.
    #[serde(rename = "6_months")]
    SixMonths,
    /// 365 days.
    #[serde(rename = "1_year")]
    OneYear,
}

impl LicenseType {
    pub const ALL: [LicenseType; 3] = [Self::OneMonth, Self::SixMonths, Self::OneYear];

    /// Canonical name, as used in config, CLI and JSON.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1_month",
            Self::SixMonths => "6_months",
            Self::OneYear => "1_year",
        }
    }

    /// Two-character code embedded in keys.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
        }
    }

    /// Reverse of [`LicenseType::code`]. Codes are case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    #[must_use]
    pub fn days(&self) -> i64 {
        match self {
            Self::OneMonth => 30,
            Self::SixMonths => 180,
            Self::OneYear => 365,
        }
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::days(self.days())
    }

    /// Validity period in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        self.days() * 24 * 60 * 60 * 1000
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseType {
    type Err = LicenseError;

    /// Parse a canonical name. Unknown names are an error, never a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| LicenseError::UnknownLicenseType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(LicenseType::OneMonth.code(), "1M");
        assert_eq!(LicenseType::SixMonths.code(), "6M");
        assert_eq!(LicenseType::OneYear.code(), "1Y");

        for t in LicenseType::ALL {
            assert_eq!(LicenseType::from_code(t.code()), Some(t));
        }
        assert_eq!(LicenseType::from_code("1m"), None);
        assert_eq!(LicenseType::from_code("2Y"), None);
    }

    #[test]
    fn test_durations() {
        assert_eq!(LicenseType::OneMonth.duration_ms(), 30 * 24 * 60 * 60 * 1000);
        assert_eq!(LicenseType::SixMonths.duration_ms(), 180 * 24 * 60 * 60 * 1000);
        assert_eq!(LicenseType::OneYear.duration_ms(), 365 * 24 * 60 * 60 * 1000);

        for t in LicenseType::ALL {
            assert_eq!(t.duration().num_milliseconds(), t.duration_ms());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("1_month".parse::<LicenseType>().unwrap(), LicenseType::OneMonth);
        assert_eq!("6_months".parse::<LicenseType>().unwrap(), LicenseType::SixMonths);
        assert_eq!(" 1_year ".parse::<LicenseType>().unwrap(), LicenseType::OneYear);
    }

    #[test]
    fn test_parse_unknown_is_error() {
        let err = "lifetime".parse::<LicenseType>().unwrap_err();
        assert!(matches!(err, LicenseError::UnknownLicenseType(ref s) if s == "lifetime"));

        assert!("".parse::<LicenseType>().is_err());
        assert!("1M".parse::<LicenseType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&LicenseType::SixMonths).unwrap();
        assert_eq!(json, r#""6_months""#);

        let parsed: LicenseType = serde_json::from_str(r#""1_year""#).unwrap();
        assert_eq!(parsed, LicenseType::OneYear);

        assert_eq!(LicenseType::OneMonth.to_string(), "1_month");
    }
}
