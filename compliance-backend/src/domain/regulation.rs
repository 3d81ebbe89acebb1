// compliance-backend/src/domain/regulation.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 要件が紐づく規制の種別を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regulation {
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "HIPAA")]
    Hipaa,
    #[serde(rename = "PCI DSS")]
    PciDss,
    Other,
}

impl Regulation {
    /// 文字列からRegulationに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GDPR" => Some(Self::Gdpr),
            "HIPAA" => Some(Self::Hipaa),
            "PCI DSS" => Some(Self::PciDss),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Regulationを文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gdpr => "GDPR",
            Self::Hipaa => "HIPAA",
            Self::PciDss => "PCI DSS",
            Self::Other => "Other",
        }
    }

    /// すべての有効な規制種別を取得
    pub fn all() -> Vec<Self> {
        vec![Self::Gdpr, Self::Hipaa, Self::PciDss, Self::Other]
    }
}

impl fmt::Display for Regulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Regulation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| {
            format!(
                "Invalid regulation: '{}'. Valid regulations are: {}",
                s,
                Self::all()
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

// データベースとの変換用
impl From<Regulation> for String {
    fn from(regulation: Regulation) -> Self {
        regulation.as_str().to_string()
    }
}

impl TryFrom<&str> for Regulation {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Regulation::from_str("GDPR"), Some(Regulation::Gdpr));
        assert_eq!(Regulation::from_str("HIPAA"), Some(Regulation::Hipaa));
        assert_eq!(Regulation::from_str("PCI DSS"), Some(Regulation::PciDss));
        assert_eq!(Regulation::from_str("Other"), Some(Regulation::Other));
        // 列挙外は受け付けない
        assert_eq!(Regulation::from_str("FERPA"), None);
        assert_eq!(Regulation::from_str("gdpr"), None);
        assert_eq!(Regulation::from_str(""), None);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(Regulation::Gdpr.to_string(), "GDPR");
        assert_eq!(Regulation::PciDss.to_string(), "PCI DSS");
    }

    #[test]
    fn test_parse_error_lists_valid_values() {
        let err = "FERPA".parse::<Regulation>().unwrap_err();
        assert!(err.contains("FERPA"));
        assert!(err.contains("GDPR"));
        assert!(err.contains("PCI DSS"));
    }

    #[test]
    fn test_serde() {
        let regulation = Regulation::PciDss;
        let serialized = serde_json::to_string(&regulation).unwrap();
        assert_eq!(serialized, r#""PCI DSS""#);

        let deserialized: Regulation = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, Regulation::PciDss);
    }
}
