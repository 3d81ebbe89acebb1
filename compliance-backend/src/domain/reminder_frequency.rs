// compliance-backend/src/domain/reminder_frequency.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// リマインダーの繰り返し周期を表すenum
///
/// 周期が設定されていない状態（None）は有効な状態であり、
/// どの周期とも区別される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReminderFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annually,
}

impl ReminderFrequency {
    /// 文字列からReminderFrequencyに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Daily" => Some(Self::Daily),
            "Weekly" => Some(Self::Weekly),
            "Monthly" => Some(Self::Monthly),
            "Quarterly" => Some(Self::Quarterly),
            "Annually" => Some(Self::Annually),
            _ => None,
        }
    }

    /// ReminderFrequencyを文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
        }
    }

    /// すべての有効な周期を取得
    pub fn all() -> Vec<Self> {
        vec![
            Self::Daily,
            Self::Weekly,
            Self::Monthly,
            Self::Quarterly,
            Self::Annually,
        ]
    }
}

impl fmt::Display for ReminderFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReminderFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| {
            format!(
                "Invalid reminder frequency: '{}'. Valid frequencies are: {}",
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
impl From<ReminderFrequency> for String {
    fn from(frequency: ReminderFrequency) -> Self {
        frequency.as_str().to_string()
    }
}

impl TryFrom<&str> for ReminderFrequency {
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
        assert_eq!(
            ReminderFrequency::from_str("Daily"),
            Some(ReminderFrequency::Daily)
        );
        assert_eq!(
            ReminderFrequency::from_str("Quarterly"),
            Some(ReminderFrequency::Quarterly)
        );
        assert_eq!(
            ReminderFrequency::from_str("Annually"),
            Some(ReminderFrequency::Annually)
        );
        assert_eq!(ReminderFrequency::from_str("Biweekly"), None);
        assert_eq!(ReminderFrequency::from_str("daily"), None);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(ReminderFrequency::Monthly.to_string(), "Monthly");
        assert_eq!(ReminderFrequency::Annually.to_string(), "Annually");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "Weekly".parse::<ReminderFrequency>().unwrap(),
            ReminderFrequency::Weekly
        );
        assert!("Hourly".parse::<ReminderFrequency>().is_err());
    }

    #[test]
    fn test_serde_optional() {
        // 周期なし（null）と周期ありは区別される
        let none: Option<ReminderFrequency> = serde_json::from_str("null").unwrap();
        assert_eq!(none, None);

        let some: Option<ReminderFrequency> = serde_json::from_str(r#""Quarterly""#).unwrap();
        assert_eq!(some, Some(ReminderFrequency::Quarterly));
    }
}
