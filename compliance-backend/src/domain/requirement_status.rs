// compliance-backend/src/domain/requirement_status.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// コンプライアンス要件のライフサイクル状態を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "Not Applicable")]
    NotApplicable,
}

impl RequirementStatus {
    /// 文字列からRequirementStatusに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            "Not Applicable" => Some(Self::NotApplicable),
            _ => None,
        }
    }

    /// RequirementStatusを文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::NotApplicable => "Not Applicable",
        }
    }

    /// すべての有効なステータスを取得
    pub fn all() -> Vec<Self> {
        vec![
            Self::Pending,
            Self::InProgress,
            Self::Completed,
            Self::NotApplicable,
        ]
    }

    /// ステータスが完了状態かチェック
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// ステータスが対応中（未完了かつ対象）かチェック
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

impl Default for RequirementStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RequirementStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| {
            format!(
                "Invalid status: '{}'. Valid statuses are: {}",
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
impl From<RequirementStatus> for String {
    fn from(status: RequirementStatus) -> Self {
        status.as_str().to_string()
    }
}

impl TryFrom<&str> for RequirementStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
