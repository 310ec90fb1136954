use std::fmt;

use serde::{Deserialize, Serialize};

use crate::story::StorySummary;

/// Headline statistic as delivered by `/api/v1/dashboard/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub label: String,
    pub value: StatValue,
    #[serde(default)]
    pub trend: String,
    /// Style token, e.g. `bg-brand`
    #[serde(default)]
    pub color: String,
    /// Symbolic icon name, resolved with [`Icon::from_name`]
    #[serde(default)]
    pub icon: String,
}

/// Stat values arrive either as numbers or as preformatted text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// Renderable icon for a stat card.
///
/// Every symbolic name maps to some variant; unrecognised names fall
/// back to [`Icon::Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Icon {
    #[default]
    Book,
    Layers,
    Users,
}

impl Icon {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Book" => Icon::Book,
            "Layers" => Icon::Layers,
            "Users" => Icon::Users,
            _ => Icon::default(),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Book => "📖",
            Icon::Layers => "🗂",
            Icon::Users => "👥",
        }
    }
}

/// A stat with its icon already resolved, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStat {
    pub label: String,
    pub value: StatValue,
    pub trend: String,
    pub color: String,
    pub icon: Icon,
}

impl From<DashboardStat> for ResolvedStat {
    fn from(stat: DashboardStat) -> Self {
        Self {
            icon: Icon::from_name(&stat.icon),
            label: stat.label,
            value: stat.value,
            trend: stat.trend,
            color: stat.color,
        }
    }
}

/// One entry on the heritage timeline. Order is the backend's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub title: String,
    pub desc: String,
}

/// The three dashboard sources, committed together or not at all
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub stories: Vec<StorySummary>,
    pub stats: Vec<ResolvedStat>,
    pub timeline: Vec<TimelineEvent>,
}
