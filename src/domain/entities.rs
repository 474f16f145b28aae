//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/IO types here — these are rendered by adapters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which anchor date the user supplied to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    /// Last menstrual period.
    Lmp,
    /// Estimated due date.
    Edd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    /// Hausa display string, as shown on the results screen.
    pub fn display(&self) -> &'static str {
        match self {
            Trimester::First => "1 (Na Farko)",
            Trimester::Second => "2 (Na Biyu)",
            Trimester::Third => "3 (Na Uku)",
        }
    }
}

/// Full set of derived pregnancy metrics. Immutable; recomputed from the
/// anchor date and "today" on every calculation. `edd - lmp` is always
/// exactly 280 days regardless of which side was the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PregnancyResult {
    pub lmp: NaiveDate,
    pub edd: NaiveDate,
    /// Whole days elapsed from LMP to today.
    pub gestational_days: i64,
    /// floor(days / 7), clamped to 40.
    pub gestational_weeks: i64,
    /// days mod 7, in 0..=6.
    pub gestational_day_of_week: i64,
    /// Whole days from today to EDD, floored at 0.
    pub days_remaining: i64,
    /// ceil(days_remaining / 7).
    pub weeks_remaining: i64,
    pub trimester: Trimester,
    /// floor(weeks / 4.3) + 1.
    pub lunar_month: i64,
    /// round(min(1, weeks / 40) * 100), in 0..=100.
    pub progress_percent: u8,
    /// Fruit-for-scale label from the fixed 40-entry table.
    pub baby_size: &'static str,
}

/// Ovulation estimate and the surrounding windows, all whole-day dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FertileWindow {
    pub ovulation_day: NaiveDate,
    pub fertile_start: NaiveDate,
    pub fertile_end: NaiveDate,
    pub safe_window_start: NaiveDate,
    pub safe_window_end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One line of the chat transcript. Append-only; only a full clear removes turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub sender: Sender,
    pub text: String,
    /// Wall-clock "HH:MM" at the moment the turn was recorded.
    pub time: String,
}

/// Snapshot of the last tracker input, persisted so the next session can
/// prefill the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub calculation_type: CalculationKind,
    pub lmp_date: Option<NaiveDate>,
    pub edd_date: Option<NaiveDate>,
    /// RFC 3339 timestamp of the calculation.
    pub calculated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArticleCategory {
    Pregnancy,
    BabyCare,
    Health,
    Nutrition,
    Postpartum,
    Tips,
    Symptoms,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 7] = [
        ArticleCategory::Pregnancy,
        ArticleCategory::BabyCare,
        ArticleCategory::Health,
        ArticleCategory::Nutrition,
        ArticleCategory::Postpartum,
        ArticleCategory::Tips,
        ArticleCategory::Symptoms,
    ];

    /// Hausa section title.
    pub fn display(&self) -> &'static str {
        match self {
            ArticleCategory::Pregnancy => "Labaran Ciki",
            ArticleCategory::BabyCare => "Kula da Jariri",
            ArticleCategory::Health => "Lafiya",
            ArticleCategory::Nutrition => "Abinci mai gina jiki",
            ArticleCategory::Postpartum => "Bayan Haihuwa",
            ArticleCategory::Tips => "Shawarwari",
            ArticleCategory::Symptoms => "Alamun Ciki",
        }
    }
}

/// A catalog article. Content is static Hausa text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: ArticleCategory,
    pub content: &'static str,
    pub read_time: &'static str,
    pub date: &'static str,
    pub icon: &'static str,
}

/// UI color scheme, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Hausa confirmation shown after switching.
    pub fn display(&self) -> &'static str {
        match self {
            Theme::Light => "Yanayin haske",
            Theme::Dark => "Yanayin duhu",
        }
    }
}
