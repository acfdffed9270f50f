//! Sort orders and search types with per-variant metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── TopRange ────────────────────────────────────────────────────────────────

/// Time window qualifying a `Top` sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopRange {
    Hour,
    SixHour,
    TwelveHour,
    Day,
    Week,
    Month,
    ThreeMonths,
    SixMonths,
    NineMonths,
    Year,
    All,
}

impl TopRange {
    pub const ALL: [TopRange; 11] = [
        TopRange::Hour,
        TopRange::SixHour,
        TopRange::TwelveHour,
        TopRange::Day,
        TopRange::Week,
        TopRange::Month,
        TopRange::ThreeMonths,
        TopRange::SixMonths,
        TopRange::NineMonths,
        TopRange::Year,
        TopRange::All,
    ];

    /// Suffix appended to `Top` on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopRange::Hour => "Hour",
            TopRange::SixHour => "SixHour",
            TopRange::TwelveHour => "TwelveHour",
            TopRange::Day => "Day",
            TopRange::Week => "Week",
            TopRange::Month => "Month",
            TopRange::ThreeMonths => "ThreeMonths",
            TopRange::SixMonths => "SixMonths",
            TopRange::NineMonths => "NineMonths",
            TopRange::Year => "Year",
            TopRange::All => "All",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown time range: {0:?}")]
pub struct ParseTopRangeError(pub String);

impl FromStr for TopRange {
    type Err = ParseTopRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseTopRangeError(s.to_string()))
    }
}

// ─── Sort ────────────────────────────────────────────────────────────────────

/// Listing order for posts, comments and search results.
///
/// Not every variant is accepted everywhere: see [`Sort::valid_for_comments`]
/// and [`Sort::valid_for_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sort {
    Active,
    #[default]
    Hot,
    New,
    Old,
    MostComments,
    NewComments,
    Top(TopRange),
}

impl Sort {
    /// Variants offered when picking a sort (with `Top` as `Top(Day)`).
    pub const CHOICES: [Sort; 7] = [
        Sort::Active,
        Sort::Hot,
        Sort::New,
        Sort::Old,
        Sort::MostComments,
        Sort::NewComments,
        Sort::Top(TopRange::Day),
    ];

    /// Base name without any time-range suffix.
    pub fn name(&self) -> &'static str {
        match self {
            Sort::Active => "Active",
            Sort::Hot => "Hot",
            Sort::New => "New",
            Sort::Old => "Old",
            Sort::MostComments => "MostComments",
            Sort::NewComments => "NewComments",
            Sort::Top(_) => "Top",
        }
    }

    /// Whether a time-range qualifier applies.
    pub fn has_time_range(&self) -> bool {
        matches!(self, Sort::Top(_))
    }

    /// Accepted by `comment/list`.
    pub fn valid_for_comments(&self) -> bool {
        matches!(self, Sort::Hot | Sort::New | Sort::Old | Sort::Top(_))
    }

    /// Accepted by `search`.
    pub fn valid_for_search(&self) -> bool {
        !matches!(self, Sort::NewComments)
    }

    /// SF Symbols tag used to render the sort.
    pub fn icon(&self) -> &'static str {
        match self {
            Sort::Active => "bolt",
            Sort::Hot => "flame",
            Sort::New => "clock.badge",
            Sort::Old => "clock.arrow.circlepath",
            Sort::MostComments => "bubble.left.and.bubble.right",
            Sort::NewComments => "text.bubble",
            Sort::Top(_) => "rosette",
        }
    }

    /// Value of the `sort` parameter for post listings and search
    /// (`Top(Day)` becomes `TopDay`).
    pub fn post_param(&self) -> String {
        match self {
            Sort::Top(range) => format!("Top{}", range.as_str()),
            other => other.name().to_string(),
        }
    }

    /// Value of the `sort` parameter for comment listings (`Top` has no range).
    pub fn comment_param(&self) -> &'static str {
        self.name()
    }

    /// Parse a post sort parameter (`"Hot"`, `"TopWeek"`, ...).
    pub fn from_param(s: &str) -> Option<Self> {
        let sort = match s {
            "Active" => Sort::Active,
            "Hot" => Sort::Hot,
            "New" => Sort::New,
            "Old" => Sort::Old,
            "MostComments" => Sort::MostComments,
            "NewComments" => Sort::NewComments,
            "Top" => Sort::Top(TopRange::All),
            other => Sort::Top(other.strip_prefix("Top")?.parse().ok()?),
        };
        Some(sort)
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.post_param())
    }
}

// ─── SearchType ──────────────────────────────────────────────────────────────

/// Which kinds of objects a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SearchType {
    #[default]
    All,
    Comments,
    Posts,
    Communities,
    Users,
    Url,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::All => "All",
            SearchType::Comments => "Comments",
            SearchType::Posts => "Posts",
            SearchType::Communities => "Communities",
            SearchType::Users => "Users",
            SearchType::Url => "Url",
        }
    }
}
