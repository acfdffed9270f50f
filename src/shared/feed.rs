//! Feed sources: a server-wide listing or a single community.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-wide post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ListingType {
    #[default]
    All,
    Local,
    Subscribed,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::All => "All",
            ListingType::Local => "Local",
            ListingType::Subscribed => "Subscribed",
        }
    }
}

/// What a post feed lists.
///
/// Persisted as text (e.g. as the app's start page): listings use their name,
/// communities use `c/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedSource {
    Listing(ListingType),
    /// Community name, optionally `name@instance` for remote communities.
    Community(String),
}

impl Default for FeedSource {
    fn default() -> Self {
        FeedSource::Listing(ListingType::All)
    }
}

const COMMUNITY_PREFIX: &str = "c/";

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Listing(l) => write!(f, "{}", l.as_str()),
            FeedSource::Community(name) => write!(f, "{COMMUNITY_PREFIX}{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFeedSourceError(pub String);

impl fmt::Display for ParseFeedSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown feed source: {:?}", self.0)
    }
}

impl std::error::Error for ParseFeedSourceError {}

impl FromStr for FeedSource {
    type Err = ParseFeedSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(FeedSource::Listing(ListingType::All)),
            "Local" => Ok(FeedSource::Listing(ListingType::Local)),
            "Subscribed" => Ok(FeedSource::Listing(ListingType::Subscribed)),
            other => match other.strip_prefix(COMMUNITY_PREFIX) {
                Some(name) if !name.is_empty() => Ok(FeedSource::Community(name.to_string())),
                _ => Err(ParseFeedSourceError(other.to_string())),
            },
        }
    }
}

impl Serialize for FeedSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FeedSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_round_trip() {
        for l in [ListingType::All, ListingType::Local, ListingType::Subscribed] {
            let source = FeedSource::Listing(l);
            assert_eq!(source.to_string().parse::<FeedSource>().unwrap(), source);
        }
    }

    #[test]
    fn test_community_prefix() {
        let source: FeedSource = "c/rust@programming.dev".parse().unwrap();
        assert_eq!(source, FeedSource::Community("rust@programming.dev".into()));
        assert_eq!(source.to_string(), "c/rust@programming.dev");
    }

    #[test]
    fn test_rejects_unknown() {
        assert!("c/".parse::<FeedSource>().is_err());
        assert!("Popular".parse::<FeedSource>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&FeedSource::Community("memes".into())).unwrap();
        assert_eq!(json, r#""c/memes""#);
        let back: FeedSource = serde_json::from_str(r#""Local""#).unwrap();
        assert_eq!(back, FeedSource::Listing(ListingType::Local));
    }
}
