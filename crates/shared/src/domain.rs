use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_newtype!(ActivityId);

pub const NAME_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 150;
pub const HOURS_PER_WEEK_MIN: i32 = 0;
pub const HOURS_PER_WEEK_MAX: i32 = 40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sports,
    Arts,
    Academic,
    #[serde(rename = "Community Service")]
    CommunityService,
    Leadership,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Sports,
        Category::Arts,
        Category::Academic,
        Category::CommunityService,
        Category::Leadership,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sports => "Sports",
            Category::Arts => "Arts",
            Category::Academic => "Academic",
            Category::CommunityService => "Community Service",
            Category::Leadership => "Leadership",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseEnumError::new("category", s))
    }
}

/// Competitive level of an activity, ordered from least to most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    School,
    Regional,
    State,
    National,
    International,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::School,
        Tier::Regional,
        Tier::State,
        Tier::National,
        Tier::International,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::School => "School",
            Tier::Regional => "Regional",
            Tier::State => "State",
            Tier::National => "National",
            Tier::International => "International",
        }
    }

    /// Base impact points contributed by the tier alone.
    pub fn base_points(self) -> i32 {
        match self {
            Tier::School => 1,
            Tier::Regional => 2,
            Tier::State => 3,
            Tier::National => 4,
            Tier::International => 5,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseEnumError::new("tier", s))
    }
}
