//! Domain naming styles offered by the prompt settings dialog.
//!
//! The set is closed: every [`DomainStyle`] carries a fixed display label and
//! a fixed description shown to users under the style picker. Owners store the
//! committed style as a raw tag string, so lookups by tag are fallible and an
//! unknown tag simply has no description.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A naming style that biases domain-name generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStyle {
    /// Two relevant words joined together.
    Compound,
    /// Word play.
    #[default]
    Pun,
    /// Names that say what the business does.
    Descriptive,
    /// Brandable names with no direct link to the business.
    Abstract,
}

impl DomainStyle {
    /// Every style, in the order the picker lists them.
    pub const ALL: [DomainStyle; 4] = [
        DomainStyle::Compound,
        DomainStyle::Pun,
        DomainStyle::Descriptive,
        DomainStyle::Abstract,
    ];

    /// Wire tag stored by owners (e.g. `"compound"`).
    pub fn tag(self) -> &'static str {
        match self {
            Self::Compound => "compound",
            Self::Pun => "pun",
            Self::Descriptive => "descriptive",
            Self::Abstract => "abstract",
        }
    }

    /// Human-readable option label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Compound => "Compound",
            Self::Pun => "Pun",
            Self::Descriptive => "Descriptive",
            Self::Abstract => "Abstract",
        }
    }

    /// Description shown under the picker for this style.
    pub fn description(self) -> &'static str {
        match self {
            Self::Compound => "Combines two relevant words to create a unique domain name.",
            Self::Pun => "Domains that play on words, offering a fun and catchy twist.",
            Self::Descriptive => "Clearly describes the business, providing immediate insight.",
            Self::Abstract => {
                "Memorable and brandable names that don't necessarily relate directly to the business."
            }
        }
    }

    /// Look up a style by its exact tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.tag() == tag)
    }
}

impl fmt::Display for DomainStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DomainStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|style| style.tag()).collect();
            format!(
                "unknown domain style '{s}' (expected one of: {})",
                known.join(", ")
            )
        })
    }
}

/// Description text for a raw style tag. Unknown tags have none.
pub fn style_description(tag: &str) -> Option<&'static str> {
    DomainStyle::from_tag(tag).map(DomainStyle::description)
}
