//! The closed set of element lookup strategies.
//!
//! Each strategy has two spellings: the short name used in ergonomic APIs
//! and config files (`css`, `xpath`, ...) and the canonical wire identifier
//! the underlying driver protocol expects (`"css selector"`, `"xpath"`, ...).
//! The enum is the single source of truth for both tables; a strategy
//! outside the set is unrepresentable.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::result::LocatorError;

/// Lookup strategy for resolving a query string to elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Match by a single CSS class name
    ClassName,
    /// Match by CSS selector
    Css,
    /// Match by element id attribute
    Id,
    /// Match anchors by exact link text
    LinkText,
    /// Match by name attribute
    Name,
    /// Match anchors by partial link text
    PartialLinkText,
    /// Match by tag name
    Tag,
    /// Match by XPath expression
    XPath,
}

impl Strategy {
    /// Every recognized strategy, in short-name order.
    pub const ALL: [Self; 8] = [
        Self::ClassName,
        Self::Css,
        Self::Id,
        Self::LinkText,
        Self::Name,
        Self::PartialLinkText,
        Self::Tag,
        Self::XPath,
    ];

    /// Canonical wire identifier understood by the driver protocol
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClassName => "class name",
            Self::Css => "css selector",
            Self::Id => "id",
            Self::LinkText => "link text",
            Self::Name => "name",
            Self::PartialLinkText => "partial link text",
            Self::Tag => "tag name",
            Self::XPath => "xpath",
        }
    }

    /// Short ergonomic name, as used in named-entry forms
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::ClassName => "class_name",
            Self::Css => "css",
            Self::Id => "id",
            Self::LinkText => "link_text",
            Self::Name => "name",
            Self::PartialLinkText => "partial_link_text",
            Self::Tag => "tag",
            Self::XPath => "xpath",
        }
    }

    /// Look up a strategy by its short name
    #[must_use]
    pub fn from_short_name(name: &str) -> Option<Self> {
        match name {
            "class_name" => Some(Self::ClassName),
            "css" => Some(Self::Css),
            "id" => Some(Self::Id),
            "link_text" => Some(Self::LinkText),
            "name" => Some(Self::Name),
            "partial_link_text" => Some(Self::PartialLinkText),
            "tag" => Some(Self::Tag),
            "xpath" => Some(Self::XPath),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the canonical wire identifier only; short names are rejected so
/// raw protocol pairs stay unambiguous.
impl FromStr for Strategy {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class name" => Ok(Self::ClassName),
            "css selector" => Ok(Self::Css),
            "id" => Ok(Self::Id),
            "link text" => Ok(Self::LinkText),
            "name" => Ok(Self::Name),
            "partial link text" => Ok(Self::PartialLinkText),
            "tag name" => Ok(Self::Tag),
            "xpath" => Ok(Self::XPath),
            other => Err(LocatorError::UnknownStrategy {
                strategy: other.to_string(),
            }),
        }
    }
}

impl Serialize for Strategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = String::deserialize(deserializer)?;
        wire.parse().map_err(de::Error::custom)
    }
}
