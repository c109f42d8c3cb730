//! Locator normalization: many informal input shapes, one canonical value.
//!
//! A [`Locator`] is an immutable `(strategy, query)` pair. The interesting
//! part is how one gets built: [`Locator::new`] accepts anything convertible
//! into a [`LocatorSource`] and routes each variant through an explicit
//! named constructor, so callers can hand over whatever form is most
//! convenient and always end up with the same normalized value.
//!
//! ```
//! use ubicar::{Locator, Strategy};
//!
//! // Simple tag/#id/.class strings are detected as CSS selectors.
//! let css = Locator::new("div#foo.bar")?;
//! assert_eq!(css.strategy(), Strategy::Css);
//!
//! // Anything else is assumed to be an XPath expression.
//! let xpath = Locator::new("//h1")?;
//! assert_eq!(xpath, Locator::by_xpath("//h1"));
//!
//! // Named entries work too, from maps or deserialized config.
//! let entries = Locator::new(vec![("css".to_string(), "#app".to_string())])?;
//! assert_eq!(entries, Locator::by_css("#app"));
//! # Ok::<(), ubicar::LocatorError>(())
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::result::{LocatorError, LocatorResult};
use crate::strategy::Strategy;

/// Shape of a simple CSS selector: an optional tag token followed by one or
/// more `#id` / `.class` fragments, covering the whole string.
fn css_shape() -> &'static Regex {
    static CSS_SHAPE: OnceLock<Regex> = OnceLock::new();
    CSS_SHAPE.get_or_init(|| {
        Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9]*)?(?:[#.][a-zA-Z0-9_-]+)+$")
            .expect("selector shape pattern compiles")
    })
}

/// A normalized, strategy-tagged element query.
///
/// Immutable once constructed: the fields are private, there are no
/// setters, and equality is structural. Safe to share freely across
/// threads; it owns no resources beyond the query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    strategy: Strategy,
    query: String,
}

/// Input variants accepted by [`Locator::new`].
///
/// The dispatch is a tagged union rather than a chain of runtime type
/// probes: each variant maps onto exactly one named constructor, and the
/// `Described` variant re-enters dispatch with whatever the description
/// returns until a terminal variant is reached.
pub enum LocatorSource {
    /// An already-normalized locator; passed through unchanged.
    Locator(Locator),
    /// A bare selector string, classified by the CSS-shape heuristic.
    Selector(String),
    /// Named key/value entries, as read from a map or config file.
    Entries(Vec<(String, String)>),
    /// A value that knows how to describe itself as a locator.
    Described(Box<dyn DescribeLocator>),
}

/// Capability for values that can describe themselves as a locator.
///
/// The returned source may be any [`LocatorSource`] variant, including
/// another `Described`; [`Locator::new`] keeps resolving until it reaches a
/// locator, a string, or entries.
pub trait DescribeLocator {
    /// Produce a locator-compatible description of this value
    fn describe_locator(&self) -> LocatorSource;
}

impl DescribeLocator for Locator {
    fn describe_locator(&self) -> LocatorSource {
        LocatorSource::Locator(self.clone())
    }
}

impl Locator {
    /// Normalize any supported input shape into a `Locator`.
    ///
    /// An input that is already a `Locator` passes through unchanged, before
    /// any other rule: no re-interpretation, even when its query would
    /// classify differently under the string heuristic.
    ///
    /// # Errors
    ///
    /// Returns a [`LocatorError`] when entries contain an unknown strategy,
    /// an unrecognized or conflicting key, or never set a strategy or query.
    pub fn new(source: impl Into<LocatorSource>) -> LocatorResult<Self> {
        let mut source = source.into();
        loop {
            source = match source {
                LocatorSource::Locator(locator) => return Ok(locator),
                LocatorSource::Selector(text) => return Ok(Self::from_text(text)),
                LocatorSource::Entries(entries) => return Self::from_entries(entries),
                LocatorSource::Described(described) => described.describe_locator(),
            };
        }
    }

    /// Build from a typed strategy and a query, no interpretation at all.
    #[must_use]
    pub fn from_strategy(strategy: Strategy, query: impl Into<String>) -> Self {
        Self {
            strategy,
            query: query.into(),
        }
    }

    /// Build from a raw `(strategy, query)` wire pair.
    ///
    /// The strategy must be one of the canonical wire identifiers (`"css
    /// selector"`, `"xpath"`, ...); short names are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::UnknownStrategy`] for anything outside the
    /// recognized identifier set.
    pub fn from_pair(strategy: &str, query: impl Into<String>) -> LocatorResult<Self> {
        Ok(Self::from_strategy(strategy.parse()?, query))
    }

    /// Classify a bare string as a CSS selector or an XPath expression.
    ///
    /// Strings matching the simple `tag#id.class` shape become CSS
    /// selectors; everything else is assumed to be XPath. The query is kept
    /// verbatim either way.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let strategy = if css_shape().is_match(&text) {
            Strategy::Css
        } else {
            Strategy::XPath
        };
        trace!(%strategy, query = %text, "classified bare selector");
        Self {
            strategy,
            query: text,
        }
    }

    /// Build from named entries, the form maps and config files reduce to.
    ///
    /// Recognized keys are `by` (a short strategy name), `locator` (the
    /// query), and each short strategy name itself, which sets strategy and
    /// query in one step.
    ///
    /// # Errors
    ///
    /// `UnknownStrategy` for a bad `by` value, `UnknownParameter` for an
    /// unrecognized key, `ConflictingParameter` when a second entry re-sets
    /// the strategy or the query, and `MissingStrategy` / `MissingQuery`
    /// when the entries never set one of the two.
    pub fn from_entries<K, V, I>(entries: I) -> LocatorResult<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut strategy: Option<Strategy> = None;
        let mut query: Option<String> = None;
        for (key, value) in entries {
            let key = key.as_ref();
            if key == "by" {
                let value = value.into();
                let parsed = Strategy::from_short_name(&value)
                    .ok_or(LocatorError::UnknownStrategy { strategy: value })?;
                if strategy.replace(parsed).is_some() {
                    return Err(LocatorError::ConflictingParameter {
                        key: key.to_string(),
                    });
                }
            } else if key == "locator" {
                if query.replace(value.into()).is_some() {
                    return Err(LocatorError::ConflictingParameter {
                        key: key.to_string(),
                    });
                }
            } else if let Some(parsed) = Strategy::from_short_name(key) {
                if strategy.replace(parsed).is_some() || query.replace(value.into()).is_some() {
                    return Err(LocatorError::ConflictingParameter {
                        key: key.to_string(),
                    });
                }
            } else {
                return Err(LocatorError::UnknownParameter {
                    key: key.to_string(),
                });
            }
        }
        let strategy = strategy.ok_or(LocatorError::MissingStrategy)?;
        let query = query.ok_or(LocatorError::MissingQuery)?;
        Ok(Self { strategy, query })
    }

    /// Normalize a self-describing value.
    ///
    /// # Errors
    ///
    /// Propagates whatever [`Locator::new`] reports for the description.
    pub fn from_description<D: DescribeLocator + ?Sized>(described: &D) -> LocatorResult<Self> {
        Self::new(described.describe_locator())
    }

    /// Normalize loosely-typed JSON data.
    ///
    /// Strings go through the CSS/XPath heuristic, objects of strings
    /// through the named-entry rules.
    ///
    /// # Errors
    ///
    /// [`LocatorError::Unsupported`] for numbers, booleans, arrays, null,
    /// and objects with non-string values; otherwise the entry-form errors.
    pub fn from_value(value: serde_json::Value) -> LocatorResult<Self> {
        Self::new(LocatorSource::try_from(value)?)
    }

    /// Locator matching by a single CSS class name
    #[must_use]
    pub fn by_class_name(query: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::ClassName, query)
    }

    /// Locator matching by CSS selector
    #[must_use]
    pub fn by_css(query: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Css, query)
    }

    /// Locator matching by element id
    #[must_use]
    pub fn by_id(query: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Id, query)
    }

    /// Locator matching anchors by exact link text
    #[must_use]
    pub fn by_link_text(query: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::LinkText, query)
    }

    /// Locator matching by name attribute
    #[must_use]
    pub fn by_name(query: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Name, query)
    }

    /// Locator matching anchors by partial link text
    #[must_use]
    pub fn by_partial_link_text(query: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::PartialLinkText, query)
    }

    /// Locator matching by tag name
    #[must_use]
    pub fn by_tag(query: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Tag, query)
    }

    /// Locator matching by XPath expression
    #[must_use]
    pub fn by_xpath(query: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::XPath, query)
    }

    /// The lookup strategy
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The query string, interpreted according to [`Self::strategy`]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Decompose into the `(strategy, query)` pair
    #[must_use]
    pub fn into_parts(self) -> (Strategy, String) {
        (self.strategy, self.query)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.strategy, self.query)
    }
}

impl fmt::Debug for LocatorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locator(locator) => f.debug_tuple("Locator").field(locator).finish(),
            Self::Selector(text) => f.debug_tuple("Selector").field(text).finish(),
            Self::Entries(entries) => f.debug_tuple("Entries").field(entries).finish(),
            Self::Described(_) => f.write_str("Described(..)"),
        }
    }
}

impl From<Locator> for LocatorSource {
    fn from(locator: Locator) -> Self {
        Self::Locator(locator)
    }
}

impl From<&str> for LocatorSource {
    fn from(text: &str) -> Self {
        Self::Selector(text.to_string())
    }
}

impl From<String> for LocatorSource {
    fn from(text: String) -> Self {
        Self::Selector(text)
    }
}

impl From<Cow<'_, str>> for LocatorSource {
    fn from(text: Cow<'_, str>) -> Self {
        Self::Selector(text.into_owned())
    }
}

impl From<HashMap<String, String>> for LocatorSource {
    fn from(map: HashMap<String, String>) -> Self {
        Self::Entries(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for LocatorSource {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::Entries(map.into_iter().collect())
    }
}

impl From<Vec<(String, String)>> for LocatorSource {
    fn from(entries: Vec<(String, String)>) -> Self {
        Self::Entries(entries)
    }
}

impl From<&[(&str, &str)]> for LocatorSource {
    fn from(entries: &[(&str, &str)]) -> Self {
        Self::Entries(
            entries
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        )
    }
}

impl From<Box<dyn DescribeLocator>> for LocatorSource {
    fn from(described: Box<dyn DescribeLocator>) -> Self {
        Self::Described(described)
    }
}

fn json_shape(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Loosely-typed data is where unsupported shapes can still show up at
/// runtime, so this is the conversion that produces usage errors.
impl TryFrom<serde_json::Value> for LocatorSource {
    type Error = LocatorError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(text) => Ok(Self::Selector(text)),
            serde_json::Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map {
                    match value {
                        serde_json::Value::String(value) => entries.push((key, value)),
                        other => {
                            return Err(LocatorError::Unsupported {
                                found: format!("{} for parameter {key:?}", json_shape(&other)),
                            });
                        }
                    }
                }
                Ok(Self::Entries(entries))
            }
            other => Err(LocatorError::Unsupported {
                found: json_shape(&other).to_string(),
            }),
        }
    }
}

/// Serializes as `{"by": <short name>, "locator": <query>}`, the named-entry
/// form, so serialized locators re-enter construction on deserialize.
impl Serialize for Locator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("by", self.strategy.short_name())?;
        map.serialize_entry("locator", &self.query)?;
        map.end()
    }
}

/// Deserializes from either a bare selector string or a map of named
/// entries, through the same normalization rules as [`Locator::new`].
impl<'de> Deserialize<'de> for Locator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LocatorVisitor;

        impl<'de> Visitor<'de> for LocatorVisitor {
            type Value = Locator;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a selector string or a map of locator parameters")
            }

            fn visit_str<E: de::Error>(self, text: &str) -> Result<Locator, E> {
                Ok(Locator::from_text(text))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Locator, A::Error> {
                let mut entries: Vec<(String, String)> = Vec::new();
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Locator::from_entries(entries).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(LocatorVisitor)
    }
}
