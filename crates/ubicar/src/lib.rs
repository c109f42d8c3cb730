//! Ubicar: canonical element locators for browser automation.
//!
//! Ubicar (Spanish: "to locate") normalizes the many informal ways of
//! writing an element query — a bare string, a raw `(strategy, query)` wire
//! pair, a map of named entries, deserialized config data, or a value that
//! describes itself — into one immutable, strategy-tagged [`Locator`] that
//! any driver can consume.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  "div#foo.bar"      {"xpath": "//h1"}      impl Describe...  │
//! │        │                    │                     │          │
//! │        └──────────┬─────────┴─────────────────────┘          │
//! │                   ▼                                          │
//! │          LocatorSource dispatch                              │
//! │                   ▼                                          │
//! │        Locator { strategy, query }  ──►  ElementLookup host  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use ubicar::{Locator, MockElement, MockLookup, Strategy};
//!
//! // Bare strings are classified: simple tag/#id/.class shapes are CSS,
//! // everything else is XPath.
//! let heading = Locator::new("//h1")?;
//! assert_eq!(heading.strategy(), Strategy::XPath);
//! assert_eq!(heading, Locator::by_xpath("//h1"));
//!
//! // Lookups are delegated to whatever host you hand over.
//! let host = MockLookup::new().with_element(MockElement::new("h1-0", "h1"));
//! let element = heading.find_one_on(&host)?;
//! assert_eq!(element.tag_name, "h1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod locator;
mod lookup;
mod result;
mod strategy;

pub use locator::{DescribeLocator, Locator, LocatorSource};
pub use lookup::{ElementLookup, MockElement, MockLookup};
pub use result::{ErrorKind, LocatorError, LocatorResult};
pub use strategy::Strategy;

/// Prelude for convenient imports
pub mod prelude {
    pub use super::locator::{DescribeLocator, Locator, LocatorSource};
    pub use super::lookup::{ElementLookup, MockElement, MockLookup};
    pub use super::result::{ErrorKind, LocatorError, LocatorResult};
    pub use super::strategy::Strategy;
}
