//! Delegation to an external element-lookup host.
//!
//! A [`Locator`] does not resolve elements itself; it hands its
//! `(strategy, query)` pair to anything implementing [`ElementLookup`] and
//! returns whatever the host returns, untouched. The trait keeps the host's
//! element and error types abstract so drivers plug in without adapters.

use std::cell::RefCell;

use tracing::trace;

use crate::locator::Locator;
use crate::strategy::Strategy;

/// Host capability for resolving a `(strategy, query)` pair to elements.
///
/// Implemented by browser sessions, element scopes, or anything else that
/// can answer element queries. Both operations are synchronous; hosts that
/// wrap async drivers block as they see fit.
pub trait ElementLookup {
    /// Opaque element handle defined by the host
    type Element;
    /// Failure type defined by the host, propagated unmodified
    type Error;

    /// Resolve the query to a single element
    fn find_one(&self, strategy: Strategy, query: &str) -> Result<Self::Element, Self::Error>;

    /// Resolve the query to every matching element
    fn find_all(&self, strategy: Strategy, query: &str)
        -> Result<Vec<Self::Element>, Self::Error>;
}

impl Locator {
    /// Look up a single element through the given host.
    ///
    /// Invokes `host.find_one` exactly once with this locator's strategy and
    /// query and returns its result unchanged.
    ///
    /// # Errors
    ///
    /// Whatever the host reports, unmodified.
    pub fn find_one_on<H: ElementLookup>(&self, host: &H) -> Result<H::Element, H::Error> {
        trace!(strategy = %self.strategy(), query = %self.query(), "find_one delegated to host");
        host.find_one(self.strategy(), self.query())
    }

    /// Look up every matching element through the given host.
    ///
    /// Invokes `host.find_all` exactly once with this locator's strategy and
    /// query and returns its result unchanged.
    ///
    /// # Errors
    ///
    /// Whatever the host reports, unmodified.
    pub fn find_all_on<H: ElementLookup>(&self, host: &H) -> Result<Vec<H::Element>, H::Error> {
        trace!(strategy = %self.strategy(), query = %self.query(), "find_all delegated to host");
        host.find_all(self.strategy(), self.query())
    }
}

/// Element handle returned by [`MockLookup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockElement {
    /// Identifier the mock was seeded with
    pub id: String,
    /// Tag name the mock was seeded with
    pub tag_name: String,
}

impl MockElement {
    /// Create a new mock element
    #[must_use]
    pub fn new(id: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag_name: tag_name.into(),
        }
    }
}

/// Recording lookup host for unit tests.
///
/// Returns seeded elements (or a seeded failure) and records every call so
/// tests can assert on exact delegation arguments.
#[derive(Debug, Default)]
pub struct MockLookup {
    elements: Vec<MockElement>,
    failure: Option<String>,
    calls: RefCell<Vec<(String, Strategy, String)>>,
}

impl MockLookup {
    /// Create an empty mock host
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an element to return from lookups
    #[must_use]
    pub fn with_element(mut self, element: MockElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Make every lookup fail with the given message
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Every recorded call as `(operation, strategy, query)`
    #[must_use]
    pub fn calls(&self) -> Vec<(String, Strategy, String)> {
        self.calls.borrow().clone()
    }

    /// Whether the named operation was called with exactly these arguments
    #[must_use]
    pub fn was_called_with(&self, operation: &str, strategy: Strategy, query: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|(op, s, q)| op == operation && *s == strategy && q == query)
    }

    fn record(&self, operation: &str, strategy: Strategy, query: &str) {
        self.calls
            .borrow_mut()
            .push((operation.to_string(), strategy, query.to_string()));
    }
}

impl ElementLookup for MockLookup {
    type Element = MockElement;
    type Error = String;

    fn find_one(&self, strategy: Strategy, query: &str) -> Result<MockElement, String> {
        self.record("find_one", strategy, query);
        if let Some(message) = &self.failure {
            return Err(message.clone());
        }
        self.elements
            .first()
            .cloned()
            .ok_or_else(|| format!("no element matches {query}"))
    }

    fn find_all(&self, strategy: Strategy, query: &str) -> Result<Vec<MockElement>, String> {
        self.record("find_all", strategy, query);
        if let Some(message) = &self.failure {
            return Err(message.clone());
        }
        Ok(self.elements.clone())
    }
}
