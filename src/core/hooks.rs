//! Pre-comment address filter hook
//!
//! The host calls [`CommentHooks::filter_comment_address`] synchronously for
//! every new comment, just before the submitter address is stored. Filters
//! are registered explicitly at startup and run in registration order; each
//! receives the previous filter's output.
//!
//! ```rust
//! use veil::anonymization::IpAnonymizer;
//! use veil::core::hooks::CommentHooks;
//!
//! let mut hooks = CommentHooks::new();
//! hooks.register_anonymizer(IpAnonymizer::default());
//!
//! assert_eq!(hooks.filter_comment_address("203.0.113.45"), "203.0.113.0");
//! ```

use crate::anonymization::IpAnonymizer;
use std::fmt;
use std::sync::Arc;

/// A filter applied to a new comment's address
pub type AddressFilter = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Extension point for new comment addresses
#[derive(Clone, Default)]
pub struct CommentHooks {
    address_filters: Vec<AddressFilter>,
}

impl CommentHooks {
    /// Create an empty hook registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the anonymizer already registered
    pub fn with_anonymizer(anonymizer: IpAnonymizer) -> Self {
        let mut hooks = Self::new();
        hooks.register_anonymizer(anonymizer);
        hooks
    }

    /// Append a filter to the pre-comment address hook
    pub fn register_address_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.address_filters.push(Arc::new(filter));
        self
    }

    /// Register the address anonymizer as a filter
    pub fn register_anonymizer(&mut self, anonymizer: IpAnonymizer) -> &mut Self {
        tracing::debug!(fallback = %anonymizer.fallback(), "Registering address anonymizer");
        self.register_address_filter(move |address| anonymizer.anonymize(&address))
    }

    /// Run every registered filter over a new comment's address
    ///
    /// With no filters registered the address is returned unchanged.
    pub fn filter_comment_address(&self, address: impl Into<String>) -> String {
        self.address_filters
            .iter()
            .fold(address.into(), |address, filter| filter(address))
    }

    /// Number of registered filters
    pub fn address_filter_count(&self) -> usize {
        self.address_filters.len()
    }
}

impl fmt::Debug for CommentHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentHooks")
            .field("address_filters", &self.address_filters.len())
            .finish()
    }
}
