//! Test support for the catalog workspace
//!
//! - [`TestDatabase`] (feature `postgres`, on by default): throwaway
//!   Postgres container with the catalog migrations applied
//! - [`TestDataBuilder`]: reproducible codes and names derived from a test name
//! - [`assertions`]: small helpers with readable failure messages
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestDatabase};
//!
//! #[tokio::test]
//! async fn creates_category() {
//!     let db = TestDatabase::new().await;
//!     let data = TestDataBuilder::from_test_name("creates_category");
//!
//!     let code = data.code("category"); // e.g. "category-1234"
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

use std::hash::{DefaultHasher, Hash, Hasher};

/// Derives test values from a fixed seed so reruns produce the same data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed taken from a hash of `name`, normally the test function's name
    pub fn from_test_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `<prefix>-<seed>`, e.g. a category code no seed row uses
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// assert_eq!(TestDataBuilder::new(42).code("category"), "category-42");
    /// ```
    pub fn code(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.seed)
    }

    /// `test-<kind>-<seed>-<label>`
    pub fn name(&self, kind: &str, label: &str) -> String {
        format!("test-{}-{}-{}", kind, self.seed, label)
    }
}

pub mod assertions {
    /// Unwraps `value`, naming `context` when it is `None`
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// `actual` lists exactly `expected`, in order
    pub fn assert_codes<S: AsRef<str>>(actual: &[S], expected: &[&str], context: &str) {
        let actual: Vec<&str> = actual.iter().map(AsRef::as_ref).collect();
        assert_eq!(actual, expected, "{}: unexpected codes", context);
    }
}
