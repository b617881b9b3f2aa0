//! Accepted product website domains.

use crate::utils::extract_domain;

/// Ordered list of domains accepted in the URL field.
///
/// Membership is an exact, case-sensitive string comparison against the
/// output of [`crate::utils::extract_domain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    domains: Vec<String>,
}

impl AllowList {
    /// The only shop the product pipeline can scrape.
    pub const DEFAULT_DOMAIN: &'static str = "www.asos.com";

    /// Creates an allow-list from domains, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_guard::domain::entities::AllowList;
    ///
    /// let list = AllowList::new(["www.asos.com", "www.zara.com"]);
    /// assert!(list.contains("www.zara.com"));
    /// assert!(!list.contains("asos.com"));
    /// ```
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma-separated list. Entries are trimmed and blanks skipped.
    pub fn from_csv(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|domain| !domain.is_empty()),
        )
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.iter().any(|allowed| allowed == domain)
    }

    /// Returns true if `url` is non-blank and its extracted domain is listed.
    pub fn accepts_url(&self, url: &str) -> bool {
        self.contains(extract_domain(url)) && !url.trim().is_empty()
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new([Self::DEFAULT_DOMAIN])
    }
}
