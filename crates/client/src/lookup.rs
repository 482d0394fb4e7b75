//! Find-by-name over Grafana list endpoints.
//!
//! Responsibilities:
//! - Grafana has no "get folder by title" or "get channel by name" endpoint;
//!   lookups list every resource and scan for the wanted name.
//! - This module centralizes that scan so every resource matches names the
//!   same way.
//!
//! Explicitly does NOT handle:
//! - Fetching the list (see [`crate::endpoints`]).
//! - Mapping a miss to an error; callers pick their own not-found sentinel.
//!
//! Invariants / assumptions:
//! - Matching is case-insensitive and covers the whole name, never a substring.
//! - When several entries match, the first one in server order wins.

use crate::models::{AlertChannel, Folder};

/// A resource that Grafana users refer to by a human-readable name.
pub(crate) trait Named {
    fn name(&self) -> &str;
}

impl Named for Folder {
    fn name(&self) -> &str {
        &self.title
    }
}

impl Named for AlertChannel {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Return the first item whose name matches `wanted`.
pub(crate) fn find_by_name<T, I>(items: I, wanted: &str) -> Option<T>
where
    T: Named,
    I: IntoIterator<Item = T>,
{
    let wanted = wanted.to_lowercase();
    items
        .into_iter()
        .find(|item| item.name().to_lowercase() == wanted)
}
