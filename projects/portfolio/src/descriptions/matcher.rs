use interfaces_github_repositories::models::RepositoryRecord;

use crate::page::{Element, Page};
use crate::selector::Selector;

/// Outcome of one matching pass over the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Elements whose text was replaced by a description.
    pub populated: usize,
    /// Elements with an identifier that kept their prior text.
    pub unmatched: usize,
}

/// Appends a trailing period when missing. `None` for an empty description.
pub fn normalize_description(description: &str) -> Option<String> {
    if description.is_empty() {
        return None;
    }

    let mut normalized = description.to_string();
    if !normalized.ends_with('.') {
        normalized.push('.');
    }

    Some(normalized)
}

/// Description of the first non-forked record named `name`.
///
/// Only that first record is consulted: a null or empty description on it
/// yields `None` even if a later record with the same name has one.
fn find_description(records: &[RepositoryRecord], name: &str) -> Option<String> {
    records
        .iter()
        .filter(|record| !record.fork)
        .find(|record| record.name == name)
        .and_then(|record| record.description.as_deref())
        .and_then(normalize_description)
}

pub fn set_repository_descriptions<P: Page>(
    records: &[RepositoryRecord],
    page: &mut P,
    selector: &Selector,
) -> MatchReport {
    let mut report = MatchReport::default();

    for element in page.select_mut(selector) {
        let Some(name) = element.identifier() else {
            continue;
        };

        match find_description(records, name) {
            Some(description) => {
                element.set_text(&description);
                report.populated += 1;
            }
            None => report.unmatched += 1,
        }
    }

    report
}
