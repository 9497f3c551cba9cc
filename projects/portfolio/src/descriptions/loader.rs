use tracing::{debug, error, info};

use crate::descriptions::matcher::{set_repository_descriptions, MatchReport};
use crate::descriptions::source::RepositorySource;
use crate::page::Page;
use crate::selector::Selector;

/// Loads `user`'s repositories and writes their descriptions into the page.
///
/// On success the matcher runs once and `on_ready` is called with its report.
/// On failure the error is logged, the page is left as it was and `on_ready`
/// is not called.
pub async fn load_repository_descriptions<S, P, F>(
    source: &S,
    user: &str,
    page: &mut P,
    selector: &Selector,
    on_ready: F,
) -> Result<MatchReport, S::Error>
where
    S: RepositorySource,
    P: Page,
    F: FnOnce(&MatchReport),
{
    debug!(user, %selector, "Requesting repository descriptions");

    let records = match source.list_user_repositories(user).await {
        Ok(records) => records,
        Err(err) => {
            error!(user, "Failed to get repository descriptions: {err}");
            return Err(err);
        }
    };

    let report = set_repository_descriptions(&records, page, selector);
    info!(
        user,
        repositories = records.len(),
        populated = report.populated,
        unmatched = report.unmatched,
        "Repository descriptions set"
    );

    on_ready(&report);

    Ok(report)
}
