use crate::application::{
    commands::ensure_admin,
    dto::{ActivityLogDto, AuthenticatedUser, Page, normalize_size},
    error::ApplicationResult,
};
use crate::domain::activity::{ActivityLogFilter, ActivityLogRepository};
use std::fmt::Write as _;
use std::sync::Arc;

/// Exports pull a single page with this fixed upper bound instead of the
/// normal page-size clamp.
pub const EXPORT_PAGE_SIZE: u32 = 10_000;

#[derive(Debug, Clone, Default)]
pub struct SearchActivityLogsQuery {
    pub filter: ActivityLogFilter,
    pub page: u32,
    pub size: u32,
}

pub struct ActivityQueryService {
    repo: Arc<dyn ActivityLogRepository>,
}

impl ActivityQueryService {
    pub fn new(repo: Arc<dyn ActivityLogRepository>) -> Self {
        Self { repo }
    }

    pub async fn search(
        &self,
        actor: &AuthenticatedUser,
        query: SearchActivityLogsQuery,
    ) -> ApplicationResult<Page<ActivityLogDto>> {
        ensure_admin(actor)?;

        let size = normalize_size(query.size);
        let (entries, total) = self.repo.search(&query.filter, query.page, size).await?;

        let items: Vec<ActivityLogDto> = entries.into_iter().map(Into::into).collect();
        Ok(Page::new(items, query.page, size, total))
    }

    /// Flat CSV rendering of the first export page: one header row, then one
    /// line per record. CR/LF inside the description are collapsed to a
    /// single space so each record stays on its own row.
    pub async fn export_csv(
        &self,
        actor: &AuthenticatedUser,
        filter: ActivityLogFilter,
    ) -> ApplicationResult<String> {
        ensure_admin(actor)?;

        let (entries, _) = self.repo.search(&filter, 0, EXPORT_PAGE_SIZE).await?;

        let mut out = String::from("id,user_id,username,action,description,created_at\n");
        // Fields are written unquoted, so a comma inside a description
        // shifts the columns of that row.
        for entry in entries {
            let log = &entry.log;
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                log.id,
                log.user_id,
                entry.username.as_deref().unwrap_or(""),
                log.action,
                log.description.as_deref().map(flatten_text).unwrap_or_default(),
                log.created_at.to_rfc3339(),
            );
        }

        Ok(out)
    }
}

fn flatten_text(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newlines_collapse_to_spaces() {
        assert_eq!(flatten_text("a\r\nb\nc"), "a  b c");
        assert_eq!(flatten_text("plain"), "plain");
    }
}
