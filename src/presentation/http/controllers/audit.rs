// src/presentation/http/controllers/audit.rs
use crate::application::dto::{ActivityLogDto, Page};
use crate::application::error::ApplicationError;
use crate::application::queries::SearchActivityLogsQuery;
use crate::domain::activity::{ActivityAction, ActivityLogFilter, ActivityType};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ActivityLogParams {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

impl ActivityLogParams {
    fn into_filter(self) -> HttpResult<(ActivityLogFilter, u32, u32)> {
        let activity_type = self
            .activity_type
            .as_deref()
            .map(str::parse::<ActivityType>)
            .transpose()
            .map_err(|err| HttpError::from_error(ApplicationError::from(err)))?;
        let action = self
            .action
            .as_deref()
            .map(str::parse::<ActivityAction>)
            .transpose()
            .map_err(|err| HttpError::from_error(ApplicationError::from(err)))?;

        Ok((
            ActivityLogFilter {
                user_id: self.user_id.map(Into::into),
                activity_type,
                action,
                from: self.from,
                to: self.to,
            },
            self.page,
            self.size,
        ))
    }
}

pub async fn search_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<ActivityLogParams>,
) -> HttpResult<Json<Page<ActivityLogDto>>> {
    let (filter, page, size) = params.into_filter()?;
    state
        .services
        .activity_queries
        .search(&actor, SearchActivityLogsQuery { filter, page, size })
        .await
        .into_http()
        .map(Json)
}

pub async fn export_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<ActivityLogParams>,
) -> HttpResult<Response> {
    let (filter, _, _) = params.into_filter()?;
    let csv = state
        .services
        .activity_queries
        .export_csv(&actor, filter)
        .await
        .into_http()?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"activity_logs.csv\"",
        ),
    ];
    Ok((headers, csv).into_response())
}
