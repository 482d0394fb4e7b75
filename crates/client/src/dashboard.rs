//! Minimal dashboard JSON builder.
//!
//! Produces the board document sent by [`GrafanaClient::upsert_dashboard`].
//! Panels and rows are not modelled; the board is created empty.
//!
//! [`GrafanaClient::upsert_dashboard`]: crate::GrafanaClient::upsert_dashboard

use serde::{Deserialize, Serialize};

/// Dashboard JSON schema version written by [`DashboardBuilder`].
pub const SCHEMA_VERSION: u32 = 16;

/// Timezone used to render the dashboard's time axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timezone {
    /// Follow the user's or organization's preference.
    #[default]
    #[serde(rename = "")]
    Default,
    #[serde(rename = "utc")]
    Utc,
    #[serde(rename = "browser")]
    Browser,
}

/// Relative time range shown when the dashboard opens, e.g. `now-3h` to `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

/// A dashboard document as understood by `POST /api/dashboards/db`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub editable: bool,
    /// Auto-refresh interval such as `5s`; empty disables auto-refresh.
    #[serde(default)]
    pub refresh: String,
    pub time: TimeRange,
    #[serde(default)]
    pub timezone: Timezone,
    /// 0 = default tooltip, 1 = shared crosshair.
    #[serde(default)]
    pub graph_tooltip: u8,
    #[serde(default)]
    pub panels: Vec<serde_json::Value>,
    pub schema_version: u32,
}

/// Fluent builder for [`Board`].
///
/// ```
/// use grafana_client::{DashboardBuilder, Timezone};
///
/// let board = DashboardBuilder::new("Production overview")
///     .uid("prod-overview")
///     .tags(["generated", "prod"])
///     .auto_refresh("30s")
///     .time("now-6h", "now")
///     .timezone(Timezone::Utc)
///     .shared_crosshair()
///     .build();
///
/// assert_eq!(board.title, "Production overview");
/// assert_eq!(board.graph_tooltip, 1);
/// ```
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    board: Board,
}

impl DashboardBuilder {
    /// Start a board with the given title.
    ///
    /// Defaults: editable, no auto-refresh, last 3 hours, default timezone.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            board: Board {
                title: title.into(),
                uid: None,
                tags: Vec::new(),
                editable: true,
                refresh: String::new(),
                time: TimeRange {
                    from: "now-3h".to_string(),
                    to: "now".to_string(),
                },
                timezone: Timezone::Default,
                graph_tooltip: 0,
                panels: Vec::new(),
                schema_version: SCHEMA_VERSION,
            },
        }
    }

    /// Set a stable UID so repeated upserts target the same dashboard.
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.board.uid = Some(uid.into());
        self
    }

    /// Replace the dashboard's tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.board.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Allow the dashboard to be edited in the UI (the default).
    pub fn editable(mut self) -> Self {
        self.board.editable = true;
        self
    }

    /// Prevent edits to the dashboard from the UI.
    pub fn read_only(mut self) -> Self {
        self.board.editable = false;
        self
    }

    /// Refresh the dashboard every `interval`, e.g. `"5s"` or `"1m"`.
    pub fn auto_refresh(mut self, interval: impl Into<String>) -> Self {
        self.board.refresh = interval.into();
        self
    }

    /// Set the default time range, e.g. `now-6h` to `now`.
    pub fn time(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.board.time = TimeRange {
            from: from.into(),
            to: to.into(),
        };
        self
    }

    /// Set the timezone used to render the time axis.
    pub fn timezone(mut self, timezone: Timezone) -> Self {
        self.board.timezone = timezone;
        self
    }

    /// Share the crosshair between all panels.
    pub fn shared_crosshair(mut self) -> Self {
        self.board.graph_tooltip = 1;
        self
    }

    /// Finish building the board.
    pub fn build(self) -> Board {
        self.board
    }
}
