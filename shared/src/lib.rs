use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Standard `{ success, message, data }` wrapper used by the auth, file-data,
/// insights and admin endpoints. Other endpoints return bare bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    #[serde(alias = "user")]
    Standard,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    #[serde(default)]
    pub total_uploads: u64,
    #[serde(default)]
    pub total_analyses: u64,
    #[serde(default)]
    pub storage_used: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub usage: Option<UsageStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// One spreadsheet row as returned by the file-data endpoint, column name to
/// cell value. Column order is preserved by `serde_json`'s `preserve_order`.
pub type RowObject = Map<String, Value>;

/// Column names of a row preview, in sheet order.
pub fn column_names(rows: &[RowObject]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_id: String,
    #[serde(default)]
    pub preview: Vec<RowObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    #[serde(alias = "_id")]
    pub id: String,
    pub original_name: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub row_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub chart_type: Option<ChartType>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub files: Vec<UploadedFile>,
    #[serde(default)]
    pub analyses: Vec<Analysis>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Scatter => "Scatter Plot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateChartRequest {
    pub file_id: String,
    pub chart_type: ChartType,
    pub x_column: String,
    pub y_column: String,
    pub max_rows: u32,
}

/// Chart.js-shaped declarative configuration, consumed as-is by the
/// rendering library. Styling keys the server attaches to a dataset are
/// carried through the flattened map without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartType,
    pub data: ChartData,
    #[serde(default)]
    pub options: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(flatten)]
    pub style: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateChartResponse {
    pub chart_config: ChartConfig,
    #[serde(default)]
    pub chart_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStatistics {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub median: Option<f64>,
    #[serde(default)]
    pub std_dev: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub trends: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub anomalies: Vec<String>,
    #[serde(default)]
    pub data_quality: Vec<String>,
    #[serde(default)]
    pub statistics: Map<String, Value>,
}

impl InsightReport {
    /// Statistics keyed by column name; entries that do not decode as
    /// statistics objects are skipped rather than failing the whole report.
    pub fn column_statistics(&self) -> Vec<(String, ColumnStatistics)> {
        self.statistics
            .iter()
            .filter_map(|(column, value)| {
                serde_json::from_value::<ColumnStatistics>(value.clone())
                    .ok()
                    .map(|stats| (column.clone(), stats))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    #[serde(default)]
    pub new_users: u64,
    #[serde(default)]
    pub new_files: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub total_files: u64,
    #[serde(default)]
    pub total_analyses: u64,
    #[serde(default)]
    pub total_storage: Option<String>,
    #[serde(default)]
    pub weekly_stats: Option<WeeklyStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeCount {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAnalytics {
    #[serde(default)]
    pub uploads_per_day: Vec<TypeCount>,
    #[serde(default)]
    pub popular_chart_types: Vec<TypeCount>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_payload_decodes_from_envelope() {
        let body = r#"{
            "success": true,
            "message": "Login successful",
            "data": {
                "token": "jwt-abc",
                "user": {"_id": "u1", "name": "Ada", "email": "a@b.com", "role": "admin"}
            }
        }"#;
        let envelope: ApiEnvelope<AuthData> = serde_json::from_str(body).unwrap();
        let data = envelope.data.unwrap();
        assert_eq!(data.token, "jwt-abc");
        assert_eq!(data.user.email, "a@b.com");
        assert_eq!(data.user.role, Role::Admin);
    }

    #[test]
    fn envelope_without_data_decodes_to_none() {
        let body = r#"{"success": false, "message": "Invalid credentials"}"#;
        let envelope: ApiEnvelope<AuthData> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn legacy_user_role_maps_to_standard() {
        let user: UserProfile = serde_json::from_str(
            r#"{"id": "u2", "name": "Bo", "email": "bo@x.com", "role": "user"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Standard);
    }

    #[test]
    fn chart_request_uses_wire_field_names() {
        let request = GenerateChartRequest {
            file_id: "f1".to_string(),
            chart_type: ChartType::Bar,
            x_column: "Month".to_string(),
            y_column: "Sales".to_string(),
            max_rows: 50,
        };
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["fileId"], "f1");
        assert_eq!(wire["chartType"], "bar");
        assert_eq!(wire["xColumn"], "Month");
        assert_eq!(wire["yColumn"], "Sales");
        assert_eq!(wire["maxRows"], 50);
    }

    #[test]
    fn chart_config_decodes_labels_and_datasets() {
        let body = r##"{
            "chartConfig": {
                "type": "bar",
                "data": {
                    "labels": ["Jan", "Feb"],
                    "datasets": [{"label": "Sales", "data": [10, 20], "backgroundColor": "#912"}]
                }
            }
        }"##;
        let response: GenerateChartResponse = serde_json::from_str(body).unwrap();
        let config = response.chart_config;
        assert_eq!(config.kind, ChartType::Bar);
        assert_eq!(config.data.labels, vec!["Jan", "Feb"]);
        assert_eq!(config.data.datasets[0].style["backgroundColor"], "#912");
    }

    #[test]
    fn column_names_follow_sheet_order() {
        let rows: Vec<RowObject> = serde_json::from_str(
            r#"[{"Month": "Jan", "Sales": 10, "Region": "EU"}, {"Month": "Feb"}]"#,
        )
        .unwrap();
        assert_eq!(column_names(&rows), vec!["Month", "Sales", "Region"]);
        assert!(column_names(&[]).is_empty());
    }

    #[test]
    fn insight_statistics_skip_malformed_entries() {
        let report: InsightReport = serde_json::from_str(
            r#"{
                "summary": "ok",
                "statistics": {"Sales": {"min": 1.0, "max": 9.0, "mean": 5.0}, "Notes": "n/a"}
            }"#,
        )
        .unwrap();
        let stats = report.column_statistics();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].0, "Sales");
        assert_eq!(stats[0].1.mean, Some(5.0));
    }
}
