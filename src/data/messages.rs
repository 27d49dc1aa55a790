//! Request/response protocol between the controller and the host's fetch
//! layer.

use serde::{Deserialize, Serialize};

use crate::domain::{Role, UserProfile};

/// One endpoint a dashboard widget reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataRequest {
    AdminStats,
    AdminApprovals,
    #[serde(rename_all = "camelCase")]
    StudentAttendance { student_id: String },
    Announcements,
}

impl DataRequest {
    /// HTTP method and path, relative to the API origin.
    ///
    /// ```
    /// use campusnav::data::DataRequest;
    ///
    /// let req = DataRequest::StudentAttendance { student_id: "s-17".into() };
    /// assert_eq!(req.endpoint(), "/attendance/student/s-17");
    /// ```
    #[must_use]
    pub fn endpoint(&self) -> String {
        match self {
            Self::AdminStats => "/api/admin/stats".to_string(),
            Self::AdminApprovals => "/api/admin/approvals".to_string(),
            Self::StudentAttendance { student_id } => format!("/attendance/student/{student_id}"),
            Self::Announcements => "/api/announcements".to_string(),
        }
    }

    /// Id of the widget container that shows this data.
    #[must_use]
    pub const fn widget(&self) -> &'static str {
        match self {
            Self::AdminStats => "stats",
            Self::AdminApprovals => "approvals",
            Self::StudentAttendance { .. } => "attendance",
            Self::Announcements => "notice-ticker",
        }
    }

    /// Text shown when neither live nor sample data is available.
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::AdminStats => "Statistics unavailable",
            Self::AdminApprovals => "No pending approvals",
            Self::StudentAttendance { .. } => "No attendance records yet",
            Self::Announcements => "No announcements",
        }
    }

    /// Soft warning shown when the live request failed.
    #[must_use]
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::AdminStats => "Failed to load dashboard statistics",
            Self::AdminApprovals => "Failed to load pending approvals",
            Self::StudentAttendance { .. } => "Failed to load attendance data",
            Self::Announcements => "Failed to load announcements",
        }
    }

    /// Requests a dashboard issues on mount.
    ///
    /// Attendance needs the student's record id; without one it is skipped.
    #[must_use]
    pub fn for_dashboard(role: Role, user: Option<&UserProfile>) -> Vec<Self> {
        let mut requests = match role {
            Role::Admin => vec![Self::AdminStats, Self::AdminApprovals],
            Role::Student => user
                .and_then(UserProfile::record_id)
                .map(|student_id| vec![Self::StudentAttendance { student_id }])
                .unwrap_or_default(),
            Role::Teacher => Vec::new(),
        };
        requests.push(Self::Announcements);
        requests
    }
}

/// What the host's fetch produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DataOutcome {
    /// The server answered; `body` is the raw response text.
    Body { body: String },
    /// The request never produced a body (offline, CORS, timeout).
    Failed { error: String },
}

/// Origin of rendered widget data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataSource {
    Live,
    Sample,
}

/// What a widget renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WidgetContent {
    Table {
        source: DataSource,
        data: serde_json::Value,
    },
    Chart {
        source: DataSource,
        spec: super::ChartSpec,
    },
    Placeholder {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_dashboard_requests_stats_and_approvals() {
        let requests = DataRequest::for_dashboard(Role::Admin, None);
        assert_eq!(
            requests,
            vec![DataRequest::AdminStats, DataRequest::AdminApprovals, DataRequest::Announcements]
        );
    }

    #[test]
    fn student_without_record_id_skips_attendance() {
        let user = UserProfile::new("Ann", Role::Student);
        assert_eq!(
            DataRequest::for_dashboard(Role::Student, Some(&user)),
            vec![DataRequest::Announcements]
        );
    }

    #[test]
    fn request_wire_format() {
        let req = DataRequest::StudentAttendance { student_id: "7".into() };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "studentAttendance", "studentId": "7"}));
    }
}
