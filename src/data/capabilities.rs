//! Optional rendering strategies.
//!
//! Charting and sample data are injected at construction instead of detected
//! at runtime. A controller without them still renders: tables instead of
//! charts, placeholders instead of samples.

use serde::Serialize;
use serde_json::{json, Value};

use super::messages::DataRequest;

/// Series handed to the host's charting library.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub chart_type: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Turns widget data into a chart.
pub trait ChartRenderer: Send {
    /// Returns `None` when this request is not drawn as a chart.
    fn chart(&self, request: &DataRequest, data: &Value) -> Option<ChartSpec>;
}

/// Supplies data to show when the live request failed.
pub trait SampleDataProvider: Send {
    fn sample(&self, request: &DataRequest) -> Option<Value>;
}

/// Optional strategies injected into the controller at construction.
///
/// ```
/// use campusnav::data::{AttendanceChart, Capabilities, StaticSamples};
///
/// let caps = Capabilities::default().with_chart(AttendanceChart).with_samples(StaticSamples);
/// assert!(caps.chart().is_some());
/// ```
#[derive(Default)]
pub struct Capabilities {
    chart: Option<Box<dyn ChartRenderer>>,
    samples: Option<Box<dyn SampleDataProvider>>,
}

impl Capabilities {
    #[must_use]
    pub fn with_chart(mut self, renderer: impl ChartRenderer + 'static) -> Self {
        self.chart = Some(Box::new(renderer));
        self
    }

    #[must_use]
    pub fn with_samples(mut self, provider: impl SampleDataProvider + 'static) -> Self {
        self.samples = Some(Box::new(provider));
        self
    }

    #[must_use]
    pub fn chart(&self) -> Option<&dyn ChartRenderer> {
        self.chart.as_deref()
    }

    #[must_use]
    pub fn samples(&self) -> Option<&dyn SampleDataProvider> {
        self.samples.as_deref()
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("chart", &self.chart.is_some())
            .field("samples", &self.samples.is_some())
            .finish()
    }
}

/// Bar chart of per-subject attendance percentages.
///
/// Expects `[{"subject": "...", "percentage": 87.5}, ...]`; rows missing
/// either field are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceChart;

impl ChartRenderer for AttendanceChart {
    fn chart(&self, request: &DataRequest, data: &Value) -> Option<ChartSpec> {
        if !matches!(request, DataRequest::StudentAttendance { .. }) {
            return None;
        }

        let (labels, values) = data
            .as_array()?
            .iter()
            .filter_map(|row| {
                let subject = row.get("subject")?.as_str()?;
                let pct = row.get("percentage")?.as_f64()?;
                Some((subject.to_string(), pct))
            })
            .unzip::<_, _, Vec<_>, Vec<_>>();

        if labels.is_empty() {
            return None;
        }

        Some(ChartSpec {
            chart_type: "bar",
            labels,
            values,
        })
    }
}

/// Fixed demo data for offline dashboards.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSamples;

impl SampleDataProvider for StaticSamples {
    fn sample(&self, request: &DataRequest) -> Option<Value> {
        match request {
            DataRequest::AdminStats => Some(json!({
                "totalStudents": 1250,
                "totalTeachers": 84,
                "departments": 12,
                "pendingApprovals": 3
            })),
            DataRequest::AdminApprovals => Some(json!([
                {"name": "R. Sharma", "role": "teacher", "department": "Physics"},
                {"name": "L. Okafor", "role": "student", "department": "Mathematics"},
                {"name": "M. Chen", "role": "student", "department": "Computer Science"}
            ])),
            DataRequest::StudentAttendance { .. } => Some(json!([
                {"subject": "Mathematics", "percentage": 92.0},
                {"subject": "Physics", "percentage": 85.5},
                {"subject": "Chemistry", "percentage": 78.0},
                {"subject": "English", "percentage": 95.0}
            ])),
            DataRequest::Announcements => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_chart_skips_incomplete_rows() {
        let request = DataRequest::StudentAttendance { student_id: "1".into() };
        let data = json!([
            {"subject": "Maths", "percentage": 90},
            {"subject": "Art"},
            {"subject": "Physics", "percentage": 71.5}
        ]);
        let spec = AttendanceChart.chart(&request, &data).unwrap();
        assert_eq!(spec.labels, vec!["Maths", "Physics"]);
        assert_eq!(spec.values, vec![90.0, 71.5]);
    }

    #[test]
    fn attendance_chart_ignores_other_widgets() {
        assert!(AttendanceChart.chart(&DataRequest::AdminStats, &json!([])).is_none());
        let request = DataRequest::StudentAttendance { student_id: "1".into() };
        assert!(AttendanceChart.chart(&request, &json!([])).is_none());
    }

    #[test]
    fn samples_exist_for_every_widget_but_the_ticker() {
        assert!(StaticSamples.sample(&DataRequest::AdminStats).is_some());
        assert!(StaticSamples.sample(&DataRequest::Announcements).is_none());
    }
}
