use chrono::NaiveDate;
use tracing::error;

use crate::api::ApiClient;
use crate::models::{AttendanceRecord, Employee, NewAttendance};
use crate::state::{AttendanceForm, LedgerFilters, Notice, ViewState};
use crate::stats::{AttendanceSummary, employee_summary};

/// Both collections the ledger view needs: the date-filtered records and the
/// full roster for name lookups and the employee picker.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerData {
    pub attendance: Vec<AttendanceRecord>,
    pub employees: Vec<Employee>,
}

/// Per-employee drill-down layered over the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetail {
    pub employee_id: String,
    pub full_name: String,
    pub records: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
}

/// Attendance ledger: fetch-on-mount and on date-filter change, the
/// mark-attendance workflow, and the per-employee drill-down.
pub struct LedgerController {
    api: ApiClient,
    pub view: ViewState<LedgerData>,
    pub form: AttendanceForm,
    pub form_open: bool,
    pub submitting: bool,
    pub filters: LedgerFilters,
    pub drilldown: Option<EmployeeDetail>,
}

impl LedgerController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            view: ViewState::Loading,
            form: AttendanceForm::reset(),
            form_open: false,
            submitting: false,
            filters: LedgerFilters::default(),
            drilldown: None,
        }
    }

    /// Fetches the date-filtered records and the roster together. Both
    /// requests run to completion; the attendance error wins if both fail.
    pub async fn refresh(&mut self) {
        self.view = ViewState::Loading;
        let (attendance, employees) = tokio::join!(
            self.api
                .list_attendance(self.filters.from_date, self.filters.to_date),
            self.api.list_employees(),
        );

        let combined = attendance.and_then(|attendance| {
            employees.map(|employees| LedgerData {
                attendance,
                employees,
            })
        });
        match combined {
            Ok(data) => self.view = ViewState::Ready(data),
            Err(err) => {
                error!("failed to load attendance: {err}");
                self.view = ViewState::Failed(err.message);
            }
        }
    }

    /// Date bounds are served remotely; changing one re-fetches.
    pub async fn set_from_date(&mut self, date: Option<NaiveDate>) {
        self.filters.from_date = date;
        self.refresh().await;
    }

    pub async fn set_to_date(&mut self, date: Option<NaiveDate>) {
        self.filters.to_date = date;
        self.refresh().await;
    }

    /// The employee dimension filters client-side; no re-fetch.
    pub fn set_employee_filter(&mut self, employee_id: Option<String>) {
        self.filters.employee_id = employee_id;
    }

    /// Resets all three filter fields with a single re-fetch.
    pub async fn clear_filters(&mut self) {
        self.filters = LedgerFilters::default();
        self.refresh().await;
    }

    /// The fetched rows narrowed by the employee filter; identity when the
    /// filter is unset.
    pub fn visible(&self) -> Vec<&AttendanceRecord> {
        let Some(data) = self.view.ready() else {
            return Vec::new();
        };
        data.attendance
            .iter()
            .filter(|record| match &self.filters.employee_id {
                Some(id) => record.employee_id == *id,
                None => true,
            })
            .collect()
    }

    pub fn employee_name<'a>(&'a self, employee_id: &'a str) -> &'a str {
        self.view
            .ready()
            .and_then(|data| {
                data.employees
                    .iter()
                    .find(|employee| employee.employee_id == employee_id)
            })
            .map(|employee| employee.full_name.as_str())
            .unwrap_or(employee_id)
    }

    /// Marking attendance needs at least one employee to attribute it to.
    pub fn can_mark(&self) -> bool {
        self.view
            .ready()
            .is_some_and(|data| !data.employees.is_empty())
    }

    pub fn open_form(&mut self) {
        if self.can_mark() {
            self.form_open = true;
        }
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    /// Submits the mark-attendance form. Same contract as the roster create:
    /// success closes, resets to today/Present and re-fetches; failure keeps
    /// the form open.
    pub async fn submit_mark(&mut self) -> Option<Notice> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        let payload = NewAttendance {
            employee_id: self.form.employee_id.clone(),
            date: self.form.date,
            status: self.form.status,
        };
        let result = self.api.create_attendance(&payload).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.form_open = false;
                self.form = AttendanceForm::reset();
                self.refresh().await;
                Some(Notice::Success("Attendance marked".to_string()))
            }
            Err(err) => Some(Notice::Error(err.message)),
        }
    }

    /// Fetches one employee's full history, independent of the date filters,
    /// and replaces any previous drill-down target.
    pub async fn open_drilldown(&mut self, employee_id: &str) -> Option<Notice> {
        match self.api.list_attendance_by_employee(employee_id).await {
            Ok(records) => {
                self.drilldown = Some(EmployeeDetail {
                    employee_id: employee_id.to_string(),
                    full_name: self.employee_name(employee_id).to_string(),
                    summary: employee_summary(&records),
                    records,
                });
                None
            }
            Err(err) => {
                error!("failed to load history for {employee_id}: {err}");
                Some(Notice::Error(err.message))
            }
        }
    }

    pub fn close_drilldown(&mut self) {
        self.drilldown = None;
    }
}
