use chrono::{Local, NaiveDate};

use crate::models::{AttendanceStatus, Employee};

/// Page state machine shared by all three views: a fetch is outstanding, the
/// whole view failed with a display message, or the data is in.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Transient one-shot notification a mutation hands back for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeForm {
    /// Required-field presence, the only client-side validation.
    pub fn is_complete(&self) -> bool {
        [
            &self.employee_id,
            &self.full_name,
            &self.email,
            &self.department,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    pub fn to_employee(&self) -> Employee {
        Employee {
            employee_id: self.employee_id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceForm {
    /// Fresh form: no employee picked, today's date, Present.
    pub fn reset() -> Self {
        Self {
            employee_id: String::new(),
            date: Local::now().date_naive(),
            status: AttendanceStatus::Present,
        }
    }

    /// The service refuses future-dated records, so the form never holds one.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date.min(Local::now().date_naive());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerFilters {
    pub employee_id: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl LedgerFilters {
    pub fn is_active(&self) -> bool {
        self.employee_id.is_some() || self.from_date.is_some() || self.to_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn employee_form_requires_every_field() {
        let mut form = EmployeeForm::default();
        assert!(!form.is_complete());

        form.employee_id = "EMP001".to_string();
        form.full_name = "Alice".to_string();
        form.email = "alice@example.com".to_string();
        assert!(!form.is_complete());

        form.department = "  ".to_string();
        assert!(!form.is_complete());

        form.department = "Engineering".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn attendance_form_resets_to_today_and_present() {
        let form = AttendanceForm::reset();
        assert_eq!(form.date, Local::now().date_naive());
        assert_eq!(form.status, AttendanceStatus::Present);
        assert!(form.employee_id.is_empty());
    }

    #[test]
    fn attendance_date_is_clamped_to_today() {
        let mut form = AttendanceForm::reset();
        let today = Local::now().date_naive();

        form.set_date(today + Duration::days(5));
        assert_eq!(form.date, today);

        let last_week = today - Duration::days(7);
        form.set_date(last_week);
        assert_eq!(form.date, last_week);
    }

    #[test]
    fn filters_report_activity() {
        let mut filters = LedgerFilters::default();
        assert!(!filters.is_active());
        filters.employee_id = Some("EMP001".to_string());
        assert!(filters.is_active());
    }
}
