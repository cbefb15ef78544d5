use tracing::error;

use crate::api::ApiClient;
use crate::models::Employee;
use crate::state::{EmployeeForm, Notice, ViewState};

/// Employee roster: fetch-on-mount plus the create and delete workflows.
pub struct RosterController {
    api: ApiClient,
    pub view: ViewState<Vec<Employee>>,
    pub form: EmployeeForm,
    pub form_open: bool,
    pub submitting: bool,
    pub delete_target: Option<Employee>,
    pub deleting: bool,
}

impl RosterController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            view: ViewState::Loading,
            form: EmployeeForm::default(),
            form_open: false,
            submitting: false,
            delete_target: None,
            deleting: false,
        }
    }

    pub async fn refresh(&mut self) {
        self.view = ViewState::Loading;
        match self.api.list_employees().await {
            Ok(employees) => self.view = ViewState::Ready(employees),
            Err(err) => {
                error!("failed to load employees: {err}");
                self.view = ViewState::Failed(err.message);
            }
        }
    }

    pub fn find(&self, employee_id: &str) -> Option<&Employee> {
        self.view
            .ready()?
            .iter()
            .find(|employee| employee.employee_id == employee_id)
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    /// Submits the create form. Success closes and resets the form and
    /// re-fetches the roster; failure leaves the input in place for retry.
    pub async fn submit_new(&mut self) -> Option<Notice> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        let result = self.api.create_employee(&self.form.to_employee()).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.form_open = false;
                self.form = EmployeeForm::default();
                self.refresh().await;
                Some(Notice::Success("Employee added".to_string()))
            }
            Err(err) => Some(Notice::Error(err.message)),
        }
    }

    /// Opens the confirmation gate for one employee.
    pub fn request_delete(&mut self, employee: Employee) {
        self.delete_target = Some(employee);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    /// Runs the confirmed deletion. The gate closes only on success; on
    /// failure it stays open so the operator can retry or cancel.
    pub async fn confirm_delete(&mut self) -> Option<Notice> {
        if self.deleting {
            return None;
        }
        let target = self.delete_target.clone()?;

        self.deleting = true;
        let result = self.api.delete_employee(&target.employee_id).await;
        self.deleting = false;

        match result {
            Ok(()) => {
                self.delete_target = None;
                self.refresh().await;
                Some(Notice::Success("Employee deleted successfully".to_string()))
            }
            Err(err) => {
                error!("failed to delete employee {}: {err}", target.employee_id);
                Some(Notice::Error(err.message))
            }
        }
    }
}
