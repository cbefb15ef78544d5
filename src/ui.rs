//! Pure renderers: state in, text out. No I/O and no state changes here.

use crate::app::{App, Page};
use crate::ledger::{EmployeeDetail, LedgerController};
use crate::roster::RosterController;
use crate::state::{Notice, ViewState};
use crate::stats::DashboardStats;

pub fn render_app(app: &App) -> String {
    let body = match app.page {
        Page::Dashboard => render_dashboard(&app.dashboard.view),
        Page::Employees => render_roster(&app.roster),
        Page::Attendance => render_ledger(&app.ledger),
    };
    format!("{}\n{body}", render_nav(app.page))
}

pub fn render_nav(current: Page) -> String {
    let tabs = [Page::Dashboard, Page::Employees, Page::Attendance]
        .iter()
        .map(|page| {
            if *page == current {
                format!("[{}]", page.title())
            } else {
                page.title().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    // The logout affordance exists but is inert.
    format!("HRMS Lite | {tabs} | Admin User (Logout disabled)\n")
}

pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::Success(message) => format!("ok: {message}\n"),
        Notice::Error(message) => format!("error: {message}\n"),
    }
}

pub fn render_dashboard(view: &ViewState<DashboardStats>) -> String {
    match view {
        ViewState::Loading => loading("Loading dashboard..."),
        ViewState::Failed(message) => failed(message),
        ViewState::Ready(stats) => format!(
            "Dashboard - Overview\n\
             \x20 Total Employees : {}\n\
             \x20 Present Today   : {}\n\
             \x20 Absent Today    : {}\n\
             \x20 Total Records   : {}\n",
            stats.total_employees, stats.present_today, stats.absent_today, stats.total_attendance,
        ),
    }
}

pub fn render_roster(roster: &RosterController) -> String {
    let mut out = String::from("Employees - Manage your employee records\n");
    match &roster.view {
        ViewState::Loading => return loading("Loading employees..."),
        ViewState::Failed(message) => return failed(message),
        ViewState::Ready(employees) => {
            if employees.is_empty() {
                out.push_str(&empty_state(
                    "No employees found",
                    "Get started by adding your first employee",
                ));
            } else {
                out.push_str(&format!(
                    "  {:<10} {:<24} {:<28} {:<16}\n",
                    "ID", "NAME", "EMAIL", "DEPARTMENT"
                ));
                for employee in employees {
                    out.push_str(&format!(
                        "  {:<10} {:<24} {:<28} {:<16}\n",
                        employee.employee_id,
                        employee.full_name,
                        employee.email,
                        employee.department,
                    ));
                }
            }
        }
    }

    if roster.form_open {
        out.push_str(&format!(
            "\nAdd New Employee (id='{}' name='{}' email='{}' department='{}'){}\n",
            roster.form.employee_id,
            roster.form.full_name,
            roster.form.email,
            roster.form.department,
            if roster.submitting { " [submitting]" } else { "" },
        ));
    }

    if let Some(target) = &roster.delete_target {
        out.push_str(&format!(
            "\nDelete Employee: are you sure you want to delete {}? This action \
             cannot be undone and will also delete all attendance records for \
             this employee. (confirm/cancel){}\n",
            target.full_name,
            if roster.deleting { " [deleting]" } else { "" },
        ));
    }

    out
}

pub fn render_ledger(ledger: &LedgerController) -> String {
    let mut out = String::from("Attendance - Track and manage daily attendance\n");
    let data = match &ledger.view {
        ViewState::Loading => return loading("Loading attendance..."),
        ViewState::Failed(message) => return failed(message),
        ViewState::Ready(data) => data,
    };

    if data.employees.is_empty() {
        out.push_str(&empty_state(
            "No employees found",
            "Please add employees first before marking attendance",
        ));
        return out;
    }

    out.push_str(&format!(
        "  Filters: employee={} from={} to={}\n",
        ledger
            .filters
            .employee_id
            .as_deref()
            .unwrap_or("all"),
        ledger
            .filters
            .from_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "-".to_string()),
        ledger
            .filters
            .to_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "-".to_string()),
    ));

    let visible = ledger.visible();
    if visible.is_empty() {
        if ledger.filters.is_active() {
            out.push_str(&empty_state(
                "No records found",
                "No attendance records match the selected filters. Try adjusting \
                 your filters or clear them to see all records.",
            ));
        } else {
            out.push_str(&empty_state(
                "No attendance records",
                "Start by marking attendance for your employees",
            ));
        }
    } else {
        out.push_str(&format!(
            "  {:<12} {:<24} {:<8}\n",
            "DATE", "EMPLOYEE", "STATUS"
        ));
        for record in visible {
            out.push_str(&format!(
                "  {:<12} {:<24} {:<8}\n",
                record.date.to_string(),
                ledger.employee_name(&record.employee_id),
                record.status.as_str(),
            ));
        }
    }

    if ledger.form_open {
        out.push_str(&format!(
            "\nMark Attendance (employee='{}' date={} status={}){}\n",
            ledger.form.employee_id,
            ledger.form.date,
            ledger.form.status.as_str(),
            if ledger.submitting { " [submitting]" } else { "" },
        ));
    }

    if let Some(detail) = &ledger.drilldown {
        out.push('\n');
        out.push_str(&render_detail(detail));
    }

    out
}

pub fn render_detail(detail: &EmployeeDetail) -> String {
    let mut out = format!(
        "{} - Attendance Details\n\
         \x20 Total Present : {}\n\
         \x20 Total Absent  : {}\n",
        detail.full_name, detail.summary.total_present, detail.summary.total_absent,
    );
    if detail.records.is_empty() {
        out.push_str(&empty_state(
            "No attendance records",
            "No attendance has been marked for this employee yet",
        ));
    } else {
        out.push_str("  Attendance History\n");
        for record in &detail.records {
            out.push_str(&format!(
                "    {}  {}\n",
                record.date,
                record.status.as_str()
            ));
        }
    }
    out
}

fn loading(message: &str) -> String {
    format!("{message}\n")
}

fn failed(message: &str) -> String {
    format!("Error: {message}\nType 'retry' to run the fetch again.\n")
}

fn empty_state(title: &str, message: &str) -> String {
    format!("  {title}\n  {message}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DashboardStats;

    #[test]
    fn dashboard_render_shows_counts() {
        let view = ViewState::Ready(DashboardStats {
            total_employees: 3,
            total_attendance: 9,
            present_today: 2,
            absent_today: 1,
        });
        let text = render_dashboard(&view);
        assert!(text.contains("Total Employees : 3"));
        assert!(text.contains("Total Records   : 9"));
    }

    #[test]
    fn failed_render_offers_retry() {
        let view: ViewState<DashboardStats> = ViewState::Failed("boom".to_string());
        let text = render_dashboard(&view);
        assert!(text.contains("Error: boom"));
        assert!(text.contains("retry"));
    }
}
