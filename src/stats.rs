use chrono::{Local, NaiveDate};

use crate::models::{AttendanceRecord, AttendanceStatus, Employee};

/// Top-line dashboard numbers, recomputed from scratch on every fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_attendance: usize,
    pub present_today: usize,
    pub absent_today: usize,
}

/// Present/absent totals for one employee's record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub total_present: usize,
    pub total_absent: usize,
}

pub fn dashboard_stats(employees: &[Employee], attendance: &[AttendanceRecord]) -> DashboardStats {
    dashboard_stats_at(Local::now().date_naive(), employees, attendance)
}

pub fn dashboard_stats_at(
    today: NaiveDate,
    employees: &[Employee],
    attendance: &[AttendanceRecord],
) -> DashboardStats {
    let mut present_today = 0;
    let mut absent_today = 0;
    for record in attendance.iter().filter(|record| record.date == today) {
        match record.status {
            AttendanceStatus::Present => present_today += 1,
            AttendanceStatus::Absent => absent_today += 1,
        }
    }

    DashboardStats {
        total_employees: employees.len(),
        total_attendance: attendance.len(),
        present_today,
        absent_today,
    }
}

pub fn employee_summary(records: &[AttendanceRecord]) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    for record in records {
        match record.status {
            AttendanceStatus::Present => summary.total_present += 1,
            AttendanceStatus::Absent => summary.total_absent += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, name: &str) -> Employee {
        Employee {
            employee_id: id.to_string(),
            full_name: name.to_string(),
            email: format!("{}@example.com", id.to_ascii_lowercase()),
            department: "Engineering".to_string(),
        }
    }

    fn record(id: i64, employee_id: &str, date: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: employee_id.to_string(),
            date,
            status,
        }
    }

    #[test]
    fn totals_match_collection_sizes() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let employees = vec![employee("EMP001", "Alice"), employee("EMP002", "Bob")];
        let attendance = vec![
            record(1, "EMP001", today, AttendanceStatus::Present),
            record(2, "EMP002", today, AttendanceStatus::Absent),
            record(3, "EMP001", today.pred_opt().unwrap(), AttendanceStatus::Present),
        ];

        let stats = dashboard_stats_at(today, &employees, &attendance);
        assert_eq!(stats.total_employees, employees.len());
        assert_eq!(stats.total_attendance, attendance.len());
    }

    #[test]
    fn single_present_record_on_today() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let employees = vec![employee("EMP001", "Alice")];
        let attendance = vec![record(1, "EMP001", today, AttendanceStatus::Present)];

        let stats = dashboard_stats_at(today, &employees, &attendance);
        assert_eq!(stats.present_today, 1);
        assert_eq!(stats.absent_today, 0);
        assert_eq!(stats.total_employees, 1);
        assert_eq!(stats.total_attendance, 1);
    }

    #[test]
    fn other_days_do_not_count_toward_today() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let yesterday = today.pred_opt().unwrap();
        let employees = vec![employee("EMP001", "Alice")];
        let attendance = vec![
            record(1, "EMP001", yesterday, AttendanceStatus::Present),
            record(2, "EMP001", yesterday, AttendanceStatus::Absent),
        ];

        let stats = dashboard_stats_at(today, &employees, &attendance);
        assert_eq!(stats.present_today, 0);
        assert_eq!(stats.absent_today, 0);
        assert_eq!(stats.total_attendance, 2);
    }

    #[test]
    fn summary_counts_partition_the_record_set() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let records = vec![
            record(1, "EMP001", date, AttendanceStatus::Present),
            record(2, "EMP001", date.succ_opt().unwrap(), AttendanceStatus::Absent),
            record(3, "EMP001", date, AttendanceStatus::Present),
        ];

        let summary = employee_summary(&records);
        assert_eq!(summary.total_present, 2);
        assert_eq!(summary.total_absent, 1);
        assert_eq!(summary.total_present + summary.total_absent, records.len());
    }

    #[test]
    fn empty_collections_yield_zeroes() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let stats = dashboard_stats_at(today, &[], &[]);
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(employee_summary(&[]), AttendanceSummary::default());
    }
}
