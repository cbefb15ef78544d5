use crate::api::ApiClient;
use crate::dashboard::DashboardController;
use crate::ledger::LedgerController;
use crate::roster::RosterController;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    Employees,
    Attendance,
}

impl Page {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "dashboard" => Some(Page::Dashboard),
            "employees" => Some(Page::Employees),
            "attendance" => Some(Page::Attendance),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Employees => "Employees",
            Page::Attendance => "Attendance",
        }
    }
}

/// Top-level composition: the current page selection plus the three
/// independent controllers. No controller sees another's state; they share
/// only the API client.
pub struct App {
    pub page: Page,
    pub dashboard: DashboardController,
    pub roster: RosterController,
    pub ledger: LedgerController,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            page: Page::Dashboard,
            dashboard: DashboardController::new(api.clone()),
            roster: RosterController::new(api.clone()),
            ledger: LedgerController::new(api),
        }
    }

    /// Switches pages and runs the destination's mount fetch.
    pub async fn goto(&mut self, page: Page) {
        self.page = page;
        self.refresh_current().await;
    }

    /// Re-runs the current page's fetch, e.g. for the retry affordance.
    pub async fn refresh_current(&mut self) {
        match self.page {
            Page::Dashboard => self.dashboard.refresh().await,
            Page::Employees => self.roster.refresh().await,
            Page::Attendance => self.ledger.refresh().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_tokens_round_trip() {
        for page in [Page::Dashboard, Page::Employees, Page::Attendance] {
            let token = page.title().to_ascii_lowercase();
            assert_eq!(Page::parse(&token), Some(page));
        }
        assert_eq!(Page::parse("payroll"), None);
    }
}
