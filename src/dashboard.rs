use tracing::error;

use crate::api::ApiClient;
use crate::state::ViewState;
use crate::stats::{DashboardStats, dashboard_stats};

/// Read-only top-line statistics over both collections. No mutations, no
/// filters; the shape of the state machine matches the other views.
pub struct DashboardController {
    api: ApiClient,
    pub view: ViewState<DashboardStats>,
}

impl DashboardController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            view: ViewState::Loading,
        }
    }

    /// Fetches both collections together; the employees error wins if both
    /// legs fail.
    pub async fn refresh(&mut self) {
        self.view = ViewState::Loading;
        let (employees, attendance) = tokio::join!(
            self.api.list_employees(),
            self.api.list_attendance(None, None),
        );

        let combined = employees.and_then(|employees| {
            attendance.map(|attendance| dashboard_stats(&employees, &attendance))
        });
        match combined {
            Ok(stats) => self.view = ViewState::Ready(stats),
            Err(err) => {
                error!("failed to load dashboard: {err}");
                self.view = ViewState::Failed(err.message);
            }
        }
    }
}
