use crate::services::DashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardService,
}

impl AppState {
    pub fn new(dashboard: DashboardService) -> Self {
        Self { dashboard }
    }
}
