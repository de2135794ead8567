use std::sync::Arc;

use service::repository::{CustomerRepository, EmployeeRepository, VehicleRepository};

/// Repositories shared by every handler. One instance per collection file.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
}
