use std::sync::Arc;

use pawplan_core::application::PawPlanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PawPlanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PawPlanService) -> Self {
        Self { args, service }
    }
}
