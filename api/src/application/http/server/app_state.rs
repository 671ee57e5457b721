use std::sync::Arc;

use allerscan_core::application::AllerScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AllerScanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AllerScanService) -> Self {
        Self { args, service }
    }
}
