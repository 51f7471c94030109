use std::sync::Arc;

use temai_core::application::TemaiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: TemaiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: TemaiService) -> Self {
        Self { args, service }
    }
}
