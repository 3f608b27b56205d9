use std::sync::Arc;

use registrar_core::application::RegistrarService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RegistrarService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RegistrarService) -> Self {
        Self { args, service }
    }
}
