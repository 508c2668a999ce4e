pub mod health;
pub mod payments;

pub use health::*;
pub use payments::*;

use crate::services::{AcquiringBank, PaymentsRepository};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn PaymentsRepository>,
    pub bank: Arc<dyn AcquiringBank>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(repository: Arc<dyn PaymentsRepository>, bank: Arc<dyn AcquiringBank>) -> Self {
        Self {
            repository,
            bank,
            started_at: Instant::now(),
        }
    }
}
