use crate::models::PaymentRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[async_trait]
pub trait PaymentsRepository: Send + Sync {
    async fn add(&self, record: PaymentRecord);
    async fn get(&self, id: Uuid) -> Option<PaymentRecord>;
    async fn count(&self) -> usize;
}

/// Process-lifetime payment store. Nothing is evicted or persisted.
#[derive(Clone, Default)]
pub struct InMemoryPaymentsRepository {
    payments: Arc<RwLock<HashMap<Uuid, PaymentRecord>>>,
}

impl InMemoryPaymentsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentsRepository for InMemoryPaymentsRepository {
    async fn add(&self, record: PaymentRecord) {
        tracing::debug!(payment_id = %record.id, "Storing payment");
        self.payments.write().await.insert(record.id, record);
    }

    async fn get(&self, id: Uuid) -> Option<PaymentRecord> {
        self.payments.read().await.get(&id).cloned()
    }

    async fn count(&self) -> usize {
        self.payments.read().await.len()
    }
}
