use crate::{
    error::GatewayError,
    models::{BankPaymentRequest, BankPaymentResponse, PaymentStatus},
};
use async_trait::async_trait;

#[async_trait]
pub trait AcquiringBank: Send + Sync {
    /// Single best-effort authorization call. Transport failures surface as
    /// `GatewayError::BankUnavailable`; anything the bank says is mapped to a
    /// `PaymentStatus`.
    async fn authorize(&self, request: &BankPaymentRequest) -> Result<PaymentStatus, GatewayError>;
}

pub struct BankSimulatorClient {
    client: reqwest::Client,
    base_url: String,
}

impl BankSimulatorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn payments_url(&self) -> String {
        format!("{}/payments", self.base_url)
    }
}

#[async_trait]
impl AcquiringBank for BankSimulatorClient {
    async fn authorize(&self, request: &BankPaymentRequest) -> Result<PaymentStatus, GatewayError> {
        tracing::info!(payment = ?request, "Sending payment to banking simulator");

        let response = self
            .client
            .post(self.payments_url())
            .json(request)
            .send()
            .await?;

        let http_status = response.status();
        let body = response.text().await?;

        // The status code is ignored: only the authorization flag decides.
        let parsed = match serde_json::from_str::<BankPaymentResponse>(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(%http_status, "Unparseable banking simulator response: {}", e);
                BankPaymentResponse::default()
            }
        };

        let status = parsed.payment_status();
        if status == PaymentStatus::Rejected {
            tracing::warn!(
                %http_status,
                error_message = ?parsed.error_message,
                "Failed to receive authorization response from banking simulator"
            );
        } else {
            tracing::info!(
                %status,
                authorization_code = ?parsed.authorization_code,
                "Banking simulator responded"
            );
        }

        Ok(status)
    }
}
