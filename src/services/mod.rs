pub mod bank;
pub mod repository;
pub mod validation;

pub use bank::{AcquiringBank, BankSimulatorClient};
pub use repository::{InMemoryPaymentsRepository, PaymentsRepository};
pub use validation::normalize;
