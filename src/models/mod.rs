pub mod bank;
pub mod payment;
pub mod response;

pub use bank::*;
pub use payment::*;
pub use response::*;
