pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{CollectorClient, TransactionQuery};
pub use error::ClientError;
pub use normalize::{normalize_batch, normalize_record};
pub use types::{RawCategory, RawIdentity, RawTransaction, TransactionsResponse};
