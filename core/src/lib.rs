//! fraudgen-core: synthesizes labeled financial-transaction datasets for
//! exercising a downstream fraud-detection pipeline.
//!
//! The generated stream mixes statistically normal transactions with four
//! deliberately anomalous patterns, each built to trip one detection rule:
//! high value, high frequency, multiple locations, unusual time. Ground
//! truth is recoverable from the transaction id prefix alone.
//!
//! RULES:
//!   - All randomness flows through a single seeded GenRng per run.
//!   - The core performs no I/O; serialization belongs to the runner.
//!   - Account profiles live exactly as long as one generate() call.

pub mod assembler;
pub mod catalog;
pub mod error;
pub mod fraud;
pub mod normal;
pub mod profile;
pub mod record;
pub mod rng;
pub mod scenario;

pub use assembler::TransactionGenerator;
pub use error::{GenError, GenResult};
pub use record::{Channel, Status, TransactionRecord, TransactionType};
pub use rng::GenRng;
