//! Common types shared by every gateway entity

pub mod loose;
pub mod record_id;

// Re-exports
pub use loose::{parse_float_prefix, parse_int_prefix, LooseInteger, LooseNumber, LooseText};
pub use record_id::RecordId;
