//! Laya engine XML output format module

mod writer;

pub use writer::serialize_laya;
