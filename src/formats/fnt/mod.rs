//! Classic FNT text output format module

mod writer;

pub use writer::serialize_fnt;
