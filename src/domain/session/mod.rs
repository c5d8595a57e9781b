//! Session Module - per-operator assessment context.

mod aggregate;

pub use aggregate::AssessmentSession;
