//! Assessment Engine - cloud migration assessment workflow
//!
//! Drives a five-stage assessment (setup, data acquisition, validation,
//! computation, reporting) over a server inventory and produces
//! quantified recommendations with a phased ROI projection.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
