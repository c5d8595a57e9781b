//! Inventory source adapters.

mod csv_reader;
mod sample;

pub use csv_reader::CsvInventoryReader;
pub use sample::{SampleInventoryGenerator, SampleProfile};
