//! Program enum - the three assessment variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ProfileField, Stage};
use crate::domain::foundation::ValidationError;
use crate::domain::inventory::Column;
use crate::domain::recommendation::Category;

/// An assessment program. All share the same five-stage workflow but
/// differ in profile requirements, schema requirements and analyzer emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Program {
    /// Migration Acceleration Program.
    #[serde(rename = "MAP")]
    Map,
    /// Optimization and Licensing Assessment.
    #[serde(rename = "OLA")]
    Ola,
    /// Windows Server and storage specialization.
    #[serde(rename = "ONE_OLA")]
    OneOla,
}

impl Program {
    pub fn all() -> &'static [Program] {
        &[Program::Map, Program::Ola, Program::OneOla]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Program::Map => "MAP",
            Program::Ola => "OLA",
            Program::OneOla => "ONE OLA",
        }
    }

    /// Operator-facing label for a stage of this program.
    pub fn stage_label(&self, stage: Stage) -> &'static str {
        match (self, stage) {
            (Program::Map, Stage::Setup) => "Project Setup",
            (Program::Map, Stage::DataAcquisition) => "Data Upload",
            (Program::Map, Stage::Validation) => "Validation",
            (Program::Map, Stage::Computation) => "Analysis",
            (Program::Map, Stage::Results) => "Results",
            (Program::Ola, Stage::Setup) => "Environment Setup",
            (Program::Ola, Stage::DataAcquisition) => "Multi-Platform Analysis",
            (Program::Ola, Stage::Validation) => "Cost Optimization",
            (Program::Ola, Stage::Computation) => "Licensing Review",
            (Program::Ola, Stage::Results) => "Portfolio Results",
            (Program::OneOla, Stage::Setup) => "Windows Assessment",
            (Program::OneOla, Stage::DataAcquisition) => "Storage Analysis",
            (Program::OneOla, Stage::Validation) => "AD Integration",
            (Program::OneOla, Stage::Computation) => "Licensing Deep Dive",
            (Program::OneOla, Stage::Results) => "Specialized Results",
        }
    }

    /// Profile fields that must be filled before leaving Setup.
    pub fn required_profile_fields(&self) -> &'static [ProfileField] {
        match self {
            Program::Map => &[ProfileField::Customer],
            Program::Ola => &[ProfileField::Customer, ProfileField::Timeline],
            Program::OneOla => &[ProfileField::Customer, ProfileField::Region],
        }
    }

    /// Inventory fields validated for this program.
    pub fn required_columns(&self) -> &'static [Column] {
        match self {
            Program::Map | Program::Ola => Column::core(),
            Program::OneOla => &[
                Column::ServerName,
                Column::CpuCores,
                Column::MemoryGb,
                Column::StorageGb,
                Column::Os,
                Column::StorageType,
            ],
        }
    }

    /// Recommendation categories this program promotes one priority level.
    pub fn emphasized_categories(&self) -> &'static [Category] {
        match self {
            Program::Map => &[Category::RightSizing],
            Program::Ola => &[Category::RightSizing, Category::ReservedCapacity],
            Program::OneOla => &[Category::Licensing, Category::StorageTiering],
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Program {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "map" => Ok(Program::Map),
            "ola" => Ok(Program::Ola),
            "one_ola" => Ok(Program::OneOla),
            _ => Err(ValidationError::invalid_format(
                "program",
                format!("unknown program '{}'", s),
            )),
        }
    }
}
