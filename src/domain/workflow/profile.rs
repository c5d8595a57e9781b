//! AssessmentProfile - configuration captured during program setup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::Program;

/// Named profile fields that a program can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Customer,
    Region,
    Timeline,
    Complexity,
}

impl ProfileField {
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::Customer => "customer",
            ProfileField::Region => "region",
            ProfileField::Timeline => "timeline",
            ProfileField::Complexity => "complexity",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Setup answers for one assessment.
///
/// Beyond the named fields, programs collect free-form attributes
/// (environment type, AD topology, SQL Server presence, ...) which are kept
/// in `attributes` and passed through to the report untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentProfile {
    pub program: Program,
    pub customer: String,
    pub region: Option<String>,
    pub timeline: Option<String>,
    pub complexity: Option<String>,
    #[serde(default)]
    pub workload_types: Vec<String>,
    #[serde(default)]
    pub optimization_goals: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl AssessmentProfile {
    /// Creates a profile with only program and customer filled in.
    pub fn new(program: Program, customer: impl Into<String>) -> Self {
        Self {
            program,
            customer: customer.into(),
            region: None,
            timeline: None,
            complexity: None,
            workload_types: Vec::new(),
            optimization_goals: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = Some(timeline.into());
        self
    }

    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = Some(complexity.into());
        self
    }

    pub fn with_workload_type(mut self, workload: impl Into<String>) -> Self {
        self.workload_types.push(workload.into());
        self
    }

    pub fn with_optimization_goal(mut self, goal: impl Into<String>) -> Self {
        self.optimization_goals.push(goal.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a named field, treating blank text as absent.
    pub fn value(&self, field: ProfileField) -> Option<&str> {
        let value = match field {
            ProfileField::Customer => Some(self.customer.as_str()),
            ProfileField::Region => self.region.as_deref(),
            ProfileField::Timeline => self.timeline.as_deref(),
            ProfileField::Complexity => self.complexity.as_deref(),
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    /// Returns the first field required by the program that is not filled.
    pub fn first_missing_field(&self) -> Option<ProfileField> {
        self.program
            .required_profile_fields()
            .iter()
            .find(|f| self.value(**f).is_none())
            .copied()
    }

    /// Returns true if every field the program requires is filled.
    pub fn is_complete(&self) -> bool {
        self.first_missing_field().is_none()
    }
}
