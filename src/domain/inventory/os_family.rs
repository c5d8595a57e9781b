//! OsFamily and PlatformCategory - classifications derived from the OS string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system family of a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OsFamily {
    Windows,
    Linux,
    Container,
    Unknown,
}

impl OsFamily {
    /// Returns all families in classification priority order.
    pub fn all() -> &'static [OsFamily] {
        &[
            OsFamily::Windows,
            OsFamily::Linux,
            OsFamily::Container,
            OsFamily::Unknown,
        ]
    }

    /// Classifies an OS description by case-insensitive substring match.
    ///
    /// Windows is checked before Linux, Linux before Container, so a string
    /// such as "Windows Subsystem for Linux" resolves to Windows.
    pub fn classify(os: &str) -> OsFamily {
        let os = os.to_lowercase();
        if os.contains("windows") {
            OsFamily::Windows
        } else if os.contains("linux") {
            OsFamily::Linux
        } else if os.contains("container") || os.contains("docker") {
            OsFamily::Container
        } else {
            OsFamily::Unknown
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            OsFamily::Windows => "Windows",
            OsFamily::Linux => "Linux",
            OsFamily::Container => "Container",
            OsFamily::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Platform grouping used for the multi-platform portfolio view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformCategory {
    WindowsServer,
    Linux,
    Containerized,
    Other,
}

impl From<OsFamily> for PlatformCategory {
    fn from(family: OsFamily) -> Self {
        match family {
            OsFamily::Windows => PlatformCategory::WindowsServer,
            OsFamily::Linux => PlatformCategory::Linux,
            OsFamily::Container => PlatformCategory::Containerized,
            OsFamily::Unknown => PlatformCategory::Other,
        }
    }
}
