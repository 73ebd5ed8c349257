//! Value objects: the two choices gathered at the start of a run.
//!
//! Both are selected once (prompt or flag) and stay immutable for the rest of
//! the process.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::dependencies::Dependency;
use super::error::DomainError;

/// The package manager used to install dev dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// The executable name invoked for each install.
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Argument vector for installing a single package as a dev dependency.
    ///
    /// Shapes: `npm install -D <name>@<version>` and
    /// `yarn add --dev <name>@<version>`.
    pub fn dev_install_args(&self, dep: &Dependency) -> Vec<String> {
        let (install, dev_flag) = match self {
            Self::Npm => ("install", "-D"),
            Self::Yarn => ("add", "--dev"),
        };
        vec![install.to_string(), dev_flag.to_string(), dep.spec()]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::Npm
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            other => Err(DomainError::UnknownPackageManager { name: other.into() }),
        }
    }
}

/// The kind of project being set up.
///
/// Selects the config bundle to copy and whether the react-specific
/// dependency suffix is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Node,
    React,
}

impl ProjectType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::React => "react",
        }
    }

    /// All supported project types, in prompt order.
    pub const fn all() -> [ProjectType; 2] {
        [Self::Node, Self::React]
    }
}

impl Default for ProjectType {
    fn default() -> Self {
        Self::Node
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "node" => Ok(Self::Node),
            "react" => Ok(Self::React),
            other => Err(DomainError::UnknownProjectType { name: other.into() }),
        }
    }
}
