//! The fixed dev-dependency lists.
//!
//! Two explicit named sequences replace positional indexing into one flat
//! array: `BASE_DEPENDENCIES` is always installed, `REACT_DEPENDENCIES` is
//! appended for react projects. Order is installation order.

use std::fmt;

use super::value_objects::ProjectType;

/// A single dev dependency, pinned to an exact version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    name: &'static str,
    version: &'static str,
}

impl Dependency {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// The spec string handed to the package manager: `name@version`.
    pub fn spec(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Installed for every project type.
pub const BASE_DEPENDENCIES: [Dependency; 6] = [
    Dependency::new("eslint", "8.33.0"),
    Dependency::new("prettier", "2.8.3"),
    Dependency::new("eslint-config-airbnb-base", "15.0.0"),
    Dependency::new("eslint-config-prettier", "8.6.0"),
    Dependency::new("eslint-plugin-import", "2.27.5"),
    Dependency::new("eslint-plugin-prettier", "4.2.1"),
];

/// Appended after the base list for react projects.
pub const REACT_DEPENDENCIES: [Dependency; 3] = [
    Dependency::new("eslint-plugin-react", "7.32.2"),
    Dependency::new("eslint-plugin-react-hooks", "4.6.0"),
    Dependency::new("eslint-plugin-jsx-a11y", "6.7.1"),
];

/// The full install list for a project type, in installation order.
pub fn dependencies_for(project_type: ProjectType) -> Vec<Dependency> {
    let mut deps = BASE_DEPENDENCIES.to_vec();
    if project_type == ProjectType::React {
        deps.extend_from_slice(&REACT_DEPENDENCIES);
    }
    deps
}
