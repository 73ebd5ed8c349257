//! Core domain layer for Cleanstart.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (filesystem writes, subprocess invocations) is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: Nothing is mutated after construction; all state
//!   lives for a single process invocation

// Public API - what the world sees
pub mod bundle;
pub mod dependencies;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use bundle::{ConfigBundle, ConfigFile, RelativePath};
pub use dependencies::{BASE_DEPENDENCIES, Dependency, REACT_DEPENDENCIES, dependencies_for};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{PackageManager, ProjectType};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn package_manager_parses_correctly() {
        assert_eq!(PackageManager::from_str("npm").unwrap(), PackageManager::Npm);
        assert_eq!(PackageManager::from_str("YARN").unwrap(), PackageManager::Yarn);
        assert!(PackageManager::from_str("pnpm").is_err());
    }

    #[test]
    fn project_type_parses_correctly() {
        assert_eq!(ProjectType::from_str("node").unwrap(), ProjectType::Node);
        assert_eq!(ProjectType::from_str("React").unwrap(), ProjectType::React);
        assert!(ProjectType::from_str("angular").is_err());
    }

    #[test]
    fn project_type_defaults_to_node() {
        assert_eq!(ProjectType::default(), ProjectType::Node);
    }

    #[test]
    fn npm_dev_install_shape() {
        let dep = Dependency::new("eslint", "8.33.0");
        assert_eq!(PackageManager::Npm.program(), "npm");
        assert_eq!(
            PackageManager::Npm.dev_install_args(&dep),
            vec!["install", "-D", "eslint@8.33.0"]
        );
    }

    #[test]
    fn yarn_dev_install_shape() {
        let dep = Dependency::new("prettier", "2.8.3");
        assert_eq!(PackageManager::Yarn.program(), "yarn");
        assert_eq!(
            PackageManager::Yarn.dev_install_args(&dep),
            vec!["add", "--dev", "prettier@2.8.3"]
        );
    }

    // ========================================================================
    // Dependency List Tests
    // ========================================================================

    #[test]
    fn base_list_has_six_pinned_entries() {
        assert_eq!(BASE_DEPENDENCIES.len(), 6);
        let specs: Vec<String> = BASE_DEPENDENCIES.iter().map(|d| d.spec()).collect();
        assert_eq!(
            specs,
            vec![
                "eslint@8.33.0",
                "prettier@2.8.3",
                "eslint-config-airbnb-base@15.0.0",
                "eslint-config-prettier@8.6.0",
                "eslint-plugin-import@2.27.5",
                "eslint-plugin-prettier@4.2.1",
            ]
        );
    }

    #[test]
    fn react_suffix_has_three_entries() {
        assert_eq!(REACT_DEPENDENCIES.len(), 3);
    }

    #[test]
    fn node_gets_base_only() {
        let deps = dependencies_for(ProjectType::Node);
        assert_eq!(deps.len(), 6);
        assert_eq!(deps, BASE_DEPENDENCIES.to_vec());
    }

    #[test]
    fn react_gets_base_prefix_plus_react_suffix() {
        let deps = dependencies_for(ProjectType::React);
        assert_eq!(deps.len(), 9);
        // Base entries come first, in declaration order.
        assert_eq!(&deps[..6], &BASE_DEPENDENCIES[..]);
        assert_eq!(&deps[6..], &REACT_DEPENDENCIES[..]);
    }

    // ========================================================================
    // Bundle Tests
    // ========================================================================

    #[test]
    fn bundle_rejects_absolute_paths() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new(".eslintrc.json").is_ok());
    }

    #[test]
    fn bundle_preserves_file_order() {
        let bundle = ConfigBundle::new(ProjectType::Node)
            .with_file(ConfigFile::new(".eslintrc.json", "{}").unwrap())
            .with_file(ConfigFile::new(".prettierrc", "{}").unwrap());
        let paths: Vec<&str> = bundle.files().iter().map(|f| f.path().as_str()).collect();
        assert_eq!(paths, vec![".eslintrc.json", ".prettierrc"]);
    }
}
