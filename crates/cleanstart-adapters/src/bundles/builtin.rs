//! Built-in config bundles.
//!
//! The file contents below are the canonical airbnb-base + prettier setup
//! matching the pinned dev-dependency lists. They are embedded so the tool
//! needs nothing on disk besides its own binary. Copied verbatim - no
//! templating or variable substitution.

use cleanstart_core::{
    application::ports::ConfigSource,
    domain::{ConfigBundle, ConfigFile, ProjectType},
    error::{CleanstartError, CleanstartResult},
};

const ESLINTRC_NODE: &str = r#"{
  "env": {
    "node": true,
    "es2021": true
  },
  "extends": ["airbnb-base", "prettier"],
  "plugins": ["prettier"],
  "parserOptions": {
    "ecmaVersion": "latest",
    "sourceType": "module"
  },
  "rules": {
    "prettier/prettier": "error",
    "no-console": "off",
    "import/extensions": ["error", "ignorePackages"]
  }
}
"#;

const ESLINTRC_REACT: &str = r#"{
  "env": {
    "browser": true,
    "es2021": true
  },
  "extends": [
    "airbnb-base",
    "plugin:react/recommended",
    "plugin:react-hooks/recommended",
    "plugin:jsx-a11y/recommended",
    "prettier"
  ],
  "plugins": ["react", "react-hooks", "jsx-a11y", "prettier"],
  "parserOptions": {
    "ecmaFeatures": {
      "jsx": true
    },
    "ecmaVersion": "latest",
    "sourceType": "module"
  },
  "settings": {
    "react": {
      "version": "detect"
    }
  },
  "rules": {
    "prettier/prettier": "error",
    "react/react-in-jsx-scope": "off"
  }
}
"#;

const PRETTIERRC: &str = r#"{
  "printWidth": 80,
  "tabWidth": 2,
  "singleQuote": true,
  "semi": true,
  "trailingComma": "none",
  "bracketSpacing": true,
  "arrowParens": "always",
  "endOfLine": "lf"
}
"#;

const ESLINTIGNORE: &str = "node_modules\ndist\nbuild\ncoverage\n";

const PRETTIERIGNORE: &str = "node_modules\ndist\nbuild\ncoverage\npackage-lock.json\nyarn.lock\n";

const EDITORCONFIG: &str = r#"root = true

[*]
charset = utf-8
end_of_line = lf
indent_size = 2
indent_style = space
insert_final_newline = true
trim_trailing_whitespace = true
"#;

/// The bundles that ship with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinBundles;

impl BuiltinBundles {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSource for BuiltinBundles {
    fn bundle(&self, project_type: ProjectType) -> CleanstartResult<ConfigBundle> {
        let eslintrc = match project_type {
            ProjectType::Node => ESLINTRC_NODE,
            ProjectType::React => ESLINTRC_REACT,
        };

        let file = |path: &str, contents: &str| -> Result<ConfigFile, CleanstartError> {
            ConfigFile::new(path, contents).map_err(Into::into)
        };

        Ok(ConfigBundle::new(project_type)
            .with_file(file(".eslintrc.json", eslintrc)?)
            .with_file(file(".eslintignore", ESLINTIGNORE)?)
            .with_file(file(".prettierrc", PRETTIERRC)?)
            .with_file(file(".prettierignore", PRETTIERIGNORE)?)
            .with_file(file(".editorconfig", EDITORCONFIG)?))
    }
}
