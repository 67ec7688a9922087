//! Core types for project scaffolding

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Template category selecting which directories and files are scaffolded
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ProjectType {
    #[default]
    Python,
    FastApi,
    LlmFinetune,
    Compiler,
    Os,
    /// Unrecognized type name, scaffolded with the common files only
    Other(String),
}

impl ProjectType {
    /// Canonical names of the supported project types
    pub const SUPPORTED: [&'static str; 5] = ["python", "fastapi", "llm-finetune", "compiler", "os"];

    /// Parse a type name. Matching is exact; anything unknown becomes `Other`.
    pub fn parse(input: &str) -> Self {
        match input {
            "python" => Self::Python,
            "fastapi" => Self::FastApi,
            "llm-finetune" => Self::LlmFinetune,
            "compiler" => Self::Compiler,
            "os" => Self::Os,
            other => Self::Other(other.to_string()),
        }
    }

    /// Name as given on the command line
    pub fn as_str(&self) -> &str {
        match self {
            Self::Python => "python",
            Self::FastApi => "fastapi",
            Self::LlmFinetune => "llm-finetune",
            Self::Compiler => "compiler",
            Self::Os => "os",
            Self::Other(name) => name,
        }
    }

    /// Whether a type-specific template set exists
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for ProjectType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the version-control step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsStatus {
    /// Repository initialized
    Initialized,
    /// Disabled by configuration
    Skipped,
    /// Init failed; scaffolding still succeeded
    Failed(String),
}

impl VcsStatus {
    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_types() {
        for name in ProjectType::SUPPORTED {
            let parsed = ProjectType::parse(name);
            assert!(parsed.is_supported(), "{} should be supported", name);
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn test_parse_unknown_type() {
        let parsed: ProjectType = "react".parse().unwrap();
        assert_eq!(parsed, ProjectType::Other("react".to_string()));
        assert!(!parsed.is_supported());
        assert_eq!(parsed.to_string(), "react");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            ProjectType::parse("Python"),
            ProjectType::Other("Python".to_string())
        );
    }

    #[test]
    fn test_default_is_python() {
        assert_eq!(ProjectType::default(), ProjectType::Python);
    }
}
