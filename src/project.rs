//! Project type classification from build manifests.
//!
//! The rule engine treats the project type as an opaque strictness knob;
//! only this module knows how to derive it from a `.csproj` file.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// External classification that tunes documentation strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    Unknown,
    ClassLibrary,
    WebApi,
    ConsoleApp,
    RazorApp,
}

impl ProjectType {
    /// Whether the documentation rule runs at all for this project type.
    pub fn enforces_docs(&self) -> bool {
        matches!(
            self,
            ProjectType::ClassLibrary | ProjectType::WebApi | ProjectType::ConsoleApp
        )
    }

    /// Library surfaces additionally require `<example>` tags on types and
    /// methods.
    pub fn requires_examples(&self) -> bool {
        matches!(self, ProjectType::ClassLibrary | ProjectType::WebApi)
    }

    /// Console apps extend documentation coverage to internal declarations.
    pub fn checks_internal(&self) -> bool {
        matches!(self, ProjectType::ConsoleApp)
    }

    /// Detect the project type from the first `.csproj` found under `dir`.
    pub fn detect(dir: &Path) -> ProjectType {
        for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
            if entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|e| e == "csproj")
                    .unwrap_or(false)
            {
                return match std::fs::read_to_string(entry.path()) {
                    Ok(manifest) => Self::classify(&manifest),
                    Err(_) => ProjectType::Unknown,
                };
            }
        }
        ProjectType::Unknown
    }

    /// Classify a project manifest by its SDK and output type markers.
    pub fn classify(manifest: &str) -> ProjectType {
        if manifest.contains("Microsoft.NET.Sdk.Web") {
            ProjectType::WebApi
        } else if manifest.contains("Microsoft.NET.Sdk.Razor") {
            ProjectType::RazorApp
        } else if manifest.contains("<OutputType>Exe</OutputType>") {
            ProjectType::ConsoleApp
        } else if manifest.contains("<OutputType>Library</OutputType>") {
            ProjectType::ClassLibrary
        } else {
            ProjectType::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Unknown => "unknown",
            ProjectType::ClassLibrary => "library",
            ProjectType::WebApi => "webapi",
            ProjectType::ConsoleApp => "console",
            ProjectType::RazorApp => "razor",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(ProjectType::Unknown),
            "library" | "classlibrary" | "class-library" => Ok(ProjectType::ClassLibrary),
            "webapi" | "web" => Ok(ProjectType::WebApi),
            "console" | "consoleapp" => Ok(ProjectType::ConsoleApp),
            "razor" | "razorapp" => Ok(ProjectType::RazorApp),
            _ => Err(format!("unknown project type: {}", s)),
        }
    }
}
