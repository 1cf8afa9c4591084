//! Host tool detection for Rails, Bundler, git and docker

use anyhow::Result;
use semver::Version;
use std::fmt;
use std::process::Command;

/// Oldest Rails major version the generated scaffolding works with.
pub const MIN_RAILS_MAJOR: u64 = 4;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl fmt::Display for ToolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} ({})", self.name, version),
            None => write!(f, "{} (not installed)", self.name),
        }
    }
}

fn probe(name: &'static str, binary: &str) -> ToolInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Rails is available
pub fn check_rails() -> ToolInfo {
    probe("Rails", "rails")
}

/// Check if Bundler is available
pub fn check_bundler() -> ToolInfo {
    probe("Bundler", "bundle")
}

/// Check if git is available
pub fn check_git() -> ToolInfo {
    probe("git", "git")
}

/// Check if docker is available
pub fn check_docker() -> ToolInfo {
    probe("docker", "docker")
}

/// Parse a `rails --version` line ("Rails 4.2.11.3") into a semver version.
///
/// Rails versions can carry a fourth component; anything past the third is
/// ignored, and a missing or unparseable component reads as zero.
pub fn parse_rails_version(line: &str) -> Option<Version> {
    let numeric = line.trim().strip_prefix("Rails ").unwrap_or(line.trim());
    let mut parts = numeric.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let patch = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    Some(Version::new(major, minor, patch))
}

/// Verify the host can run a scaffold: Rails (of a supported major),
/// Bundler, and git all present. Returns what was detected, or an error
/// listing everything missing.
pub fn check_host() -> Result<Vec<ToolInfo>> {
    let tools = vec![check_rails(), check_bundler(), check_git()];
    let mut missing = Vec::new();

    for tool in &tools {
        if !tool.available {
            missing.push(match tool.name {
                "Rails" => "Rails (gem install rails)",
                "Bundler" => "Bundler (gem install bundler)",
                _ => "git (https://git-scm.com)",
            });
        }
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    if let Some(version) = tools[0].version.as_deref().and_then(parse_rails_version) {
        if version.major < MIN_RAILS_MAJOR {
            anyhow::bail!(
                "jamjar was built for Rails {MIN_RAILS_MAJOR} and up, please update your \
                 Rails version (found {version})"
            );
        }
    }

    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_rails_version() {
        let version = parse_rails_version("Rails 4.2.0").unwrap();
        assert_eq!((version.major, version.minor, version.patch), (4, 2, 0));
    }

    #[test]
    fn ignores_fourth_version_component() {
        let version = parse_rails_version("Rails 4.2.11.3").unwrap();
        assert_eq!((version.major, version.minor, version.patch), (4, 2, 11));
    }

    #[test]
    fn tolerates_missing_components_and_prereleases() {
        let version = parse_rails_version("Rails 7").unwrap();
        assert_eq!(version.major, 7);

        let version = parse_rails_version("Rails 7.1.0.beta1").unwrap();
        assert_eq!((version.major, version.minor, version.patch), (7, 1, 0));
    }

    #[test]
    fn rejects_non_version_output() {
        assert!(parse_rails_version("command not found").is_none());
        assert!(parse_rails_version("").is_none());
    }

    #[test]
    fn tool_info_display() {
        let present = ToolInfo {
            name: "Rails",
            version: Some("Rails 4.2.0".to_string()),
            available: true,
        };
        assert_eq!(present.to_string(), "Rails (Rails 4.2.0)");

        let absent = ToolInfo {
            name: "docker",
            version: None,
            available: false,
        };
        assert_eq!(absent.to_string(), "docker (not installed)");
    }
}
