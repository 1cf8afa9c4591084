//! Operator answers collected before anything is written

/// Domain used for the nginx proxy container when the operator gives none.
pub const DEFAULT_DOMAIN: &str = "example.com";

/// Image tag used for the web container when the operator gives none.
pub const DEFAULT_DOCKER_TAG: &str = "addjam/web";

/// Everything the scaffolder needs to know, collected once up front.
///
/// The record is write-once: all later phases (plan resolution, execution,
/// the summary report) read it but never mutate it. `docker_domain` and
/// `docker_tag` are `Some` exactly when `use_docker` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Development database name; the test database is `<name>_test`.
    pub database_name: String,

    /// Swap the asset pipeline entry point for an Ember app shell.
    pub use_ember: bool,

    /// Generate Devise user authentication.
    pub use_auth: bool,

    /// Emit a Dockerfile plus the multi-container orchestration file.
    pub use_docker: bool,

    /// Domain the nginx proxy container answers for.
    pub docker_domain: Option<String>,

    /// Tag for the built web image.
    pub docker_tag: Option<String>,
}

impl Answers {
    /// Build an answer set, applying the documented fallbacks.
    ///
    /// Empty docker domain/tag inputs fall back to [`DEFAULT_DOMAIN`] and
    /// [`DEFAULT_DOCKER_TAG`]; the tag is lowercased (docker rejects
    /// uppercase repository names). When `use_docker` is false both fields
    /// are dropped regardless of what was passed in.
    pub fn new(
        database_name: impl Into<String>,
        use_ember: bool,
        use_auth: bool,
        use_docker: bool,
        docker_domain: Option<String>,
        docker_tag: Option<String>,
    ) -> Self {
        let (docker_domain, docker_tag) = if use_docker {
            (
                Some(non_empty_or(docker_domain, DEFAULT_DOMAIN)),
                Some(non_empty_or(docker_tag, DEFAULT_DOCKER_TAG).to_lowercase()),
            )
        } else {
            (None, None)
        };

        Self {
            database_name: database_name.into(),
            use_ember,
            use_auth,
            use_docker,
            docker_domain,
            docker_tag,
        }
    }

    /// Name of the database used by the test environment.
    pub fn test_database_name(&self) -> String {
        format!("{}_test", self.database_name)
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
