/// A scan target registered in a Snyk organization - a repository,
/// container image, or similar unit that was onboarded for scanning.
///
/// Targets are created by the Snyk service when a repository or image is
/// imported; this tool only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Opaque, stable target identifier
    pub id: String,
    /// Human-readable name, e.g. `my-org/my-repo`
    pub display_name: String,
    /// Provider kind the target was imported from, e.g. `ecr` or
    /// `github-enterprise`. Not present on every API response.
    pub source_type: Option<String>,
}

impl Target {
    pub fn new(id: String, display_name: String, source_type: Option<String>) -> Self {
        Self {
            id,
            display_name,
            source_type,
        }
    }
}
