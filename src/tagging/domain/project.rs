/// One scannable artifact belonging to a target, e.g. a manifest file in
/// a repository or a layer of a container image.
///
/// Read-only to this tool except for tag application. `origin` and
/// `target_reference` are optional on the wire; both are required on the
/// first SCM project when a component tag is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Provider identifier, e.g. `github-enterprise` or `ecr`
    pub origin: Option<String>,
    /// Branch or tag the project was scanned from
    pub target_reference: Option<String>,
}

impl Project {
    pub fn new(
        id: String,
        name: String,
        origin: Option<String>,
        target_reference: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            origin,
            target_reference,
        }
    }
}
