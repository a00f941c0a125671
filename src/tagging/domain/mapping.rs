/// One row of the operator-supplied mapping file, correlating an SCM
/// target with the container target built from it. Projects under both
/// targets receive the same component tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRecord {
    pub scm_org_id: String,
    pub scm_target_name: String,
    pub scm_target_id: String,
    pub container_org_id: String,
    pub container_target_name: String,
    pub container_target_id: String,
}

impl MappingRecord {
    /// Parses one comma-separated line. Returns `None` unless the line
    /// has exactly six columns; callers skip such rows.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return None;
        }

        Some(Self {
            scm_org_id: fields[0].to_string(),
            scm_target_name: fields[1].to_string(),
            scm_target_id: fields[2].to_string(),
            container_org_id: fields[3].to_string(),
            container_target_name: fields[4].to_string(),
            container_target_id: fields[5].to_string(),
        })
    }
}
