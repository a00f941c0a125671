use crate::application::dto::ExportTargetsRequest;
use crate::ports::outbound::{OutputPresenter, ProjectRegistry};
use crate::shared::Result;

/// ExportTargetsUseCase - lists every target in an organization to a
/// flat CSV table
///
/// One row per target: organization id, display name, target id. The
/// listing walks every page of the targets endpoint before anything is
/// written, so a failed walk produces no output file.
///
/// # Type Parameters
/// * `R` - ProjectRegistry implementation
/// * `P` - OutputPresenter implementation
pub struct ExportTargetsUseCase<R: ProjectRegistry, P: OutputPresenter> {
    registry: R,
    presenter: P,
}

impl<R: ProjectRegistry, P: OutputPresenter> ExportTargetsUseCase<R, P> {
    pub fn new(registry: R, presenter: P) -> Self {
        Self {
            registry,
            presenter,
        }
    }

    /// Executes the export, returning the number of targets written.
    pub fn execute(&self, request: ExportTargetsRequest) -> Result<usize> {
        let targets = self
            .registry
            .list_targets(&request.org_id, request.source_types.as_deref())?;

        let mut output = String::new();
        for target in &targets {
            write_csv_row(
                &mut output,
                &[&request.org_id, &target.display_name, &target.id],
            );
        }

        self.presenter.present(&output)?;
        Ok(targets.len())
    }
}

/// Appends one CSV row with minimal RFC 4180 quoting: fields containing
/// a comma, quote, or line break are quoted, with quotes doubled.
fn write_csv_row(buf: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            buf.push(',');
        }
        if field.contains([',', '"', '\n', '\r']) {
            buf.push('"');
            buf.push_str(&field.replace('"', "\"\""));
            buf.push('"');
        } else {
            buf.push_str(field);
        }
    }
    buf.push('\n');
}
