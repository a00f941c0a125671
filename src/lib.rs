//! snyk-component-tagger - correlate Snyk scan targets through component tags
//!
//! Findings for the same logical component often arrive from two scan
//! sources: the SCM repository the component is built from, and the
//! container registry its image is pushed to. This crate attaches a
//! shared `component` tag (`pkg:{origin}/{name}@{branch}`) to every
//! project under both targets so the findings can be correlated.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`tagging`): targets, projects, mapping records,
//!   and component-tag derivation
//! - **Application Layer** (`application`): the three use cases and
//!   their DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): Snyk API client with cursor pagination
//!   and rate-limit retry, CSV file I/O, console reporting
//! - **Shared** (`shared`): common error and result types
//!
//! # Example
//!
//! ```no_run
//! use snyk_component_tagger::prelude::*;
//! use snyk_component_tagger::config::ApiSettings;
//!
//! # fn main() -> Result<()> {
//! let client = SnykClient::new("token".to_string(), ApiSettings::default())?;
//! let reporter = ConsoleReporter::new(false);
//! let use_case = ApplyTagsUseCase::new(client, reporter);
//!
//! let records = vec![
//!     MappingRecord::parse_line("org1,svc-a,t1,org2,svc-a-image,t2").unwrap(),
//! ];
//! let summary = use_case.execute(ApplyTagsRequest::new(records, true))?;
//! println!("{} records processed", summary.records_processed);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod tagging;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, MappingFile, MappingFileReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{RateLimitPolicy, SnykClient};
    pub use crate::application::dto::{
        ApplyTagsRequest, ApplyTagsSummary, ExportTargetsRequest,
    };
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{
        ApplyTagsUseCase, ClearOutputUseCase, ExportTargetsUseCase, RESERVED_FILE,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProjectRegistry, TagOutcome, TagReporter,
    };
    pub use crate::shared::Result;
    pub use crate::tagging::domain::{
        ComponentTag, MappingRecord, Project, Target, TAG_KEY,
    };
}
