/// Filesystem adapters for CSV output and mapping-file input
mod csv_writer;
mod mapping_reader;

pub use csv_writer::{FileSystemWriter, StdoutPresenter};
pub use mapping_reader::{MappingFile, MappingFileReader};
