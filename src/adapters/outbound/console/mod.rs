/// Console adapters for operator-facing reporting
mod reporter;

pub use reporter::ConsoleReporter;
