//! Writes merged records to their destination.

mod dry_run;
mod writer;

pub use dry_run::write_dry_run_output;
pub use writer::write_output;
