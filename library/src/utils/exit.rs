//! Process exit statuses.

/// The input file could not be opened or read.
pub const EXIT_INPUT: i32 = 1;
/// The input contained no usable data.
pub const EXIT_NO_DATA: i32 = 2;
/// The report could not be written.
pub const EXIT_OUTPUT: i32 = 3;
/// The command line could not be parsed.
pub const EXIT_USAGE: i32 = 64;

/// Maps an error to the status the process should exit with.
pub trait ExitStatus {
    fn exit_code(&self) -> i32;
}
