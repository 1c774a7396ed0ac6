use std::process::ExitCode;

/// Process exit status of a trex run.
///
/// `diff` uses `Failure` to signal pending changes, so scripts can gate on it
/// the same way they gate on a failing check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Command completed, nothing pending.
    Success = 0,
    /// Command completed but reports pending work (changes since the last
    /// export, or a config file that already exists).
    Failure = 1,
    /// Fatal error: malformed source or snapshot, invalid config, I/O failure.
    Error = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
