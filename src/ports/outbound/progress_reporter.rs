/// ProgressReporter port for user-facing status messages
///
/// Long-running steps (loading many tag files) report through this port so
/// the application layer never writes to the console directly.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress as `current` out of `total`, with an optional message
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
