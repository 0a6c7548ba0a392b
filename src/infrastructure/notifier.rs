//! User notification capability

/// Sink for short user-facing status messages.
///
/// Services report outcomes through this interface instead of printing
/// directly; the host supplies the concrete implementation.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier that prints to stdout
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}
