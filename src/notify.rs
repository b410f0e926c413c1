//! Fire-and-forget user notifications emitted by the grid controller.

/// Visual severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// Maps a severity to the alert class used by the dashboard styling.
pub fn severity_css_class(severity: &Severity) -> &'static str {
    match severity {
        Severity::Success => "success",
        Severity::Error => "danger",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

/// External notification collaborator. The controller calls this once per
/// committed fetch and never looks at the outcome.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Default notifier forwarding messages to the `log` facade.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Success | Severity::Info => log::info!("{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_css_class_mappings() {
        assert_eq!(severity_css_class(&Severity::Error), "danger");
        assert_eq!(severity_css_class(&Severity::Warning), "warning");
        assert_eq!(severity_css_class(&Severity::Success), "success");
        assert_eq!(severity_css_class(&Severity::Info), "info");
    }
}
