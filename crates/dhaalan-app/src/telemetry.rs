#![forbid(unsafe_code)]

//! Fire-and-forget error reporting.

use tracing::error;

/// Sink for caught failures. Reporting never fails and callers never
/// branch on it; the page keeps rendering its own fallback regardless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Telemetry;

impl Telemetry {
    pub fn report(&self, err: &dyn std::fmt::Display, context: &[(&str, &str)]) {
        let context = context
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ");
        error!(%err, context, "caught failure");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_infallible() {
        // No result to inspect; the call simply must not panic.
        Telemetry.report(&"boom", &[("page", "exhibitors"), ("attempt", "1")]);
        Telemetry.report(&"boom", &[]);
    }
}
