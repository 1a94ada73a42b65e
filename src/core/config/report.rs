use bevy::prelude::*;

/// Outcome of loading the layered config, logged once the log subscriber exists.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

pub fn log_config_report(report: Option<Res<ConfigReport>>) {
    let Some(report) = report else {
        return;
    };
    if report.used.is_empty() {
        info!(target: "config", "no config layers found; using built-in defaults");
    } else {
        info!(target: "config", "config layers: {}", report.used.join(" -> "));
    }
    if report.is_clean() {
        return;
    }
    warn!(
        target: "config",
        "{} config error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );
    for e in &report.errors {
        warn!(target: "config", "config error: {e}");
    }
    for w in &report.warnings {
        warn!(target: "config", "config warning: {w}");
    }
}
