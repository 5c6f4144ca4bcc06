use crate::check_result::{CheckResult, EventSeverity, OutcomeKind};
use crate::errors::DomainError;
use serde::Serialize;

pub const TIME_DATAPOINT: &str = "time";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceValue {
    pub name: &'static str,
    pub value: f64,
}

/// Event record handed to the monitoring host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckEvent {
    pub event_key: String,
    pub summary: String,
    pub message: String,
    pub device: String,
    pub event_class: String,
    pub severity: EventSeverity,
}

/// What the scheduled plugin hands back per collection cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginOutput {
    pub values: Vec<PerformanceValue>,
    pub events: Vec<CheckEvent>,
}

impl PluginOutput {
    /// Address mismatches surface as an error rather than an event, so the
    /// host treats the collection itself as failed.
    pub fn from_result(result: &CheckResult, device: &str) -> Result<Self, DomainError> {
        if result.kind == OutcomeKind::AddressMismatch {
            return Err(DomainError::ExpectationMismatch {
                expected: result
                    .expected_address
                    .as_deref()
                    .unwrap_or_default()
                    .to_string(),
                received: result
                    .resolved_address
                    .map(|ip| ip.to_string())
                    .unwrap_or_default(),
            });
        }

        let values = result
            .performance_value()
            .map(|value| PerformanceValue {
                name: TIME_DATAPOINT,
                value,
            })
            .into_iter()
            .collect();

        let event = CheckEvent {
            event_key: result.event_key.to_string(),
            summary: result.message.clone(),
            message: result.message.clone(),
            device: device.to_string(),
            event_class: result.event_class.to_string(),
            severity: result.severity.event_severity(),
        };

        Ok(Self {
            values,
            events: vec![event],
        })
    }

    pub fn time(&self) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.name == TIME_DATAPOINT)
            .map(|v| v.value)
    }
}
