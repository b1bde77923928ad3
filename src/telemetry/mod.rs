/// Telemetry domain - snapshot entity and its validation rules
pub mod domain;
