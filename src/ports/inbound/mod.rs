/// Inbound ports (Driving ports) - Use case interfaces
pub mod telemetry_port;

pub use telemetry_port::TelemetryPort;
