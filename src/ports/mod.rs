/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - the service
/// surface the boundary adapter calls) and outbound ports (driven ports -
/// persistence interfaces).
pub mod inbound;
pub mod outbound;
