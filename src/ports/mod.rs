/// Ports module defining interfaces for hexagonal architecture
///
/// The identity core only needs driven (outbound) ports: text formats,
/// tag storage, output and progress reporting.
pub mod outbound;
