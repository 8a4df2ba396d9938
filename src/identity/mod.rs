/// Software identity domain layer
///
/// Contains the identity record model and the version ordering services.
/// Nothing in here performs I/O.
pub mod domain;
pub mod services;
