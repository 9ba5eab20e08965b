// Outbound adapters: concrete implementations of the domain ports.

pub mod rest;

pub use rest::RestExamSource;
