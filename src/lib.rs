// Mockingbird - multi-perspective debate solver
// Library exports

// Core modules
pub mod agent;
pub mod cli;
pub mod config;
pub mod generators;
pub mod memory;
pub mod metrics;
pub mod ollama;
pub mod tools;
