//! dtogen CLI library
//!
//! Generates NestJS DTO classes (create, update, response, filter) from the
//! `@Prop` declarations of a Mongoose schema.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;

pub use commands::{GenerateCommand, GenerationReport, OutputMode};
pub use config::DtoGenConfig;
pub use error::DtoGenError;
pub use scaffold::{DtoGenerator, FieldDefinition, FieldType, GeneratedFile, TemplateRegistry};
