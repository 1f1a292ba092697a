//! DTO scaffold generator implementation
//!
//! This module turns a Mongoose schema into NestJS DTO classes. It extracts
//! `@Prop` declarations, classifies their types, and renders the create,
//! update, response and filter DTOs.

pub mod extractor;
pub mod field_type;
pub mod generator;
pub mod helpers;
pub mod templates;

pub use extractor::extract_fields;
pub use field_type::{FieldDefinition, FieldType};
pub use generator::{DtoGenerator, GeneratedFile, VALIDATOR_IMPORT};
pub use helpers::TemplateHelpers;
pub use templates::TemplateRegistry;
