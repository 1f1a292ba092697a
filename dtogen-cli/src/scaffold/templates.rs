//! Handlebars templates for the generated DTOs
//!
//! Each template is embedded in the binary. A project can replace any of them
//! by dropping a file named `<template>.hbs` (for example
//! `create.dto.ts.hbs`) into the configured override directory.
//!
//! All templates are rendered against the same metadata:
//!
//! - `module`, `class_name`
//! - `create_class`, `update_class`, `response_class`, `filter_class`
//! - `create_import` (relative import path of the create DTO)
//! - `validator_import` (the `class-validator` import line)
//! - `fields[]` with `name`, `ts_type`, `swagger_type`, `validators[]`
//! - `pagination.page_example`, `pagination.limit_example`

use crate::error::{DtoGenError, Result};
use handlebars::Handlebars;
use std::fs;
use std::path::Path;

/// Create DTO template name
pub const CREATE_DTO: &str = "create.dto.ts";
/// Update DTO template name
pub const UPDATE_DTO: &str = "update.dto.ts";
/// Response DTO template name
pub const RESPONSE_DTO: &str = "response.dto.ts";
/// Filter DTO template name
pub const FILTER_DTO: &str = "filter.dto.ts";

/// Every template, in generation order
pub const TEMPLATE_NAMES: &[&str] = &[CREATE_DTO, UPDATE_DTO, RESPONSE_DTO, FILTER_DTO];

/// Extension of override files
const OVERRIDE_EXTENSION: &str = "hbs";

/// Create DTO: every field required, with validators
pub const CREATE_DTO_TEMPLATE: &str = r"import { ApiProperty } from '@nestjs/swagger';
{{validator_import}}

export class {{create_class}} {
{{#each fields}}
  @ApiProperty({ type: {{this.swagger_type}} })
{{#each this.validators}}
  {{this}}
{{/each}}
  {{this.name}}: {{this.ts_type}};

{{else}}

{{/each}}
}
";

/// Update DTO: every create field, made optional
pub const UPDATE_DTO_TEMPLATE: &str = r"import { PartialType } from '@nestjs/swagger';
import { {{create_class}} } from '{{create_import}}';

export class {{update_class}} extends PartialType({{create_class}}) {}
";

/// Response DTO: documented fields without validation
pub const RESPONSE_DTO_TEMPLATE: &str = r"import { ApiProperty } from '@nestjs/swagger';

export class {{response_class}} {
{{#each fields}}
  @ApiProperty({ type: {{this.swagger_type}} })
  {{this.name}}: {{this.ts_type}};

{{else}}

{{/each}}
}
";

/// Filter DTO: every field optional, plus pagination
pub const FILTER_DTO_TEMPLATE: &str = r"import { ApiPropertyOptional } from '@nestjs/swagger';
{{validator_import}}

export class {{filter_class}} {
{{#each fields}}
  @ApiPropertyOptional({ type: {{this.swagger_type}} })
  @IsOptional()
{{#each this.validators}}
  {{this}}
{{/each}}
  {{this.name}}?: {{this.ts_type}};

{{else}}

{{/each}}

  @ApiPropertyOptional({ example: {{pagination.page_example}} })
  @IsOptional()
  @IsNumber()
  page?: number;

  @ApiPropertyOptional({ example: {{pagination.limit_example}} })
  @IsOptional()
  @IsNumber()
  limit?: number;
}
";

/// Registry of the DTO templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Create a registry with the embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        handlebars.register_template_string(CREATE_DTO, CREATE_DTO_TEMPLATE)?;
        handlebars.register_template_string(UPDATE_DTO, UPDATE_DTO_TEMPLATE)?;
        handlebars.register_template_string(RESPONSE_DTO, RESPONSE_DTO_TEMPLATE)?;
        handlebars.register_template_string(FILTER_DTO, FILTER_DTO_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    /// Create a registry, replacing embedded templates with any overrides
    /// found in `override_dir`
    ///
    /// # Errors
    ///
    /// Returns an error if `override_dir` is not a directory, or if an
    /// override cannot be read or fails to parse.
    pub fn with_overrides(override_dir: Option<&Path>) -> Result<Self> {
        let mut registry = Self::new()?;

        if let Some(dir) = override_dir {
            if !dir.is_dir() {
                return Err(DtoGenError::MissingTemplateDir(dir.to_path_buf()));
            }

            for &name in TEMPLATE_NAMES {
                let path = dir.join(format!("{name}.{OVERRIDE_EXTENSION}"));
                if !path.is_file() {
                    continue;
                }

                let source = fs::read_to_string(&path).map_err(|e| DtoGenError::io(&path, e))?;
                registry.handlebars.register_template_string(name, source)?;
                tracing::info!(template = name, path = %path.display(), "Using template override");
            }
        }

        Ok(registry)
    }

    /// Render a registered template
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or references metadata
    /// that does not exist.
    pub fn render(&self, name: &str, data: &serde_json::Value) -> Result<String> {
        Ok(self.handlebars.render(name, data)?)
    }
}
