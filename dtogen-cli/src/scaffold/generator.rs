//! DTO generator orchestrator
//!
//! Turns the properties extracted from a schema into the four companion DTO
//! files of a NestJS module:
//! - `create-<module>.dto.ts`
//! - `update-<module>.dto.ts`
//! - `response.dto.ts`
//! - `filter-<module>.dto.ts`

use super::field_type::FieldDefinition;
use super::helpers::TemplateHelpers;
use super::templates::{TemplateRegistry, CREATE_DTO, FILTER_DTO, RESPONSE_DTO, UPDATE_DTO};
use crate::config::PaginationSettings;
use crate::error::Result;
use std::path::PathBuf;

/// Import line shared by the create and filter DTOs
pub const VALIDATOR_IMPORT: &str = "import { IsString, IsNumber, IsBoolean, IsOptional, IsArray, IsDateString, IsMongoId } from 'class-validator';";

/// DTO generator for a single module
pub struct DtoGenerator {
    /// Module name as given on the command line (e.g., "project")
    module: String,
    /// Class name prefix (e.g., "Project")
    class_name: String,
    /// Extracted fields, in source order
    fields: Vec<FieldDefinition>,
    /// Template registry
    templates: TemplateRegistry,
    /// Pagination examples for the filter DTO
    pagination: PaginationSettings,
}

impl DtoGenerator {
    /// Create a new generator
    ///
    /// An empty field list is allowed; the DTOs are then generated without
    /// field entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the module name is not usable in file and class names.
    pub fn new(
        module: &str,
        fields: Vec<FieldDefinition>,
        templates: TemplateRegistry,
        pagination: PaginationSettings,
    ) -> Result<Self> {
        TemplateHelpers::validate_module_name(module)?;

        Ok(Self {
            module: module.to_string(),
            class_name: TemplateHelpers::to_class_name(module),
            fields,
            templates,
            pagination,
        })
    }

    /// Fields the DTOs are generated from
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Generate all DTO files
    ///
    /// Paths are relative to the module's DTO directory.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails for any file
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        let metadata = self.metadata();

        Ok(vec![
            self.generate_create(&metadata)?,
            self.generate_update(&metadata)?,
            self.generate_response(&metadata)?,
            self.generate_filter(&metadata)?,
        ])
    }

    /// Template variables for every DTO
    fn metadata(&self) -> serde_json::Value {
        let module = &self.module;
        let class_name = &self.class_name;

        let fields: Vec<serde_json::Value> = self
            .fields
            .iter()
            .map(|f| {
                serde_json::json!({
                    "name": f.name,
                    "ts_type": f.ts_type(),
                    "swagger_type": f.swagger_type(),
                    "validators": f.validators(),
                })
            })
            .collect();

        serde_json::json!({
            "module": module,
            "class_name": class_name,
            "create_class": format!("Create{class_name}Dto"),
            "update_class": format!("Update{class_name}Dto"),
            "response_class": format!("{class_name}ResponseDto"),
            "filter_class": format!("Filter{class_name}Dto"),
            "create_import": format!("./create-{module}.dto"),
            "validator_import": VALIDATOR_IMPORT,
            "fields": fields,
            "pagination": {
                "page_example": self.pagination.page_example,
                "limit_example": self.pagination.limit_example,
            },
        })
    }

    fn generate_create(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        let module = &self.module;
        let class_name = &self.class_name;
        Ok(GeneratedFile {
            path: PathBuf::from(format!("create-{module}.dto.ts")),
            content: self.templates.render(CREATE_DTO, metadata)?,
            description: format!("Create DTO for {class_name}"),
        })
    }

    fn generate_update(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        let module = &self.module;
        let class_name = &self.class_name;
        Ok(GeneratedFile {
            path: PathBuf::from(format!("update-{module}.dto.ts")),
            content: self.templates.render(UPDATE_DTO, metadata)?,
            description: format!("Update DTO for {class_name}"),
        })
    }

    fn generate_response(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        let class_name = &self.class_name;
        Ok(GeneratedFile {
            path: PathBuf::from("response.dto.ts"),
            content: self.templates.render(RESPONSE_DTO, metadata)?,
            description: format!("Response DTO for {class_name}"),
        })
    }

    fn generate_filter(&self, metadata: &serde_json::Value) -> Result<GeneratedFile> {
        let module = &self.module;
        let class_name = &self.class_name;
        Ok(GeneratedFile {
            path: PathBuf::from(format!("filter-{module}.dto.ts")),
            content: self.templates.render(FILTER_DTO, metadata)?,
            description: format!("Filter DTO for {class_name}"),
        })
    }
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the DTO directory
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::extractor::extract_fields;

    const SCHEMA: &str = "@Schema()
export class Project {
  @Prop({ required: true })
  name: string;

  @Prop({ default: 0 })
  budget: number;

  @Prop()
  archived: boolean;

  @Prop()
  dueDate: Date;

  @Prop({ type: Types.ObjectId, ref: 'User' })
  owner: Types.ObjectId;

  @Prop({ type: [Types.ObjectId], ref: 'User' })
  members: Types.ObjectId[];

  @Prop([String])
  tags: string[];
}
";

    fn generator(module: &str, source: &str) -> DtoGenerator {
        DtoGenerator::new(
            module,
            extract_fields(source),
            TemplateRegistry::new().unwrap(),
            PaginationSettings::default(),
        )
        .unwrap()
    }

    fn file<'a>(files: &'a [GeneratedFile], name: &str) -> &'a GeneratedFile {
        files
            .iter()
            .find(|f| f.path == PathBuf::from(name))
            .unwrap_or_else(|| panic!("missing {name}"))
    }

    #[test]
    fn test_new_generator() {
        let generator = generator("project", SCHEMA);
        assert_eq!(generator.module, "project");
        assert_eq!(generator.class_name, "Project");
        assert_eq!(generator.fields().len(), 7);
    }

    #[test]
    fn test_invalid_module_name() {
        let result = DtoGenerator::new(
            "../project",
            Vec::new(),
            TemplateRegistry::new().unwrap(),
            PaginationSettings::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_metadata() {
        let generator = generator("user-profile", SCHEMA);
        let metadata = generator.metadata();
        assert_eq!(metadata["class_name"], "UserProfile");
        assert_eq!(metadata["create_class"], "CreateUserProfileDto");
        assert_eq!(metadata["response_class"], "UserProfileResponseDto");
        assert_eq!(metadata["create_import"], "./create-user-profile.dto");
        assert_eq!(metadata["fields"][1]["ts_type"], "number");
        assert_eq!(metadata["fields"][1]["validators"][0], "@IsNumber()");
    }

    #[test]
    fn test_file_names() {
        let files = generator("project", SCHEMA).generate().unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "create-project.dto.ts",
                "update-project.dto.ts",
                "response.dto.ts",
                "filter-project.dto.ts",
            ]
        );
    }

    #[test]
    fn test_generate_create() {
        let files = generator("project", SCHEMA).generate().unwrap();
        let create = &file(&files, "create-project.dto.ts").content;

        assert!(create.starts_with("import { ApiProperty } from '@nestjs/swagger';\n"));
        assert!(create.contains(VALIDATOR_IMPORT));
        assert!(create.contains("export class CreateProjectDto {"));
        assert_eq!(create.matches("@ApiProperty(").count(), 7);
        assert!(create.contains("  @ApiProperty({ type: Number })\n  @IsNumber()\n  budget: number;\n"));
        assert!(create.contains("  @ApiProperty({ type: String })\n  @IsDateString()\n  dueDate: Date;\n"));
        assert!(create.contains("  @ApiProperty({ type: String })\n  @IsMongoId()\n  owner: string;\n"));
        assert!(create.contains(
            "  @ApiProperty({ type: [String] })\n  @IsArray()\n  @IsMongoId({ each: true })\n  members: string[];\n"
        ));
        assert!(create.contains(
            "  @ApiProperty({ type: [String] })\n  @IsArray()\n  @IsString({ each: true })\n  tags: string[];\n"
        ));
    }

    #[test]
    fn test_generate_update() {
        let files = generator("project", SCHEMA).generate().unwrap();
        let update = &file(&files, "update-project.dto.ts").content;

        assert!(update.contains("import { PartialType } from '@nestjs/swagger';"));
        assert!(update.contains("import { CreateProjectDto } from './create-project.dto';"));
        assert!(update.contains(
            "export class UpdateProjectDto extends PartialType(CreateProjectDto) {}"
        ));
    }

    #[test]
    fn test_generate_response() {
        let files = generator("project", SCHEMA).generate().unwrap();
        let response = &file(&files, "response.dto.ts").content;

        assert!(response.contains("export class ProjectResponseDto {"));
        assert_eq!(response.matches("@ApiProperty(").count(), 7);
        assert!(!response.contains("class-validator"));
        assert!(!response.contains("@Is"));
        assert!(response.contains("  @ApiProperty({ type: Boolean })\n  archived: boolean;\n"));
    }

    #[test]
    fn test_generate_filter() {
        let files = generator("project", SCHEMA).generate().unwrap();
        let filter = &file(&files, "filter-project.dto.ts").content;

        assert!(filter.contains("export class FilterProjectDto {"));
        assert_eq!(filter.matches("@ApiPropertyOptional(").count(), 9);
        assert_eq!(filter.matches("@IsOptional()").count(), 9);
        assert!(filter.contains(
            "  @ApiPropertyOptional({ type: String })\n  @IsOptional()\n  @IsString()\n  name?: string;\n"
        ));
        assert!(filter.contains("  @ApiPropertyOptional({ example: 1 })\n  @IsOptional()\n  @IsNumber()\n  page?: number;\n"));
        assert!(filter.contains("  @ApiPropertyOptional({ example: 10 })\n  @IsOptional()\n  @IsNumber()\n  limit?: number;\n"));
    }

    #[test]
    fn test_filter_pagination_examples() {
        let generator = DtoGenerator::new(
            "project",
            extract_fields(SCHEMA),
            TemplateRegistry::new().unwrap(),
            PaginationSettings {
                page_example: 0,
                limit_example: 50,
            },
        )
        .unwrap();

        let files = generator.generate().unwrap();
        let filter = &file(&files, "filter-project.dto.ts").content;
        assert!(filter.contains("@ApiPropertyOptional({ example: 0 })"));
        assert!(filter.contains("@ApiPropertyOptional({ example: 50 })"));
    }

    #[test]
    fn test_generate_without_fields() {
        let files = generator("project", "export class Project {}\n").generate().unwrap();
        assert_eq!(files.len(), 4);

        let create = &file(&files, "create-project.dto.ts").content;
        assert_eq!(
            *create,
            format!(
                "import {{ ApiProperty }} from '@nestjs/swagger';\n{VALIDATOR_IMPORT}\n\nexport class CreateProjectDto {{\n\n}}\n"
            )
        );

        let response = &file(&files, "response.dto.ts").content;
        assert_eq!(
            response,
            "import { ApiProperty } from '@nestjs/swagger';\n\nexport class ProjectResponseDto {\n\n}\n"
        );

        let filter = &file(&files, "filter-project.dto.ts").content;
        assert_eq!(filter.matches("@ApiPropertyOptional(").count(), 2);
        assert!(filter.contains(
            "export class FilterProjectDto {\n\n\n  @ApiPropertyOptional({ example: 1 })\n"
        ));
        assert!(filter.ends_with("  limit?: number;\n}\n"));
    }

    #[test]
    fn test_blank_lines_between_entries() {
        let files = generator("project", "@Prop()\n  name: string;\n\n@Prop()\n  budget: number;\n")
            .generate()
            .unwrap();

        let response = &file(&files, "response.dto.ts").content;
        assert_eq!(
            response,
            "import { ApiProperty } from '@nestjs/swagger';\n\nexport class ProjectResponseDto {\n  @ApiProperty({ type: String })\n  name: string;\n\n  @ApiProperty({ type: Number })\n  budget: number;\n\n}\n"
        );

        // Two blank lines separate the last field from the pagination block
        let filter = &file(&files, "filter-project.dto.ts").content;
        assert!(filter.contains(
            "  budget?: number;\n\n\n  @ApiPropertyOptional({ example: 1 })\n"
        ));
        assert!(filter.contains("  page?: number;\n\n  @ApiPropertyOptional({ example: 10 })\n"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generator("project", SCHEMA).generate().unwrap();
        let second = generator("project", SCHEMA).generate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fields_follow_source_order() {
        let files = generator("project", SCHEMA).generate().unwrap();
        let create = &file(&files, "create-project.dto.ts").content;

        let positions: Vec<usize> = ["name:", "budget:", "archived:", "dueDate:", "owner:", "members:", "tags:"]
            .iter()
            .map(|needle| create.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
