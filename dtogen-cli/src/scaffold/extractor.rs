//! Property extraction from Mongoose schema sources
//!
//! The schema is not parsed. A single pattern picks up every `@Prop(...)`
//! decorator that is directly followed, on the next line, by a
//! `name: Type;` declaration:
//!
//! ```text
//! @Prop({ required: true })
//! title: string;
//!
//! @Prop({ type: [Types.ObjectId], ref: 'User' })
//! members: Types.ObjectId[];
//! ```
//!
//! Decorator arguments containing `)` (for example `default: () => Date.now()`)
//! are not recognized and the property is skipped.

use super::field_type::FieldDefinition;
use once_cell::sync::Lazy;
use regex::Regex;

static PROP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@Prop\([^)]*\)\s*\n\s*(\w+)[?!]?:\s*([^;]+);").expect("Invalid regex")
});

/// Extract property declarations in source order
///
/// Duplicate names are kept. A source without any recognized declaration
/// yields an empty list.
///
/// # Examples
///
/// ```
/// # use dtogen_cli_lib::scaffold::extract_fields;
/// let source = "@Prop()\n  name: string;\n\n@Prop({ default: 0 })\n  budget: number;\n";
/// let fields = extract_fields(source);
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[0].name, "name");
/// assert_eq!(fields[1].raw_type, "number");
/// ```
#[must_use]
pub fn extract_fields(source: &str) -> Vec<FieldDefinition> {
    PROP_PATTERN
        .captures_iter(source)
        .map(|caps| {
            let field = FieldDefinition::new(&caps[1], &caps[2]);
            tracing::trace!(%field, "Extracted property");
            field
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::field_type::FieldType;

    const PROJECT_SCHEMA: &str = r"import { Prop, Schema, SchemaFactory } from '@nestjs/mongoose';
import { Document, Types } from 'mongoose';

export type ProjectDocument = Project & Document;

@Schema({ timestamps: true })
export class Project {
  @Prop({ required: true })
  name: string;

  @Prop()
  description: string;

  @Prop({ default: 0 })
  budget: number;

  @Prop({ default: false })
  archived: boolean;

  @Prop()
  dueDate: Date;

  @Prop({ type: Types.ObjectId, ref: 'User' })
  owner: Types.ObjectId;

  @Prop({ type: [{ type: Types.ObjectId, ref: 'User' }] })
  members: Types.ObjectId[];

  @Prop([String])
  tags: string[];
}

export const ProjectSchema = SchemaFactory.createForClass(Project);
";

    #[test]
    fn test_extract_project_schema() {
        let fields = extract_fields(PROJECT_SCHEMA);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["name", "description", "budget", "archived", "dueDate", "owner", "members", "tags"]
        );

        let types: Vec<FieldType> = fields.iter().map(|f| f.field_type).collect();
        assert_eq!(
            types,
            vec![
                FieldType::String,
                FieldType::String,
                FieldType::Number,
                FieldType::Boolean,
                FieldType::Date,
                FieldType::ObjectId,
                FieldType::ObjectIdArray,
                FieldType::StringArray,
            ]
        );
    }

    #[test]
    fn test_no_declarations() {
        assert!(extract_fields("export class Empty {}\n").is_empty());
        assert!(extract_fields("").is_empty());
    }

    #[test]
    fn test_prop_must_precede_declaration_on_next_line() {
        // Same-line declarations are not recognized
        assert!(extract_fields("@Prop() name: string;\n").is_empty());
        // A plain property without decorator is ignored
        assert!(extract_fields("  name: string;\n").is_empty());
    }

    #[test]
    fn test_decorator_with_parenthesis_is_skipped() {
        let source = "@Prop({ default: () => Date.now() })\n  createdAt: Date;\n\n@Prop()\n  title: string;\n";
        let fields = extract_fields(source);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "title");
    }

    #[test]
    fn test_assignment_markers_are_dropped() {
        let source = "@Prop()\n  title!: string;\n\n@Prop()\n  note?: string;\n";
        let fields = extract_fields(source);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "title");
        assert_eq!(fields[1].name, "note");
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let source = "@Prop()\n  title: string;\n@Prop()\n  title: number;\n";
        let fields = extract_fields(source);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field_type, FieldType::String);
        assert_eq!(fields[1].field_type, FieldType::Number);
    }

    #[test]
    fn test_crlf_line_endings() {
        let source = "@Prop()\r\n  title: string;\r\n";
        let fields = extract_fields(source);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].raw_type, "string");
    }
}
