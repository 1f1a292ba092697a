//! Field type classification for DTO generation
//!
//! Mongoose schema properties are declared with TypeScript types. Each declared
//! type is sorted into one of a handful of buckets, and every bucket carries a
//! fixed TypeScript type, a set of `class-validator` decorators and the type
//! passed to `@ApiProperty`.
//!
//! # Classification
//!
//! Rules are tried in order; the first match wins.
//!
//! | Declared type contains     | TS type    | Validators                                  | Swagger    |
//! |----------------------------|------------|---------------------------------------------|------------|
//! | `number` (any case)        | `number`   | `@IsNumber()`                               | `Number`   |
//! | `boolean` (any case)       | `boolean`  | `@IsBoolean()`                              | `Boolean`  |
//! | `date` (any case)          | `Date`     | `@IsDateString()`                           | `String`   |
//! | `Types.ObjectId[]`         | `string[]` | `@IsArray()`, `@IsMongoId({ each: true })`  | `[String]` |
//! | `Types.ObjectId`           | `string`   | `@IsMongoId()`                              | `String`   |
//! | `string[]` (any case)      | `string[]` | `@IsArray()`, `@IsString({ each: true })`   | `[String]` |
//! | anything else              | `string`   | `@IsString()`                               | `String`   |
//!
//! # Examples
//!
//! ```text
//! budget: number              → number, @IsNumber()
//! archived: boolean           → boolean, @IsBoolean()
//! dueDate: Date               → Date, @IsDateString()
//! members: Types.ObjectId[]   → string[], @IsArray() @IsMongoId({ each: true })
//! owner: Types.ObjectId       → string, @IsMongoId()
//! tags: string[]              → string[], @IsArray() @IsString({ each: true })
//! status: ProjectStatus       → string, @IsString()
//! ```

use std::fmt;

/// A property extracted from a schema, with its classified type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Property name (e.g., "title", "`dueDate`")
    pub name: String,
    /// Type exactly as declared in the schema, trimmed
    pub raw_type: String,
    /// Classified type
    pub field_type: FieldType,
}

/// Target type buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Plain string, also the fallback for unrecognized types
    String,
    /// Any numeric type
    Number,
    /// Boolean
    Boolean,
    /// Date, accepted as an ISO date string
    Date,
    /// Reference to another document
    ObjectId,
    /// List of references to other documents
    ObjectIdArray,
    /// List of strings
    StringArray,
}

impl FieldDefinition {
    /// Build a field from a name and a declared type
    ///
    /// # Examples
    ///
    /// ```
    /// # use dtogen_cli_lib::scaffold::{FieldDefinition, FieldType};
    /// let field = FieldDefinition::new("owner", "Types.ObjectId");
    /// assert_eq!(field.field_type, FieldType::ObjectId);
    /// assert_eq!(field.ts_type(), "string");
    /// ```
    #[must_use]
    pub fn new(name: &str, raw_type: &str) -> Self {
        let raw_type = raw_type.trim();
        Self {
            name: name.to_string(),
            raw_type: raw_type.to_string(),
            field_type: FieldType::classify(raw_type),
        }
    }

    /// TypeScript type used in the generated DTOs
    #[must_use]
    pub const fn ts_type(&self) -> &'static str {
        self.field_type.ts_type()
    }

    /// Swagger type passed to `@ApiProperty`
    #[must_use]
    pub const fn swagger_type(&self) -> &'static str {
        self.field_type.swagger_type()
    }

    /// `class-validator` decorators applied to the field
    #[must_use]
    pub const fn validators(&self) -> &'static [&'static str] {
        self.field_type.validators()
    }
}

impl FieldType {
    /// Classify a declared TypeScript type
    ///
    /// # Examples
    ///
    /// ```
    /// # use dtogen_cli_lib::scaffold::FieldType;
    /// assert_eq!(FieldType::classify("number"), FieldType::Number);
    /// assert_eq!(FieldType::classify("Types.ObjectId[]"), FieldType::ObjectIdArray);
    /// assert_eq!(FieldType::classify("Record<string, unknown>"), FieldType::String);
    /// ```
    #[must_use]
    pub fn classify(raw_type: &str) -> Self {
        let lower = raw_type.to_lowercase();

        if lower.contains("number") {
            Self::Number
        } else if lower.contains("boolean") {
            Self::Boolean
        } else if lower.contains("date") {
            Self::Date
        } else if raw_type.contains("Types.ObjectId[]") {
            Self::ObjectIdArray
        } else if raw_type.contains("Types.ObjectId") {
            Self::ObjectId
        } else if lower.contains("string[]") {
            Self::StringArray
        } else {
            Self::String
        }
    }

    /// TypeScript type for this bucket
    #[must_use]
    pub const fn ts_type(self) -> &'static str {
        match self {
            Self::String | Self::ObjectId => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "Date",
            Self::ObjectIdArray | Self::StringArray => "string[]",
        }
    }

    /// Swagger type for this bucket
    #[must_use]
    pub const fn swagger_type(self) -> &'static str {
        match self {
            Self::String | Self::Date | Self::ObjectId => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::ObjectIdArray | Self::StringArray => "[String]",
        }
    }

    /// `class-validator` decorators for this bucket
    #[must_use]
    pub const fn validators(self) -> &'static [&'static str] {
        match self {
            Self::String => &["@IsString()"],
            Self::Number => &["@IsNumber()"],
            Self::Boolean => &["@IsBoolean()"],
            Self::Date => &["@IsDateString()"],
            Self::ObjectId => &["@IsMongoId()"],
            Self::ObjectIdArray => &["@IsArray()", "@IsMongoId({ each: true })"],
            Self::StringArray => &["@IsArray()", "@IsString({ each: true })"],
        }
    }
}

impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        let raw_type = &self.raw_type;
        let field_type = &self.field_type;
        write!(f, "{name}: {raw_type} ({field_type})")
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Date => write!(f, "date"),
            Self::ObjectId => write!(f, "object-id"),
            Self::ObjectIdArray => write!(f, "object-id[]"),
            Self::StringArray => write!(f, "string[]"),
        }
    }
}
