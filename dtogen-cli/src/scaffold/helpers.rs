//! Naming helpers for DTO generation

use crate::error::{DtoGenError, Result};
use inflector::Inflector;

/// Naming helpers shared by the generator and the CLI
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Convert string to `PascalCase`
    ///
    /// # Examples
    ///
    /// ```
    /// # use dtogen_cli_lib::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_pascal_case("project"), "Project");
    /// assert_eq!(TemplateHelpers::to_pascal_case("user-profile"), "UserProfile");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Class name prefix derived from a module name
    ///
    /// # Examples
    ///
    /// ```
    /// # use dtogen_cli_lib::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_class_name("project"), "Project");
    /// assert_eq!(TemplateHelpers::to_class_name("work_order"), "WorkOrder");
    /// ```
    #[must_use]
    pub fn to_class_name(module: &str) -> String {
        Self::to_pascal_case(module)
    }

    /// Check that a module name is safe to use in paths and class names
    ///
    /// # Errors
    ///
    /// Returns [`DtoGenError::InvalidModuleName`] if the name is empty, does
    /// not start with an ASCII letter, or contains anything other than ASCII
    /// alphanumerics, `-` and `_`.
    pub fn validate_module_name(module: &str) -> Result<()> {
        let starts_with_letter = module
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());

        if !starts_with_letter
            || !module
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DtoGenError::InvalidModuleName(module.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(TemplateHelpers::to_pascal_case("project"), "Project");
        assert_eq!(TemplateHelpers::to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(TemplateHelpers::to_pascal_case("work_order"), "WorkOrder");
        assert_eq!(TemplateHelpers::to_pascal_case("Invoice"), "Invoice");
    }

    #[test]
    fn test_valid_module_names() {
        for name in ["project", "user-profile", "work_order", "v2", "Invoice"] {
            assert!(
                TemplateHelpers::validate_module_name(name).is_ok(),
                "Name should be valid: {name}"
            );
        }
    }

    #[test]
    fn test_invalid_module_names() {
        for name in ["", "2fa", "-project", "../secrets", "a/b", "a\\b", "my project", "proj.ect"] {
            assert!(
                TemplateHelpers::validate_module_name(name).is_err(),
                "Name should be invalid: {name}"
            );
        }
    }
}
