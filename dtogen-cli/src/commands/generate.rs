//! DTO generation command
//!
//! Locates `src/<module>/schemas/<module>.schema.ts`, extracts its `@Prop`
//! declarations and writes the create, update, response and filter DTOs to
//! `src/<module>/dto/`.
//!
//! # Example
//!
//! ```bash
//! dtogen project
//! dtogen project --dry-run
//! dtogen user-profile --diff -C ../api
//! ```

use crate::config::DtoGenConfig;
use crate::error::DtoGenError;
use crate::scaffold::{extract_fields, DtoGenerator, GeneratedFile, TemplateHelpers, TemplateRegistry};
use anyhow::{Context, Result};
use console::{style, Emoji};
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

static SUCCESS: Emoji<'_, '_> = Emoji("✓", "√");
static SPARKLE: Emoji<'_, '_> = Emoji("✨", "*");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");

/// How generated files are delivered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Write files into the DTO directory
    #[default]
    Write,
    /// Print rendered files to stdout
    DryRun,
    /// Print a line diff against the files on disk
    Diff,
}

/// Outcome of a generation run
#[derive(Debug)]
pub struct GenerationReport {
    /// Directory the DTOs belong to
    pub dto_dir: PathBuf,
    /// Rendered files, relative to `dto_dir`
    pub files: Vec<GeneratedFile>,
    /// Number of properties found in the schema
    pub field_count: usize,
    /// Whether anything was written to disk
    pub written: bool,
}

/// DTO generation command
pub struct GenerateCommand {
    /// Module name (e.g., `project`, `user-profile`)
    module: String,
    /// Project root directory
    root: PathBuf,
    /// Explicit config file
    config_path: Option<PathBuf>,
    /// Template override directory from the command line
    template_dir: Option<PathBuf>,
    /// Delivery mode
    mode: OutputMode,
    /// Suppress the summary
    quiet: bool,
}

impl GenerateCommand {
    /// Create a command for `module` in the project at `root`
    #[must_use]
    pub const fn new(module: String, root: PathBuf) -> Self {
        Self {
            module,
            root,
            config_path: None,
            template_dir: None,
            mode: OutputMode::Write,
            quiet: false,
        }
    }

    /// Use an explicit config file instead of `<root>/dtogen.toml`
    #[must_use]
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Use a template override directory, taking precedence over the config
    #[must_use]
    pub fn with_template_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.template_dir = dir;
        self
    }

    /// Set the delivery mode
    #[must_use]
    pub const fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Suppress the human-readable summary
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Execute the generate command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Module name is invalid
    /// - Configuration cannot be loaded
    /// - Schema file does not exist or cannot be read
    /// - A template fails to parse or render
    /// - File operations fail
    pub fn execute(&self) -> Result<GenerationReport> {
        TemplateHelpers::validate_module_name(&self.module)?;

        let config = DtoGenConfig::load(&self.root, self.config_path.as_deref())
            .context("Failed to load configuration")?;

        let schema_path = config.schema_path(&self.root, &self.module);
        let dto_dir = config.dto_dir(&self.root, &self.module);
        tracing::debug!(schema = %schema_path.display(), dto_dir = %dto_dir.display(), "Resolved paths");

        if !schema_path.is_file() {
            return Err(DtoGenError::MissingSchema(schema_path).into());
        }

        let source = fs::read_to_string(&schema_path)
            .map_err(|e| DtoGenError::io(&schema_path, e))?;

        let fields = extract_fields(&source);
        tracing::info!(module = %self.module, count = fields.len(), "Extracted schema properties");
        if fields.is_empty() {
            tracing::warn!(schema = %schema_path.display(), "No @Prop declarations found");
        }
        let field_count = fields.len();

        // Command-line directories resolve against the working directory,
        // config-file directories against the project root
        let template_dir = self.template_dir.clone().or_else(|| {
            config
                .templates
                .override_dir
                .as_ref()
                .map(|dir| self.root.join(dir))
        });
        let templates = TemplateRegistry::with_overrides(template_dir.as_deref())
            .context("Failed to load templates")?;

        let generator = DtoGenerator::new(&self.module, fields, templates, config.pagination)
            .context("Failed to create DTO generator")?;
        let files = generator.generate().context("Failed to generate DTO files")?;

        let written = match self.mode {
            OutputMode::Write => {
                self.write_files(&dto_dir, &files)?;
                true
            }
            OutputMode::DryRun => {
                Self::print_files(&mut io::stdout().lock(), &dto_dir, &files)?;
                false
            }
            OutputMode::Diff => {
                Self::print_diffs(&mut io::stdout().lock(), &dto_dir, &files)?;
                false
            }
        };

        Ok(GenerationReport {
            dto_dir,
            files,
            field_count,
            written,
        })
    }

    /// Write files to disk, creating the DTO directory if needed
    fn write_files(&self, dto_dir: &Path, files: &[GeneratedFile]) -> Result<()> {
        fs::create_dir_all(dto_dir)
            .with_context(|| format!("Failed to create directory: {}", dto_dir.display()))?;

        if !self.quiet {
            println!(
                "\n{} {} {}",
                style("Generating DTOs for").cyan().bold(),
                style(&self.module).green().bold(),
                style("...").cyan().bold()
            );
        }

        for file in files {
            let full_path = dto_dir.join(&file.path);
            fs::write(&full_path, &file.content)
                .with_context(|| format!("Failed to write file: {}", full_path.display()))?;
            tracing::debug!(path = %full_path.display(), bytes = file.content.len(), "Wrote file");

            if !self.quiet {
                println!(
                    "  {} {} ({})",
                    style(SUCCESS).green(),
                    style(file.path.display()).dim(),
                    style(&file.description).dim()
                );
            }
        }

        if !self.quiet {
            println!(
                "\n{SPARKLE} DTOs generated in: {}",
                style(dto_dir.display()).green().bold()
            );
        }

        Ok(())
    }

    /// Print rendered files without touching the disk
    fn print_files(out: &mut impl Write, dto_dir: &Path, files: &[GeneratedFile]) -> Result<()> {
        for file in files {
            writeln!(
                out,
                "{FILE}{}",
                style(dto_dir.join(&file.path).display()).bold()
            )?;
            writeln!(out)?;
            write!(out, "{}", file.content)?;
            writeln!(out)?;
        }

        Ok(())
    }

    /// Print a line diff between the files on disk and the rendered files
    fn print_diffs(out: &mut impl Write, dto_dir: &Path, files: &[GeneratedFile]) -> Result<()> {
        for file in files {
            let full_path = dto_dir.join(&file.path);
            let existing = if full_path.exists() {
                Some(
                    fs::read_to_string(&full_path)
                        .with_context(|| format!("Failed to read file: {}", full_path.display()))?,
                )
            } else {
                None
            };

            writeln!(out, "{FILE}{}", style(full_path.display()).bold())?;

            match existing {
                None => writeln!(out, "  {}", style("(new file)").green())?,
                Some(ref current) if *current == file.content => {
                    writeln!(out, "  {}", style("(unchanged)").dim())?;
                }
                Some(ref current) => {
                    let diff = TextDiff::from_lines(current, &file.content);
                    for change in diff.iter_all_changes() {
                        match change.tag() {
                            ChangeTag::Delete => write!(out, "{}", style(format!("-{change}")).red())?,
                            ChangeTag::Insert => write!(out, "{}", style(format!("+{change}")).green())?,
                            ChangeTag::Equal => write!(out, " {change}")?,
                        }
                    }
                }
            }
            writeln!(out)?;
        }

        Ok(())
    }
}
