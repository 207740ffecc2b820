//! Project generation command

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::config::GeneratorOptions;
use crate::error::GenerateError;
use crate::materialize::Materializer;
use crate::prompt::{Answers, Prompter, Questions};
use crate::template::TemplateRoot;
use crate::validate::{validate_dir, validate_project_name};

/// Inputs checked before the operator is asked anything
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Validated destination directory
    pub destination: PathBuf,
    /// Validated template root
    pub root: TemplateRoot,
    /// Templates available in the root
    pub choices: Vec<String>,
}

/// Generate a project from a template
pub struct GenerateCommand {
    options: GeneratorOptions,
    materializer: Materializer,
}

impl GenerateCommand {
    /// Create a new command instance
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            materializer: Materializer::default(),
        }
    }

    /// Validate the destination and template root and list the templates
    ///
    /// The destination is checked first, so a missing destination is
    /// reported even when the template root is missing too. Nothing is
    /// written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if either directory is missing or not a directory,
    /// or if the template root is empty.
    pub fn resolve(&self) -> Result<Resolved, GenerateError> {
        let destination = self.options.destination()?;
        validate_dir(&destination)?;

        let root = TemplateRoot::open(self.options.templates_root())?;
        let choices = root.choices()?;
        if choices.is_empty() {
            return Err(GenerateError::NoTemplates(root.path().to_path_buf()));
        }

        Ok(Resolved {
            destination,
            root,
            choices,
        })
    }

    /// Execute the command, returning the generated project's path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The destination or template root is invalid
    /// - Prompting fails or yields invalid answers
    /// - The project directory cannot be created
    /// - Any template file fails to render or write
    pub fn execute(&self, prompter: &mut dyn Prompter) -> Result<PathBuf> {
        let resolved = self.resolve()?;

        let answers = prompter.ask(&Questions {
            default_destination: resolved.destination.clone(),
            choices: resolved.choices.clone(),
            default_name: self.options.project_name.clone(),
        })?;

        self.generate(&resolved.root, &answers)
    }

    /// Create the project directory and materialize the chosen template
    ///
    /// # Errors
    ///
    /// Returns an error if the answers are invalid or generation fails.
    pub fn generate(&self, root: &TemplateRoot, answers: &Answers) -> Result<PathBuf> {
        validate_dir(&answers.destination)?;
        validate_project_name(&answers.project_name)?;
        let template_path = root.template_path(&answers.template)?;
        let project_path = answers.destination.join(&answers.project_name);

        info!(
            template = %template_path.display(),
            project = %project_path.display(),
            "generating project"
        );

        fs::create_dir_all(&project_path)
            .map_err(|err| GenerateError::io(&project_path, err))?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(format!("Generating {}...", answers.project_name));

        let result = self
            .materializer
            .materialize(&template_path, &project_path, &answers.project_name);
        spinner.finish_and_clear();
        result?;

        info!(project = %project_path.display(), "project generated");
        Ok(project_path)
    }
}
