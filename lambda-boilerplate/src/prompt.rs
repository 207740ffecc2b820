//! Interactive collection of generation inputs
//!
//! The [`Prompter`] trait is the single point where generation waits for
//! the operator. [`TerminalPrompter`] asks on the terminal with
//! `dialoguer`. Its theme is a constructor argument, so nothing has to be
//! registered globally before prompting.

use dialoguer::theme::{ColorfulTheme, Theme};
use dialoguer::{Input, Select};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::validate::{validate_dir, validate_project_name};

/// Prompt asking for the destination directory
pub const DESTINATION_PROMPT: &str = "Where would you like to generate the project?";
/// Prompt asking for the template
pub const TEMPLATE_PROMPT: &str = "What project template would you like to generate?";
/// Prompt asking for the project name
pub const NAME_PROMPT: &str = "Project name:";

/// Everything the prompter needs to ask its questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questions {
    /// Pre-filled destination directory
    pub default_destination: PathBuf,
    /// Template names to choose from
    pub choices: Vec<String>,
    /// Pre-filled project name, if one was given
    pub default_name: Option<String>,
}

/// The operator's answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Directory the project is created in
    pub destination: PathBuf,
    /// Chosen template name
    pub template: String,
    /// Project name, used as directory name and substitution value
    pub project_name: String,
}

/// Source of [`Answers`]
pub trait Prompter {
    /// Ask all questions and return the complete answer set
    ///
    /// # Errors
    ///
    /// Returns an error if the answers cannot be collected.
    fn ask(&mut self, questions: &Questions) -> Result<Answers>;
}

/// Asks questions on the terminal
pub struct TerminalPrompter {
    theme: Box<dyn Theme>,
}

impl TerminalPrompter {
    /// Create a prompter rendering with `theme`
    #[must_use]
    pub fn new(theme: Box<dyn Theme>) -> Self {
        Self { theme }
    }

    fn ask_destination(&self, default: &Path) -> Result<PathBuf> {
        let input: String = Input::with_theme(&*self.theme)
            .with_prompt(DESTINATION_PROMPT)
            .default(default.display().to_string())
            .validate_with(|input: &String| validate_dir(Path::new(input)).map_err(|e| e.to_string()))
            .interact_text()?;

        Ok(PathBuf::from(input))
    }

    fn ask_template(&self, choices: &[String]) -> Result<String> {
        let index = Select::with_theme(&*self.theme)
            .with_prompt(TEMPLATE_PROMPT)
            .items(choices)
            .default(0)
            .interact()?;

        Ok(choices[index].clone())
    }

    fn ask_name(&self, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&*self.theme)
            .with_prompt(NAME_PROMPT)
            .validate_with(|input: &String| validate_project_name(input).map_err(|e| e.to_string()));

        if let Some(name) = default {
            input = input.default(name.to_string());
        }

        Ok(input.interact_text()?)
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new(Box::new(ColorfulTheme::default()))
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, questions: &Questions) -> Result<Answers> {
        let destination = self.ask_destination(&questions.default_destination)?;
        let template = self.ask_template(&questions.choices)?;
        let project_name = self.ask_name(questions.default_name.as_deref())?;

        Ok(Answers {
            destination,
            template,
            project_name,
        })
    }
}
