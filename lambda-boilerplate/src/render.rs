//! Single-variable template rendering

use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{GenerateError, Result};

/// Name of the only variable available to templates, used as `{{projectName}}`
pub const PLACEHOLDER: &str = "projectName";

/// Renders template file contents with the project name
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Create a new renderer
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        // Any expression other than the placeholder is an error, not an empty string
        handlebars.set_strict_mode(true);

        Self { handlebars }
    }

    /// Render a template string
    ///
    /// `origin` only names the template in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Render`] if the template is malformed or
    /// refers to anything besides [`PLACEHOLDER`].
    pub fn render(&self, origin: &Path, source: &str, project_name: &str) -> Result<String> {
        self.handlebars
            .render_template(source, &json!({ PLACEHOLDER: project_name }))
            .map_err(|err| GenerateError::Render {
                path: origin.to_path_buf(),
                source: Box::new(err),
            })
    }

    /// Read a template file and render it
    ///
    /// Files that are not valid UTF-8 (images, archives) are returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a text file fails to
    /// render.
    pub fn render_file(&self, path: &Path, project_name: &str) -> Result<Vec<u8>> {
        let bytes = fs::read(path).map_err(|err| GenerateError::io(path, err))?;
        match String::from_utf8(bytes) {
            Ok(source) => Ok(self.render(path, &source, project_name)?.into_bytes()),
            Err(err) => {
                debug!(path = %path.display(), "copying binary file verbatim");
                Ok(err.into_bytes())
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
