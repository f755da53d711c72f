//! Invocation of the external Graphviz program
//!
//! Writes a DOT description to disk and runs `dot -T<format>` on it. When
//! the description is not retained it lives in a temporary file that is
//! removed once rendering finishes.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use tracing::{debug, span, trace, Level};

use crate::core::AutomatonError;

/// Default Graphviz program
pub const DEFAULT_PROGRAM: &str = "dot";

/// Default output image format
pub const DEFAULT_FORMAT: &str = "png";

/// External renderer turning DOT files into images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizCommand {
    program: OsString,
    format: String,
}

impl GraphvizCommand {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Run the program on an existing DOT file
    pub fn render_file(&self, dot_file: &Path, image: &Path) -> Result<(), AutomatonError> {
        let render_span = span!(Level::INFO, "graphviz", format = %self.format);
        let _enter = render_span.enter();

        debug!(
            program = ?self.program,
            input = %dot_file.display(),
            output = %image.display(),
            "Running renderer"
        );

        let output = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg(dot_file)
            .arg("-o")
            .arg(image)
            .output()
            .map_err(|e| {
                AutomatonError::render_failed(format!(
                    "could not run {}: {}",
                    self.program.to_string_lossy(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AutomatonError::render_failed(format!(
                "{} exited with {}: {}",
                self.program.to_string_lossy(),
                output.status,
                stderr.trim()
            )));
        }

        trace!("Renderer finished");
        Ok(())
    }

    /// Render a DOT description to `image`
    ///
    /// With `retain_as` set the description is written to that path and
    /// left in place; otherwise it goes through a temporary file.
    pub fn render(
        &self,
        dot: &str,
        image: &Path,
        retain_as: Option<&Path>,
    ) -> Result<(), AutomatonError> {
        match retain_as {
            Some(path) => {
                fs::write(path, dot)?;
                debug!(path = %path.display(), "Wrote DOT file");
                self.render_file(path, image)
            }
            None => {
                let mut file = tempfile::Builder::new()
                    .prefix("fsadot-")
                    .suffix(".dot")
                    .tempfile()?;
                file.write_all(dot.as_bytes())?;
                file.flush()?;
                trace!(path = %file.path().display(), "Wrote temporary DOT file");
                self.render_file(file.path(), image)
            }
        }
    }
}

impl Default for GraphvizCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let command = GraphvizCommand::default();
        assert_eq!(command.program(), "dot");
        assert_eq!(command.format(), "png");

        let command = command.with_program("/usr/bin/dot").with_format("svg");
        assert_eq!(command.program(), "/usr/bin/dot");
        assert_eq!(command.format(), "svg");
    }

    #[test]
    fn test_missing_program_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let command = GraphvizCommand::new().with_program("fsadot-no-such-program");
        let err = command
            .render("digraph {}", &dir.path().join("out.png"), None)
            .unwrap_err();
        assert!(matches!(err, AutomatonError::RenderFailed { .. }));
        assert!(err.to_string().contains("fsadot-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let command = GraphvizCommand::new().with_program("false");
        let err = command
            .render("digraph {}", &dir.path().join("out.png"), None)
            .unwrap_err();
        assert!(matches!(err, AutomatonError::RenderFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_retained_dot_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let dot_path = dir.path().join("automata.dot");
        let command = GraphvizCommand::new().with_program("true");
        command
            .render("digraph {}\n", &dir.path().join("automata.png"), Some(&dot_path))
            .unwrap();
        assert_eq!(fs::read_to_string(&dot_path).unwrap(), "digraph {}\n");
    }
}
