//! Line-oriented selection scripts.
//!
//! A script is the text form of a host session: one command per line,
//! executed in order.
//!
//! ```text
//! # comments and blank lines are skipped
//! color blue
//! shape square
//! render out/blue-square.png
//! clear
//! render
//! ```

use crate::input::SelectionEvent;
use std::io::BufRead;
use std::path::PathBuf;
use thiserror::Error;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Feed an event to the controller
    Select(SelectionEvent),
    /// Paint the current selection, optionally to a specific file
    Render(Option<PathBuf>),
}

/// Errors raised while reading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' needs an argument")]
    MissingArgument { line: usize, command: String },

    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a single line. Returns `Ok(None)` for blank lines and comments.
///
/// Color and shape names are passed through untouched so the controller can
/// apply its own handling of unknown names.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (line, None),
    };

    let needs_argument = || ScriptError::MissingArgument {
        line: line_no,
        command: command.to_string(),
    };

    let parsed = match command.to_ascii_lowercase().as_str() {
        "color" => ScriptCommand::Select(SelectionEvent::ColorNamed(
            argument.ok_or_else(needs_argument)?.to_string(),
        )),
        "shape" => ScriptCommand::Select(SelectionEvent::ShapeNamed(
            argument.ok_or_else(needs_argument)?.to_string(),
        )),
        "clear" => ScriptCommand::Select(SelectionEvent::ShapeCleared),
        "redraw" => ScriptCommand::Select(SelectionEvent::RedrawRequested),
        "render" => ScriptCommand::Render(argument.map(PathBuf::from)),
        _ => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: command.to_string(),
            });
        }
    };

    Ok(Some(parsed))
}

/// Reads and parses a whole script. Line numbers in errors are 1-based.
pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, &line?)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selection_and_render_commands() {
        let script = "# demo\ncolor Blue\n\nshape  square \nrender out.png\nclear\nrender\n";
        let commands = parse_script(script.as_bytes()).unwrap();

        assert_eq!(
            commands,
            vec![
                ScriptCommand::Select(SelectionEvent::ColorNamed("Blue".into())),
                ScriptCommand::Select(SelectionEvent::ShapeNamed("square".into())),
                ScriptCommand::Render(Some(PathBuf::from("out.png"))),
                ScriptCommand::Select(SelectionEvent::ShapeCleared),
                ScriptCommand::Render(None),
            ]
        );
    }

    #[test]
    fn unknown_names_are_left_to_the_controller() {
        let command = parse_line(1, "shape hexagon").unwrap();
        assert_eq!(
            command,
            Some(ScriptCommand::Select(SelectionEvent::ShapeNamed(
                "hexagon".into()
            )))
        );
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_script("color red\nspin 90\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScriptError::UnknownCommand { line: 2, .. }));
        assert_eq!(err.to_string(), "line 2: unknown command 'spin'");

        let err = parse_line(7, "color").unwrap_err();
        assert!(matches!(err, ScriptError::MissingArgument { line: 7, .. }));
    }
}
