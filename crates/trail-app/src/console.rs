//! The stdin line protocol.
//!
//! ```text
//! click <k>                  pointer on checkpoint marker k
//! key <enter|space> <k>      key press with marker k focused
//! key escape                 Escape
//! outside                    pointer outside the detail card
//! surface                    pointer inside the detail card
//! close                      the card's close button
//! version <name>             switch language version
//! cutoff <year>              show entries up to <year>
//! quit
//! ```

use trail_presentation::{Key, PointerTarget, UiEvent};

use crate::error::AppError;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A UI event for the input router.
    Ui(UiEvent),
    /// Switch the language version.
    Version(String),
    /// Change the cutoff year.
    Cutoff(i32),
    /// Stop the host.
    Quit,
}

/// Parses a line. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns `AppError::Command` for unknown commands or bad arguments.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, AppError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    if command.starts_with('#') {
        return Ok(None);
    }
    let args: Vec<&str> = words.collect();

    let parsed = match (command, args.as_slice()) {
        ("click", [k]) => ConsoleCommand::Ui(UiEvent::Pointer(PointerTarget::Checkpoint(
            checkpoint(k)?,
        ))),
        ("key", [key]) => ConsoleCommand::Ui(UiEvent::Key {
            key: parse_key(key)?,
            focused: None,
        }),
        ("key", [key, k]) => ConsoleCommand::Ui(UiEvent::Key {
            key: parse_key(key)?,
            focused: Some(checkpoint(k)?),
        }),
        ("outside", []) => ConsoleCommand::Ui(UiEvent::Pointer(PointerTarget::Outside)),
        ("surface", []) => ConsoleCommand::Ui(UiEvent::Pointer(PointerTarget::DetailSurface)),
        ("close", []) => ConsoleCommand::Ui(UiEvent::Pointer(PointerTarget::CloseButton)),
        ("version", [name]) => ConsoleCommand::Version((*name).to_owned()),
        ("cutoff", [year]) => ConsoleCommand::Cutoff(
            year.parse()
                .map_err(|e| AppError::Command(format!("cutoff year {year:?}: {e}")))?,
        ),
        ("quit" | "exit", []) => ConsoleCommand::Quit,
        _ => return Err(AppError::Command(line.trim().to_owned())),
    };
    Ok(Some(parsed))
}

fn checkpoint(word: &str) -> Result<usize, AppError> {
    word.parse()
        .map_err(|e| AppError::Command(format!("checkpoint {word:?}: {e}")))
}

fn parse_key(word: &str) -> Result<Key, AppError> {
    match word.to_ascii_lowercase().as_str() {
        "enter" => Ok(Key::Enter),
        "space" => Ok(Key::Space),
        "escape" | "esc" => Ok(Key::Escape),
        _ => Err(AppError::Command(format!("unknown key {word:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pointer_commands() {
        assert_eq!(
            parse_line("click 2").unwrap(),
            Some(ConsoleCommand::Ui(UiEvent::Pointer(PointerTarget::Checkpoint(2))))
        );
        assert_eq!(
            parse_line("  outside ").unwrap(),
            Some(ConsoleCommand::Ui(UiEvent::Pointer(PointerTarget::Outside)))
        );
        assert_eq!(
            parse_line("close").unwrap(),
            Some(ConsoleCommand::Ui(UiEvent::Pointer(PointerTarget::CloseButton)))
        );
        assert_eq!(
            parse_line("surface").unwrap(),
            Some(ConsoleCommand::Ui(UiEvent::Pointer(PointerTarget::DetailSurface)))
        );
    }

    #[test]
    fn test_parse_key_commands() {
        assert_eq!(
            parse_line("key Enter 1").unwrap(),
            Some(ConsoleCommand::Ui(UiEvent::Key {
                key: Key::Enter,
                focused: Some(1)
            }))
        );
        assert_eq!(
            parse_line("key escape").unwrap(),
            Some(ConsoleCommand::Ui(UiEvent::Key {
                key: Key::Escape,
                focused: None
            }))
        );
    }

    #[test]
    fn test_parse_host_commands() {
        assert_eq!(
            parse_line("version gr").unwrap(),
            Some(ConsoleCommand::Version("gr".to_owned()))
        );
        assert_eq!(
            parse_line("cutoff 1990").unwrap(),
            Some(ConsoleCommand::Cutoff(1990))
        );
        assert_eq!(parse_line("quit").unwrap(), Some(ConsoleCommand::Quit));
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# walk forward").unwrap(), None);
    }

    #[test]
    fn test_bad_lines_are_command_errors() {
        for line in ["jump 3", "click", "click two", "key tab 1", "cutoff later", "close now"] {
            match parse_line(line) {
                Err(AppError::Command(_)) => {}
                other => panic!("expected Command error for {line:?}, got {other:?}"),
            }
        }
    }
}
