use crate::model::{Cell, Language, LayoutCommand};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{command}' expects {expected}")]
    WrongArguments {
        command: String,
        expected: &'static str,
    },
    #[error("unsupported language '{0}'")]
    UnknownLanguage(String),
}

/// One line of terminal input, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Layout(Vec<LayoutCommand>),
    SetLanguage(Language),
    Show,
    Help,
    Quit,
    Empty,
}

fn number<T: std::str::FromStr>(word: &str) -> Result<T, CommandParseError> {
    word.parse()
        .map_err(|_| CommandParseError::NotANumber(word.to_string()))
}

fn cells(
    command: &str,
    expected: &'static str,
    args: &[&str],
) -> Result<Vec<Cell>, CommandParseError> {
    if args.is_empty() || args.len() % 2 != 0 {
        return Err(CommandParseError::WrongArguments {
            command: command.to_string(),
            expected,
        });
    }
    args.chunks(2)
        .map(|pair| Ok(Cell::new(number(pair[0])?, number(pair[1])?)))
        .collect()
}

pub fn parse_line(line: &str) -> Result<InputLine, CommandParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((command, args)) = words.split_first() else {
        return Ok(InputLine::Empty);
    };

    let input = match (*command, args) {
        ("t" | "toggle", _) => {
            let cells = cells("toggle", "<row> <col>", args)?;
            if cells.len() != 1 {
                return Err(CommandParseError::WrongArguments {
                    command: "toggle".to_string(),
                    expected: "<row> <col>",
                });
            }
            InputLine::Layout(vec![LayoutCommand::ToggleTile(cells[0])])
        }
        ("drag", _) => {
            let cells = cells("drag", "pairs of <row> <col>", args)?;
            let mut commands = vec![LayoutCommand::DragStart(cells[0])];
            commands.extend(cells[1..].iter().map(|cell| LayoutCommand::DragEnter(*cell)));
            commands.push(LayoutCommand::DragEnd);
            InputLine::Layout(commands)
        }
        ("range", _) => {
            let expected = "<r1> <c1> <r2> <c2> [on|off]";
            let (corners, selected) = match args.split_last() {
                Some((&"on", rest)) => (rest, true),
                Some((&"off", rest)) => (rest, false),
                _ => (args, true),
            };
            let corners = cells("range", expected, corners)?;
            if corners.len() != 2 {
                return Err(CommandParseError::WrongArguments {
                    command: "range".to_string(),
                    expected,
                });
            }
            InputLine::Layout(vec![LayoutCommand::SelectRange(
                corners[0], corners[1], selected,
            )])
        }
        ("clear", []) => InputLine::Layout(vec![LayoutCommand::Clear]),
        ("floors", [floors]) => InputLine::Layout(vec![LayoutCommand::SetFloors(number(floors)?)]),
        ("grid", [size]) => InputLine::Layout(vec![LayoutCommand::SetGridSize(number(size)?)]),
        ("lang", [code]) => InputLine::SetLanguage(
            Language::from_code(code)
                .ok_or_else(|| CommandParseError::UnknownLanguage(code.to_string()))?,
        ),
        ("show", []) => InputLine::Show,
        ("help" | "?", []) => InputLine::Help,
        ("quit" | "exit" | "q", []) => InputLine::Quit,
        ("clear" | "show" | "help" | "?" | "quit" | "exit" | "q", _) => {
            return Err(CommandParseError::WrongArguments {
                command: command.to_string(),
                expected: "no arguments",
            })
        }
        ("floors" | "grid" | "lang", _) => {
            return Err(CommandParseError::WrongArguments {
                command: command.to_string(),
                expected: "one argument",
            })
        }
        (other, _) => return Err(CommandParseError::UnknownCommand(other.to_string())),
    };
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(
            parse_line("t 3 -4"),
            Ok(InputLine::Layout(vec![LayoutCommand::ToggleTile(Cell::new(3, -4))]))
        );
        assert_eq!(
            parse_line("t 3"),
            Err(CommandParseError::WrongArguments {
                command: "toggle".to_string(),
                expected: "<row> <col>"
            })
        );
        assert_eq!(
            parse_line("t 3 x"),
            Err(CommandParseError::NotANumber("x".to_string()))
        );
    }

    #[test]
    fn test_drag_expands_to_gesture() {
        assert_eq!(
            parse_line("drag 0 0 0 1 1 1"),
            Ok(InputLine::Layout(vec![
                LayoutCommand::DragStart(Cell::new(0, 0)),
                LayoutCommand::DragEnter(Cell::new(0, 1)),
                LayoutCommand::DragEnter(Cell::new(1, 1)),
                LayoutCommand::DragEnd,
            ]))
        );
        assert!(parse_line("drag").is_err());
        assert!(parse_line("drag 1 2 3").is_err());
    }

    #[test]
    fn test_range() {
        assert_eq!(
            parse_line("range 0 0 2 3"),
            Ok(InputLine::Layout(vec![LayoutCommand::SelectRange(
                Cell::new(0, 0),
                Cell::new(2, 3),
                true
            )]))
        );
        assert_eq!(
            parse_line("range 2 3 0 0 off"),
            Ok(InputLine::Layout(vec![LayoutCommand::SelectRange(
                Cell::new(2, 3),
                Cell::new(0, 0),
                false
            )]))
        );
        assert!(parse_line("range 0 0 off").is_err());
    }

    #[test]
    fn test_sliders_and_language() {
        assert_eq!(
            parse_line("floors 5"),
            Ok(InputLine::Layout(vec![LayoutCommand::SetFloors(5)]))
        );
        assert_eq!(
            parse_line("  grid   16 "),
            Ok(InputLine::Layout(vec![LayoutCommand::SetGridSize(16)]))
        );
        assert!(parse_line("grid -1").is_err());
        assert_eq!(parse_line("lang ru"), Ok(InputLine::SetLanguage(Language::Ru)));
        assert_eq!(
            parse_line("lang de"),
            Err(CommandParseError::UnknownLanguage("de".to_string()))
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_line(""), Ok(InputLine::Empty));
        assert_eq!(parse_line("show"), Ok(InputLine::Show));
        assert_eq!(parse_line("?"), Ok(InputLine::Help));
        assert_eq!(parse_line("quit"), Ok(InputLine::Quit));
        assert_eq!(
            parse_line("clear"),
            Ok(InputLine::Layout(vec![LayoutCommand::Clear]))
        );
        assert!(parse_line("clear now").is_err());
        assert_eq!(
            parse_line("build"),
            Err(CommandParseError::UnknownCommand("build".to_string()))
        );
    }
}
