use std::fmt;

/// Tokens that end the game without making a guess.
pub const QUIT_TOKENS: [&str; 3] = ["q", "quit", "exit"];

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Guess(i64),
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is neither a quit token nor a whole number.
    NotANumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(_) => write!(f, "Please enter a whole number (e.g. 7)."),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a line of input into a Command.
///
/// Quit tokens are matched case-insensitively; surrounding whitespace is
/// ignored.
///
/// # Examples
///
/// ```
/// use ng_client::commands::{Command, ParseError, parse_command};
///
/// assert_eq!(parse_command(" 42 \n"), Ok(Command::Guess(42)));
/// assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
/// assert!(matches!(parse_command("seven"), Err(ParseError::NotANumber(_))));
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();

    if QUIT_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return Ok(Command::Quit);
    }

    trimmed
        .parse::<i64>()
        .map(Command::Guess)
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_tokens_any_case() {
        for input in ["q", "Q", "quit", "QuIt", "exit", "EXIT", "  q  "] {
            assert_eq!(parse_command(input), Ok(Command::Quit), "{input:?}");
        }
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse_command("7"), Ok(Command::Guess(7)));
        assert_eq!(parse_command("-3\n"), Ok(Command::Guess(-3)));
        assert_eq!(parse_command("+12"), Ok(Command::Guess(12)));
        assert_eq!(parse_command("0"), Ok(Command::Guess(0)));
    }

    #[test]
    fn test_malformed_input() {
        for input in ["", "   ", "7.5", "seven", "1e3", "qq", "quit now", "99999999999999999999"] {
            assert_eq!(
                parse_command(input),
                Err(ParseError::NotANumber(input.trim().to_string())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = ParseError::NotANumber("abc".to_string());
        assert_eq!(err.to_string(), "Please enter a whole number (e.g. 7).");
    }
}
