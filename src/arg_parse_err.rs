use std::fmt::Display;

use crate::{error::PadError, pad_err};

/// Error reporting for command-line values that parsed as numbers but fail validation.
/// Use `.display_with_arg()` to properly present this error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgParseErr {
    pub message: Option<String>,
}

impl ArgParseErr {
    pub fn display_with_arg(&self, arg_name: &str, value: impl Display) -> String {
        // if there is a specific message, show it to the user,
        // otherwise simply echo the value the user has passed
        let message = match &self.message {
            Some(msg) => msg.clone(),
            None => value.to_string(),
        };

        format!("invalid argument for option `{arg_name}': {message}")
    }

    /// Converts into a validation error mentioning the offending option
    pub fn into_pad_error(self, arg_name: &str, value: impl Display) -> PadError {
        pad_err!(Validation, "{}", self.display_with_arg(arg_name, value))
    }

    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_msg(str: impl ToString) -> Self {
        let string = str.to_string();
        Self {
            message: Some(string),
        }
    }
}

/// Joins a list of raw numbers the way the user typed them, e.g. `2 1`
pub(crate) struct SpaceSeparated<'a>(pub &'a [i64]);

impl Display for SpaceSeparated<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_echoes_value_without_message() {
        let err = ArgParseErr::new();
        assert_eq!(
            err.display_with_arg("ratio", SpaceSeparated(&[0, 1])),
            "invalid argument for option `ratio': 0 1"
        );
    }

    #[test]
    fn test_prefers_specific_message() {
        let err = ArgParseErr::with_msg("channel out of range");
        assert_eq!(
            err.display_with_arg("color", "300"),
            "invalid argument for option `color': channel out of range"
        );
    }

    #[test]
    fn test_into_pad_error_is_validation() {
        let err = ArgParseErr::new().into_pad_error("quality", -1.0);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("`quality': -1"));
    }
}
