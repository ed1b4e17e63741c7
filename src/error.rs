use std::fmt::{Debug, Display};

/// Which precondition of a run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    /// The source image is missing, unreadable or cannot be decoded
    Input,
    /// A ratio, color or other parameter is out of range
    Validation,
    /// The result could not be encoded or written to its destination
    Output,
}

pub struct PadError {
    pub kind: ErrorKind,
    pub message: String,
}

impl PadError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for PadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for PadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PadError")
            .field(&self.kind)
            .field(&self.message)
            .finish()
    }
}

impl std::error::Error for PadError {}

#[macro_export]
macro_rules! pad_err {
    ($kind:ident, $($arg:tt)+) => {
        $crate::error::PadError::new(
            $crate::error::ErrorKind::$kind,
            format!(
                "picture-padding: {} @ {}:{}:{}",
                format_args!($($arg)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! pad_try {
    ($kind:ident, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::pad_err!($kind, "{}", err));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails_with_io_error() -> Result<(), PadError> {
        let missing: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        pad_try!(Input, missing);
        Ok(())
    }

    #[test]
    fn test_pad_err_carries_kind_and_location() {
        let err = pad_err!(Validation, "ratio must be positive, got {}", -1);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err
            .message
            .starts_with("picture-padding: ratio must be positive, got -1 @ "));
        assert!(err.message.contains("error.rs"));
    }

    #[test]
    fn test_pad_try_converts_foreign_errors() {
        let err = fails_with_io_error().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Input);
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::Output.to_string(), "output");
    }
}
