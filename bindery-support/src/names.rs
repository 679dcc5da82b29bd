//! Validation of free-form names.
//!
//! Aliases are arbitrary strings, but a few shapes are always mistakes:
//! empty names, names padded with whitespace, and names containing
//! control characters. Type names produced by `std::any::type_name`
//! (e.g. `dyn app::Logger`, `HashMap<K, V>`) are always valid.

/// Why a name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameProblem {
    Empty,
    SurroundingWhitespace,
    ControlCharacter,
}

impl NameProblem {
    /// Human-readable description, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            NameProblem::Empty => "name is empty",
            NameProblem::SurroundingWhitespace => "name has leading or trailing whitespace",
            NameProblem::ControlCharacter => "name contains a control character",
        }
    }
}

/// Checks that `name` can be used as an alias or type name.
///
/// ```
/// use bindery_support::names::{check_name, NameProblem};
///
/// assert_eq!(check_name("mailer"), Ok(()));
/// assert_eq!(check_name("dyn app::Logger"), Ok(()));
/// assert_eq!(check_name(""), Err(NameProblem::Empty));
/// assert_eq!(check_name(" mailer"), Err(NameProblem::SurroundingWhitespace));
/// ```
pub fn check_name(name: &str) -> Result<(), NameProblem> {
    if name.is_empty() {
        return Err(NameProblem::Empty);
    }
    if name.trim() != name {
        return Err(NameProblem::SurroundingWhitespace);
    }
    if name.chars().any(char::is_control) {
        return Err(NameProblem::ControlCharacter);
    }
    Ok(())
}
