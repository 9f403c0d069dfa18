//! L's type system (§3, §4.4): four concrete types plus `Unknown` for
//! expressions the analyzer could not classify (an undefined name, a
//! malformed literal) so that later checks have something to compare
//! against without panicking.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Double,
    String,
    Boolean,
    Void,
    Unknown,
}

impl Type {
    pub fn as_str(self) -> &'static str {
        match self {
            Type::Double => "Double",
            Type::String => "String",
            Type::Boolean => "Boolean",
            Type::Void => "Void",
            Type::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
