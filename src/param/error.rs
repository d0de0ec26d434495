use super::value::Kind;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A write tried to change the kind of an already set parameter.
    TypeMismatch { name: String, from: Kind, to: Kind },
    /// No parameter or record field answers to the given dotted name.
    UnknownLeaf(String),
}

impl Display for ParamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::TypeMismatch { name, from, to } => {
                write!(f, "type of {name} cannot change from {from} to {to}")
            }
            ParamError::UnknownLeaf(name) => write!(f, "no parameter leaf named {name}"),
        }
    }
}

impl std::error::Error for ParamError {}
