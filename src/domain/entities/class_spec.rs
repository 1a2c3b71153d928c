//! ClassSpec entity - the description of one class to generate
//!
//! A ClassSpec is created once per invocation from the partitioned tokens and
//! is immutable afterwards. Both the resource synchronizer and the template
//! renderer read from it.

use crate::domain::value_objects::Direction;

/// One generated property: its identifier and flow direction
///
/// The identifier is used verbatim as the property name and as the prefix of
/// its localization keys. It is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    identifier: String,
    direction: Direction,
}

impl ArgumentSpec {
    pub fn new(identifier: impl Into<String>, direction: Direction) -> Self {
        Self {
            identifier: identifier.into(),
            direction,
        }
    }

    pub fn input(identifier: impl Into<String>) -> Self {
        Self::new(identifier, Direction::In)
    }

    pub fn output(identifier: impl Into<String>) -> Self {
        Self::new(identifier, Direction::Out)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// The class to generate
///
/// Arguments keep the order they were given in. Duplicate identifiers are
/// allowed and produce duplicate properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpec {
    namespace_name: String,
    class_name: String,
    arguments: Vec<ArgumentSpec>,
}

impl ClassSpec {
    pub fn new(
        namespace_name: impl Into<String>,
        class_name: impl Into<String>,
        arguments: Vec<ArgumentSpec>,
    ) -> Self {
        Self {
            namespace_name: namespace_name.into(),
            class_name: class_name.into(),
            arguments,
        }
    }

    /// Build from the two identifier groups: all inputs first, then all outputs
    pub fn from_groups<I, O>(
        namespace_name: impl Into<String>,
        class_name: impl Into<String>,
        inputs: I,
        outputs: O,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        let arguments = inputs
            .into_iter()
            .map(ArgumentSpec::input)
            .chain(outputs.into_iter().map(ArgumentSpec::output))
            .collect();
        Self::new(namespace_name, class_name, arguments)
    }

    pub fn namespace_name(&self) -> &str {
        &self.namespace_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }
}
