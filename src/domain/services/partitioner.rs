//! Argument partitioner
//!
//! Turns the flat token stream of an invocation into its parts:
//!
//! ```text
//! <namespaceName> <className> [-resx path] [-in id...] [-out id...]
//! ```
//!
//! A group starts right after the first occurrence of its marker and stops at
//! the next marker token (any of `-in`, `-out`, `-resx`) or at the end. A
//! marker directly followed by another marker, or by nothing, yields an empty
//! group. Markers may appear in any order.

use std::path::PathBuf;

use crate::domain::entities::ClassSpec;
use crate::domain::value_objects::Direction;
use crate::error::{ActgenError, ActgenResult};

/// Marker followed by the resource store path
pub const RESX_MARKER: &str = "-resx";

const DIRECTIONS: [Direction; 2] = [Direction::In, Direction::Out];

/// True if `token` is one of the recognized markers
pub fn is_marker(token: &str) -> bool {
    token == RESX_MARKER || DIRECTIONS.iter().any(|d| d.marker() == token)
}

/// Identifiers of both direction groups, in token order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentGroups {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl ArgumentGroups {
    pub fn group(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::In => &self.inputs,
            Direction::Out => &self.outputs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}

/// State of the `-resx` marker in a token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceArgument {
    /// No `-resx` marker
    Absent,
    /// `-resx` is the last token or is followed by another marker
    MissingValue,
    /// `-resx <path>`
    Path(String),
}

/// Splits tokens into argument groups
pub struct ArgumentPartitioner;

impl ArgumentPartitioner {
    /// Partition `tokens` into input and output identifiers
    ///
    /// Never fails: an absent marker gives an empty group.
    pub fn partition<S: AsRef<str>>(tokens: &[S]) -> ArgumentGroups {
        ArgumentGroups {
            inputs: Self::group_after(tokens, Direction::In.marker()),
            outputs: Self::group_after(tokens, Direction::Out.marker()),
        }
    }

    /// Locate the `-resx` value, if any
    pub fn resource_argument<S: AsRef<str>>(tokens: &[S]) -> ResourceArgument {
        let Some(index) = Self::marker_index(tokens, RESX_MARKER) else {
            return ResourceArgument::Absent;
        };
        match tokens.get(index + 1).map(|t| t.as_ref()) {
            Some(value) if !is_marker(value) => ResourceArgument::Path(value.to_string()),
            _ => ResourceArgument::MissingValue,
        }
    }

    /// Index of the first occurrence of `marker`
    pub fn marker_index<S: AsRef<str>>(tokens: &[S], marker: &str) -> Option<usize> {
        tokens.iter().position(|t| t.as_ref() == marker)
    }

    fn group_after<S: AsRef<str>>(tokens: &[S], marker: &str) -> Vec<String> {
        let Some(index) = Self::marker_index(tokens, marker) else {
            return Vec::new();
        };
        tokens[index + 1..]
            .iter()
            .map(|t| t.as_ref())
            .take_while(|t| !is_marker(t))
            .map(str::to_string)
            .collect()
    }
}

/// A fully parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub namespace_name: String,
    pub class_name: String,
    pub groups: ArgumentGroups,
    /// Path given with `-resx`
    pub resource_path: Option<PathBuf>,
    /// Tokens between the class name and the first marker
    pub ignored: Vec<String>,
}

impl Invocation {
    pub fn class_spec(&self) -> ClassSpec {
        ClassSpec::from_groups(
            self.namespace_name.clone(),
            self.class_name.clone(),
            self.groups.group(Direction::In).iter().cloned(),
            self.groups.group(Direction::Out).iter().cloned(),
        )
    }
}

/// Parse a complete token stream
///
/// The first two tokens are the namespace and class names and must not be
/// markers. `-resx` must be followed by a path.
pub fn parse_invocation<S: AsRef<str>>(tokens: &[S]) -> ActgenResult<Invocation> {
    let namespace_name = positional(tokens, 0, "namespace name")?;
    let class_name = positional(tokens, 1, "class name")?;

    let resource_path = match ArgumentPartitioner::resource_argument(tokens) {
        ResourceArgument::Absent => None,
        ResourceArgument::MissingValue => {
            return Err(ActgenError::MissingArgument { name: "resx path" })
        }
        ResourceArgument::Path(path) => Some(PathBuf::from(path)),
    };

    let ignored = tokens[2..]
        .iter()
        .map(|t| t.as_ref())
        .take_while(|t| !is_marker(t))
        .map(str::to_string)
        .collect();

    Ok(Invocation {
        namespace_name,
        class_name,
        groups: ArgumentPartitioner::partition(tokens),
        resource_path,
        ignored,
    })
}

fn positional<S: AsRef<str>>(
    tokens: &[S],
    index: usize,
    name: &'static str,
) -> ActgenResult<String> {
    match tokens.get(index).map(|t| t.as_ref()) {
        Some(token) if !is_marker(token) => Ok(token.to_string()),
        _ => Err(ActgenError::MissingArgument { name }),
    }
}
