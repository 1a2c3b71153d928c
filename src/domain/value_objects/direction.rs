//! Direction value object - whether a generated property is an input or output
//!
//! Direction only changes the localization category key and the argument
//! container type of the rendered property. It never changes behavior.

/// Flow direction of an activity argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Value flows into the activity
    In,
    /// Value flows out of the activity
    Out,
}

impl Direction {
    /// Command-line marker that opens this direction's argument group
    pub fn marker(&self) -> &'static str {
        match self {
            Direction::In => "-in",
            Direction::Out => "-out",
        }
    }

    /// Resource key of the category annotation (`Input` / `Output`)
    pub fn category_key(&self) -> &'static str {
        match self {
            Direction::In => "Input",
            Direction::Out => "Output",
        }
    }

    /// Name of the generic argument container (`InArgument` / `OutArgument`)
    pub fn container_type(&self) -> &'static str {
        match self {
            Direction::In => "InArgument",
            Direction::Out => "OutArgument",
        }
    }
}
