use std::fmt;

/// A single preparation step. Its number is its position in the recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub description: String,
}

impl Step {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
