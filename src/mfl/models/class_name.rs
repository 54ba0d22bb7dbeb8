use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassNameError {
    #[error("Class not found: {0:?}")]
    NotFound(String),
}

/// Class track of the madrasa. Report grouping always follows this
/// enumeration order, never the alphabetical order of the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClassName {
    Nursery,
    Nazera,
    Hifz,
    Kitab,
}

impl ClassName {
    pub const ALL: [ClassName; 4] = [
        ClassName::Nursery,
        ClassName::Nazera,
        ClassName::Hifz,
        ClassName::Kitab,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClassName::Nursery => "Nursery",
            ClassName::Nazera => "Nazera",
            ClassName::Hifz => "Hifz",
            ClassName::Kitab => "Kitab",
        }
    }

    pub fn parse(string: &str) -> Result<Self> {
        let lowered = string.trim().to_lowercase();

        for class_name in ClassName::ALL {
            if class_name.label().to_lowercase() == lowered {
                return Ok(class_name);
            }
        }

        Err(ClassNameError::NotFound(string.to_string()))?
    }

    /// The food fee applies only to the hifz track.
    pub fn has_food_fee(&self) -> bool {
        return matches!(self, ClassName::Hifz);
    }
}
