use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const MISSING_INTEREST_MESSAGE: &str = "Please fill in your area of interest.";

/// Why the student wants to take a course.
/// Serialized as the label shown in the form; the short keys are accepted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[default]
    #[serde(rename = "Learn a skill for a job", alias = "job-skill")]
    JobSkill,
    #[serde(rename = "Learn for school", alias = "school")]
    School,
    #[serde(rename = "Not sure yet", alias = "undecided")]
    Undecided,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::JobSkill, Goal::School, Goal::Undecided];

    pub fn label(self) -> &'static str {
        match self {
            Goal::JobSkill => "Learn a skill for a job",
            Goal::School => "Learn for school",
            Goal::Undecided => "Not sure yet",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    #[default]
    #[serde(alias = "beginner")]
    Beginner,
    #[serde(alias = "intermediate")]
    Intermediate,
    #[serde(alias = "advanced")]
    Advanced,
}

impl Experience {
    pub const ALL: [Experience; 3] = [
        Experience::Beginner,
        Experience::Intermediate,
        Experience::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
            Experience::Advanced => "Advanced",
        }
    }
}

/// One form submission. Lives only as long as the request that carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPreferences {
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub experience: Experience,
}

impl StudentPreferences {
    /// Interest is the only free-text field and must contain something other
    /// than whitespace.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.interest.trim().is_empty() {
            return Err(AppError::Validation(MISSING_INTEREST_MESSAGE.to_string()));
        }
        Ok(())
    }
}
