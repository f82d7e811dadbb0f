use serde::{Deserialize, Serialize};

/// A portfolio project as the matcher sees it: a STAR narrative plus
/// self-declared tags. Read-only for the duration of a matching call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub situation: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub result: String,
    /// Display order is meaningful to the CMS, not to matching.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl AsRef<Project> for Project {
    fn as_ref(&self) -> &Project {
        self
    }
}
