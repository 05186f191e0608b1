use serde::{Deserialize, Serialize};

/// Named entities pulled out of a document by the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub figures: Vec<String>,
    /// Model reply the entities were parsed from.
    #[serde(skip)]
    pub raw: String,
}

impl ExtractedEntities {
    pub fn total(&self) -> usize {
        self.people.len()
            + self.organizations.len()
            + self.locations.len()
            + self.dates.len()
            + self.figures.len()
    }
}
