//! Region and entity input model
//!
//! A region is a state (identified by its postal code) holding an ordered
//! list of entities (counties). This is the in-memory form of the county
//! dataset; see [`crate::io::dataset`] for the on-disk JSON shape.

/// Name reserved for the synthetic per-region default cost set
pub const DEFAULT_ENTITY: &str = "Default";

/// A county (or similar sub-region) within a region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A state with its counties, in dataset order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Short region code (e.g. "OH")
    pub code: String,
    /// Display name (e.g. "Ohio")
    pub display_name: String,
    /// Counties in dataset order; duplicates are allowed
    pub entities: Vec<Entity>,
}

impl Region {
    /// Create a region; a missing display name falls back to the code
    pub fn new<I, S>(code: impl Into<String>, display_name: Option<String>, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let code = code.into();
        let display_name = display_name.unwrap_or_else(|| code.clone());
        Self {
            code,
            display_name,
            entities: entities.into_iter().map(Entity::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
