//! Convention trait and lookup by id

use confgraph_core::ConfigurationGraph;

use crate::error::{Error, Result};
use crate::java::JavaLibraryConvention;

/// Core trait for conventions
pub trait Convention: Send + Sync {
    fn id(&self) -> &str;

    /// Add the convention's configurations to `graph`.
    ///
    /// Configurations that already exist with the same role and attributes
    /// are reused; anything conflicting aborts with `Error::Apply`.
    fn apply(&self, graph: &mut ConfigurationGraph) -> Result<()>;
}

/// Ids accepted by [`by_name`].
pub fn available() -> &'static [&'static str] {
    &[JavaLibraryConvention::ID]
}

/// Look up a convention by id, using default outputs.
pub fn by_name(id: &str) -> Result<Box<dyn Convention>> {
    match id {
        JavaLibraryConvention::ID => Ok(Box::new(JavaLibraryConvention::default())),
        other => Err(Error::UnknownConvention(other.to_string())),
    }
}
