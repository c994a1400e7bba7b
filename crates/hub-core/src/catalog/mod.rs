//! Map and space catalog module.
//!
//! # Module Structure
//!
//! - `model`: Catalog entries (`MapItem`, `SpaceItem`)
//! - `repository`: Async catalog accessors (`MapCatalog`, `SpaceCatalog`)

mod model;
mod repository;

pub use model::{MapItem, SpaceItem};
pub use repository::{MapCatalog, SpaceCatalog};
