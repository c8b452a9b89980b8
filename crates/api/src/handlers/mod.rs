//! Request handlers, one module per resource.

pub mod archives;
pub mod assets;
pub mod categories;
pub mod meta;
pub mod publication_files;
pub mod publications;
