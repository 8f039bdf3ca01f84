//! Domain layer - Note records and output naming rules

pub mod naming;
pub mod note;
pub mod placement;
pub mod render;

pub use naming::{base_filename, NameLedger, NotePath};
pub use note::{Category, Note};
pub use placement::{Folder, Placement};
pub use render::render_note;
