mod common;
mod go;

pub use common::{children_of_kind, descendants, node_text, point_to_location, Location};
pub use go::{package_name, GoParser, ParsedFile};
