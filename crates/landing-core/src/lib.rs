pub mod boot;
pub mod comet;
pub mod constants;
pub mod cursor;
pub mod curve;
pub mod mesh;
pub mod parallax;
pub mod scene;
pub mod scramble;
pub mod sprites;
pub mod state;
pub mod terrain;

pub use boot::*;
pub use comet::*;
pub use constants::*;
pub use cursor::*;
pub use curve::*;
pub use mesh::*;
pub use parallax::*;
pub use scene::*;
pub use scramble::*;
pub use sprites::*;
pub use state::*;
pub use terrain::*;

use thiserror::Error;

/// Construction-time validation failures for procedural geometry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("grid needs at least one segment per axis")]
    DegenerateGrid,
}
