pub mod constants;
pub mod error;
pub mod geometry;
pub mod host;
pub mod presenter;
pub mod state;
pub mod tracker;

pub use error::*;
pub use geometry::*;
pub use host::*;
pub use presenter::*;
pub use state::*;
pub use tracker::*;
