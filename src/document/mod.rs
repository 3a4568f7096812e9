//! Document value model and path resolution
//!
//! Vehicle data documents are arbitrary JSON trees whose shape is controlled by an external provider.
//! Rather than indexing into untyped JSON, documents are converted once into [`Value`], a closed sum type,
//! so every traversal and formatting decision is an exhaustive match.
//!
//! Field paths are dot-separated segments where a segment may carry a trailing array index
//! (`VehicleHistory.KeeperChangeList[2].DateOfTransaction`). [`resolve`] walks such a path and yields
//! `None` for anything that is not there: a missing key, an out-of-range index, or a scalar where a
//! container was expected. Resolution never fails and never clones the document.
//!
//! There is no escaping syntax, so field names containing `.` or a trailing `[n]` cannot be addressed.

mod path;
mod value;

pub use path::{FieldPath, PathSegment, resolve};
pub use value::Value;
