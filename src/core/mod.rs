pub mod projector;
pub mod reconstructor;

pub use crate::domain::model::{Arguments, Minimized, PathSpec, Projection};
pub use crate::domain::ports::{Document, Field, Member, Reassemble};
pub use crate::utils::error::Result;
