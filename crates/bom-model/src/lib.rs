pub mod entry;
pub mod error;
pub mod layout;

pub use entry::BomEntry;
pub use error::{BomError, Result};
pub use layout::LayoutKind;
