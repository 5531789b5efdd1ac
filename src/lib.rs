//! Shortest edit scripts between two sequences.
//!
//! [`compare`] computes the minimal list of keep/insert/delete commands
//! turning one sequence into another. The result can be walked forwards or
//! backwards with a [`CommandVisitor`], or grouped into
//! [`ReplacementBlock`]s for diff renderers.
//!
//! ```
//! use editscript::{compare, EditCommand, Identity};
//!
//! let script = compare(&["a", "b", "c"], &["a", "c", "d"], &Identity);
//! assert_eq!(script.commands(), &[
//!     EditCommand::Keep("a"),
//!     EditCommand::Delete("b"),
//!     EditCommand::Keep("c"),
//!     EditCommand::Insert("d"),
//! ]);
//! ```
pub mod myers;
pub mod optimized;
pub mod options;
pub mod patch;
pub mod replace;
pub mod script;
pub mod transform;

pub use optimized::{compare, compare_with};
pub use options::{Algorithm, CompareOptions};
pub use patch::{apply, PatchError};
pub use replace::{group_replacements, ReplacementBlock, ReplacementHandler};
pub use script::{CommandVisitor, EditCommand, EditScript};
pub use transform::{Identity, LowerCase, Transformer};
