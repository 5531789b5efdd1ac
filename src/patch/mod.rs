mod types;
pub use types::*;

use crate::script::{EditCommand, EditScript};

/// Replays `script` against `old` and returns the updated sequence.
///
/// Every `Keep` and `Delete` must carry the element it consumes from `old`,
/// and the script must consume `old` entirely.
pub fn apply<T: PartialEq + Clone>(
    old: &[T],
    script: &EditScript<T>,
) -> Result<Vec<T>, PatchError> {
    let mut result = Vec::with_capacity(old.len() + script.edit_distance());
    let mut old_line = 0;

    for command in script {
        match command {
            EditCommand::Insert(t) => result.push(t.clone()),
            EditCommand::Keep(t) | EditCommand::Delete(t) => {
                let current = old
                    .get(old_line)
                    .ok_or(PatchError::Exhausted { index: old_line })?;
                if current != t {
                    return Err(PatchError::Mismatch { index: old_line });
                }
                if command.is_keep() {
                    result.push(current.clone());
                }
                old_line += 1;
            }
        }
    }

    if old_line < old.len() {
        return Err(PatchError::Unconsumed {
            remaining: old.len() - old_line,
        });
    }
    Ok(result)
}
