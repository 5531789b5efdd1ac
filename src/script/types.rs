/// A single step of an edit script.
///
/// `Keep` and `Delete` carry the element of the original sequence,
/// `Insert` carries the element of the updated sequence. Items are always
/// the untransformed input values, whatever transformer was used to
/// compare them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditCommand<T> {
    Keep(T),
    Insert(T),
    Delete(T),
}

impl<T> EditCommand<T> {
    pub fn item(&self) -> &T {
        match self {
            EditCommand::Keep(item) | EditCommand::Insert(item) | EditCommand::Delete(item) => item,
        }
    }

    pub fn into_item(self) -> T {
        match self {
            EditCommand::Keep(item) | EditCommand::Insert(item) | EditCommand::Delete(item) => item,
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, EditCommand::Keep(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, EditCommand::Insert(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, EditCommand::Delete(_))
    }

    /// Maps the carried item, preserving the command kind.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> EditCommand<U> {
        match self {
            EditCommand::Keep(item) => EditCommand::Keep(f(item)),
            EditCommand::Insert(item) => EditCommand::Insert(f(item)),
            EditCommand::Delete(item) => EditCommand::Delete(f(item)),
        }
    }
}
