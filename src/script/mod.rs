pub mod types;
pub use types::*;

use std::slice;

/// Walks an [`EditScript`] one command at a time.
///
/// `start_visit` runs before the first command and `finish_visit` after the
/// last one, both for forward and reverse traversal.
pub trait CommandVisitor<T> {
    fn start_visit(&mut self) {}

    fn visit_command(&mut self, command: &EditCommand<T>);

    fn finish_visit(&mut self) {}
}

/// Ordered list of commands transforming an original sequence into an
/// updated one, plus running counts of kept and edited elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    commands: Vec<EditCommand<T>>,
    lcs_length: usize,
    edit_distance: usize,
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        EditScript::new()
    }
}

impl<T> EditScript<T> {
    pub fn new() -> Self {
        EditScript {
            commands: Vec::new(),
            lcs_length: 0,
            edit_distance: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        EditScript {
            commands: Vec::with_capacity(capacity),
            lcs_length: 0,
            edit_distance: 0,
        }
    }

    pub fn push(&mut self, command: EditCommand<T>) {
        match command {
            EditCommand::Keep(_) => self.lcs_length += 1,
            EditCommand::Insert(_) | EditCommand::Delete(_) => self.edit_distance += 1,
        }
        self.commands.push(command);
    }

    pub fn push_keep(&mut self, item: T) {
        self.push(EditCommand::Keep(item));
    }

    pub fn push_insert(&mut self, item: T) {
        self.push(EditCommand::Insert(item));
    }

    pub fn push_delete(&mut self, item: T) {
        self.push(EditCommand::Delete(item));
    }

    /// Number of `Keep` commands, i.e. the length of the longest common
    /// subsequence found.
    pub fn lcs_length(&self) -> usize {
        self.lcs_length
    }

    /// Number of `Insert` and `Delete` commands.
    pub fn edit_distance(&self) -> usize {
        self.edit_distance
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[EditCommand<T>] {
        &self.commands
    }

    pub fn iter(&self) -> slice::Iter<'_, EditCommand<T>> {
        self.commands.iter()
    }

    pub fn into_commands(self) -> Vec<EditCommand<T>> {
        self.commands
    }

    /// Feeds every command to `visitor` in append order.
    pub fn visit<V: CommandVisitor<T> + ?Sized>(&self, visitor: &mut V) {
        visitor.start_visit();
        for command in &self.commands {
            visitor.visit_command(command);
        }
        visitor.finish_visit();
    }

    /// Feeds every command to `visitor` from last to first. Commands keep
    /// their kind: a reversed insert is still reported as an insert.
    pub fn visit_reverse<V: CommandVisitor<T> + ?Sized>(&self, visitor: &mut V) {
        visitor.start_visit();
        for command in self.commands.iter().rev() {
            visitor.visit_command(command);
        }
        visitor.finish_visit();
    }
}

impl<T> Extend<EditCommand<T>> for EditScript<T> {
    fn extend<I: IntoIterator<Item = EditCommand<T>>>(&mut self, iter: I) {
        for command in iter {
            self.push(command);
        }
    }
}

impl<T> FromIterator<EditCommand<T>> for EditScript<T> {
    fn from_iter<I: IntoIterator<Item = EditCommand<T>>>(iter: I) -> Self {
        let mut script = EditScript::new();
        script.extend(iter);
        script
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a EditCommand<T>;
    type IntoIter = slice::Iter<'a, EditCommand<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = EditCommand<T>;
    type IntoIter = std::vec::IntoIter<EditCommand<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
