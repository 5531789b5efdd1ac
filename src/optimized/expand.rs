use crate::script::{CommandVisitor, EditCommand, EditScript};

/// Rebuilds a full edit script from a script computed on the reduced
/// sequences.
///
/// `positions1[r]` is the index in `old` of the `r`-th reduced element of the
/// first sequence, likewise `positions2` for `new`. Elements missing from the
/// reduced sequences occur on one side only and are emitted as plain
/// deletes or inserts, in order, right before the next reduced command that
/// passes them.
pub(super) struct Expander<'a, T> {
    old: &'a [T],
    new: &'a [T],
    positions1: &'a [usize],
    positions2: &'a [usize],
    reduced1: usize,
    reduced2: usize,
    next1: usize,
    next2: usize,
    script: EditScript<T>,
}

impl<'a, T: Clone> Expander<'a, T> {
    pub(super) fn new(
        old: &'a [T],
        new: &'a [T],
        positions1: &'a [usize],
        positions2: &'a [usize],
    ) -> Self {
        Expander {
            old,
            new,
            positions1,
            positions2,
            reduced1: 0,
            reduced2: 0,
            next1: 0,
            next2: 0,
            script: EditScript::with_capacity(old.len() + new.len()),
        }
    }

    pub(super) fn into_script(self) -> EditScript<T> {
        self.script
    }

    fn delete_until(&mut self, end: usize) {
        while self.next1 < end {
            self.script.push_delete(self.old[self.next1].clone());
            self.next1 += 1;
        }
    }

    fn insert_until(&mut self, end: usize) {
        while self.next2 < end {
            self.script.push_insert(self.new[self.next2].clone());
            self.next2 += 1;
        }
    }
}

impl<T: Clone> CommandVisitor<usize> for Expander<'_, T> {
    fn visit_command(&mut self, command: &EditCommand<usize>) {
        match command {
            EditCommand::Keep(_) => {
                let target1 = self.positions1[self.reduced1];
                let target2 = self.positions2[self.reduced2];
                self.delete_until(target1);
                self.insert_until(target2);
                self.script.push_keep(self.old[target1].clone());
                self.next1 += 1;
                self.next2 += 1;
                self.reduced1 += 1;
                self.reduced2 += 1;
            }
            EditCommand::Insert(_) => {
                let target = self.positions2[self.reduced2];
                self.insert_until(target + 1);
                self.reduced2 += 1;
            }
            EditCommand::Delete(_) => {
                let target = self.positions1[self.reduced1];
                self.delete_until(target + 1);
                self.reduced1 += 1;
            }
        }
    }

    fn finish_visit(&mut self) {
        self.delete_until(self.old.len());
        self.insert_until(self.new.len());
    }
}
