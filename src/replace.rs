use crate::script::EditCommand;
use std::mem;

/// A run of deleted elements replaced by a run of inserted ones.
///
/// `skipped` counts the kept elements since the previous block. It is only
/// zero on the first block, when the sequences differ right at the start.
/// At least one of `from` and `to` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementBlock<'a, T> {
    pub skipped: usize,
    pub from: Vec<&'a T>,
    pub to: Vec<&'a T>,
}

/// Receives the events of [`group_replacements`].
pub trait ReplacementHandler<'a, T> {
    fn handle_replacement(&mut self, block: ReplacementBlock<'a, T>);

    /// Called for every kept element, after any block it terminates.
    fn handle_keep(&mut self, _item: &'a T) {}
}

impl<'a, T> ReplacementHandler<'a, T> for Vec<ReplacementBlock<'a, T>> {
    fn handle_replacement(&mut self, block: ReplacementBlock<'a, T>) {
        self.push(block);
    }
}

/// Collects consecutive deletes and inserts into replacement blocks.
pub struct ReplacementFinder<'a, 'h, T, H: ?Sized> {
    from: Vec<&'a T>,
    to: Vec<&'a T>,
    skipped: usize,
    handler: &'h mut H,
}

impl<'a, 'h, T, H: ReplacementHandler<'a, T> + ?Sized> ReplacementFinder<'a, 'h, T, H> {
    pub fn new(handler: &'h mut H) -> Self {
        ReplacementFinder {
            from: Vec::new(),
            to: Vec::new(),
            skipped: 0,
            handler,
        }
    }

    pub fn process(&mut self, command: &'a EditCommand<T>) {
        match command {
            EditCommand::Keep(item) => {
                if !self.from.is_empty() || !self.to.is_empty() {
                    self.flush();
                }
                self.skipped += 1;
                self.handler.handle_keep(item);
            }
            EditCommand::Insert(item) => self.to.push(item),
            EditCommand::Delete(item) => self.from.push(item),
        }
    }

    pub fn finish(mut self) {
        if !self.from.is_empty() || !self.to.is_empty() {
            self.flush();
        }
    }

    fn flush(&mut self) {
        let block = ReplacementBlock {
            skipped: mem::take(&mut self.skipped),
            from: mem::take(&mut self.from),
            to: mem::take(&mut self.to),
        };
        self.handler.handle_replacement(block);
    }
}

/// Groups a command stream into replacement blocks.
///
/// Pass `script.iter()` for document order or `script.iter().rev()` to walk
/// the script backwards; in the latter case the items inside each block are
/// reversed as well.
///
/// # Examples
///
/// ```
/// use editscript::myers::diff;
/// use editscript::replace::{group_replacements, ReplacementBlock};
///
/// let script = diff(&["a", "b", "c"], &["a", "x", "c"]);
/// let mut blocks: Vec<ReplacementBlock<'_, &str>> = Vec::new();
/// group_replacements(script.iter(), &mut blocks);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].skipped, 1);
/// assert_eq!(blocks[0].from, vec![&"b"]);
/// assert_eq!(blocks[0].to, vec![&"x"]);
/// ```
pub fn group_replacements<'a, T, I, H>(commands: I, handler: &mut H)
where
    T: 'a,
    I: IntoIterator<Item = &'a EditCommand<T>>,
    H: ReplacementHandler<'a, T> + ?Sized,
{
    let mut finder = ReplacementFinder::new(handler);
    for command in commands {
        finder.process(command);
    }
    finder.finish();
}
