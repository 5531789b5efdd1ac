use crate::script::EditScript;
use crate::transform::Transformer;
use log::trace;

/// Furthest reaching x coordinate per diagonal, for one search direction.
///
/// Diagonals can be negative, so the vector is addressed through an offset
/// that is reset for every middle snake search.
struct V {
    data: Vec<isize>,
    offset: isize,
}

impl V {
    fn new(size: usize) -> Self {
        V {
            data: vec![0; size],
            offset: 0,
        }
    }

    fn get(&self, k: isize) -> isize {
        self.data[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, val: isize) {
        self.data[(k + self.offset) as usize] = val;
    }
}

/// A run of matching elements on one diagonal. `start` and `end` are
/// positions in the first sequence, `diag` is `x - y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snake {
    start: isize,
    end: isize,
    diag: isize,
}

/// Linear space divide and conquer search of the shortest edit script.
///
/// The comparison runs on `keys`, the commands carry the matching `items`.
/// Both pairs must have the same lengths.
struct Myers<'a, K, T> {
    keys1: &'a [K],
    keys2: &'a [K],
    items1: &'a [T],
    items2: &'a [T],
    down: V,
    up: V,
}

impl<'a, K: Eq, T: Clone> Myers<'a, K, T> {
    fn new(keys1: &'a [K], keys2: &'a [K], items1: &'a [T], items2: &'a [T]) -> Self {
        debug_assert_eq!(keys1.len(), items1.len());
        debug_assert_eq!(keys2.len(), items2.len());
        let size = keys1.len() + keys2.len() + 2;
        Myers {
            keys1,
            keys2,
            items1,
            items2,
            down: V::new(size),
            up: V::new(size),
        }
    }

    fn equal(&self, x: isize, y: isize) -> bool {
        self.keys1[x as usize] == self.keys2[y as usize]
    }

    fn run(mut self) -> EditScript<T> {
        let mut script = EditScript::with_capacity(self.items1.len().max(self.items2.len()));
        self.build_script(0, self.keys1.len(), 0, self.keys2.len(), &mut script);
        script
    }

    fn build_snake(&self, start: isize, diag: isize, end1: isize, end2: isize) -> Snake {
        let mut end = start;
        while end - diag < end2 && end < end1 && self.equal(end, end - diag) {
            end += 1;
        }
        Snake { start, end, diag }
    }

    fn middle_snake(
        &mut self,
        start1: usize,
        end1: usize,
        start2: usize,
        end2: usize,
    ) -> Option<Snake> {
        let m = (end1 - start1) as isize;
        let n = (end2 - start2) as isize;
        if m == 0 || n == 0 {
            return None;
        }
        let (start1, end1) = (start1 as isize, end1 as isize);
        let (start2, end2) = (start2 as isize, end2 as isize);

        let delta = m - n;
        let sum = m + n;
        let offset = (if sum % 2 == 0 { sum } else { sum + 1 }) / 2;
        self.down.offset = offset;
        self.up.offset = offset - delta;
        self.down.set(1, start1);
        self.up.set(delta + 1, end1 + 1);

        for d in 0..=offset {
            // forward
            for k in (-d..=d).step_by(2) {
                let mut x = if k == -d || (k != d && self.down.get(k - 1) < self.down.get(k + 1)) {
                    self.down.get(k + 1)
                } else {
                    self.down.get(k - 1) + 1
                };
                let mut y = x - start1 + start2 - k;
                while x < end1 && y < end2 && self.equal(x, y) {
                    x += 1;
                    y += 1;
                }
                self.down.set(k, x);

                let overlap = delta - d < k && k < delta + d;
                if delta % 2 != 0 && overlap && self.up.get(k) <= self.down.get(k) {
                    trace!("middle snake found forward at d={d} k={k}");
                    return Some(self.build_snake(self.up.get(k), k + start1 - start2, end1, end2));
                }
            }

            // backward
            for k in ((delta - d)..=(delta + d)).step_by(2) {
                let reach = if k == delta - d
                    || (k != delta + d && self.up.get(k + 1) <= self.up.get(k - 1))
                {
                    self.up.get(k + 1) - 1
                } else {
                    self.up.get(k - 1)
                };
                self.up.set(k, reach);
                let mut x = reach - 1;
                let mut y = x - start1 + start2 - k;
                while x >= start1 && y >= start2 && self.equal(x, y) {
                    self.up.set(k, x);
                    x -= 1;
                    y -= 1;
                }

                if delta % 2 == 0 && -d <= k && k <= d && self.up.get(k) <= self.down.get(k) {
                    trace!("middle snake found backward at d={d} k={k}");
                    return Some(self.build_snake(self.up.get(k), k + start1 - start2, end1, end2));
                }
            }
        }

        // the paths of the all-different case meet by `d == offset`, and matches only
        // move the forward reach up and the backward reach down
        unreachable!("middle snake search exhausted its bound")
    }

    fn build_script(
        &mut self,
        mut start1: usize,
        mut end1: usize,
        mut start2: usize,
        mut end2: usize,
        script: &mut EditScript<T>,
    ) {
        while start1 < end1 && start2 < end2 && self.keys1[start1] == self.keys2[start2] {
            script.push_keep(self.items1[start1].clone());
            start1 += 1;
            start2 += 1;
        }

        // matching tail is emitted once the middle part is done
        let tail_end = end1;
        while end1 > start1 && end2 > start2 && self.keys1[end1 - 1] == self.keys2[end2 - 1] {
            end1 -= 1;
            end2 -= 1;
        }

        if start1 == end1 {
            for item in &self.items2[start2..end2] {
                script.push_insert(item.clone());
            }
        } else if start2 == end2 {
            for item in &self.items1[start1..end1] {
                script.push_delete(item.clone());
            }
        } else {
            let edge_end = (end1 as isize, end1 as isize - end2 as isize);
            let edge_start = (start1 as isize, start1 as isize - start2 as isize);
            match self.middle_snake(start1, end1, start2, end2) {
                Some(snake)
                    if (snake.start, snake.diag) != edge_end
                        && (snake.end, snake.diag) != edge_start =>
                {
                    let (snake_start, snake_end) = (snake.start as usize, snake.end as usize);
                    let snake_start2 = (snake.start - snake.diag) as usize;
                    self.build_script(start1, snake_start, start2, snake_start2, script);
                    for item in &self.items1[snake_start..snake_end] {
                        script.push_keep(item.clone());
                    }
                    let snake_end2 = (snake.end - snake.diag) as usize;
                    self.build_script(snake_end, end1, snake_end2, end2, script);
                }
                _ => self.merge_greedy(start1, end1, start2, end2, script),
            }
        }

        for item in &self.items1[end1..tail_end] {
            script.push_keep(item.clone());
        }
    }

    /// Fallback for windows whose middle snake sits on a corner.
    fn merge_greedy(
        &self,
        start1: usize,
        end1: usize,
        start2: usize,
        end2: usize,
        script: &mut EditScript<T>,
    ) {
        let (mut i, mut j) = (start1, start2);
        while i < end1 || j < end2 {
            if i < end1 && j < end2 && self.keys1[i] == self.keys2[j] {
                script.push_keep(self.items1[i].clone());
                i += 1;
                j += 1;
            } else if end1 - i > end2 - j {
                script.push_delete(self.items1[i].clone());
                i += 1;
            } else {
                script.push_insert(self.items2[j].clone());
                j += 1;
            }
        }
    }
}

/// Computes the shortest edit script between two sequences.
///
/// # Examples
///
/// ```
/// use editscript::myers::diff;
/// use editscript::EditCommand;
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3, 4];
/// let script = diff(&old, &new);
/// assert_eq!(script.commands(), &[
///     EditCommand::Keep(1),
///     EditCommand::Delete(2),
///     EditCommand::Keep(3),
///     EditCommand::Insert(4),
/// ]);
/// assert_eq!(script.edit_distance(), 2);
/// ```
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
pub fn diff<T: Eq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    Myers::new(old, new, old, new).run()
}

/// Like [`diff`], but elements are compared after going through
/// `transformer`. The script carries the untransformed elements.
pub fn diff_by<T, X>(old: &[T], new: &[T], transformer: &X) -> EditScript<T>
where
    T: Eq + Clone,
    X: Transformer<T> + ?Sized,
{
    let keys1: Vec<_> = old.iter().map(|e| transformer.transform(e)).collect();
    let keys2: Vec<_> = new.iter().map(|e| transformer.transform(e)).collect();
    diff_keys(&keys1, &keys2, old, new)
}

/// Runs the engine on precomputed comparison keys.
pub(crate) fn diff_keys<K: Eq, T: Clone>(
    keys1: &[K],
    keys2: &[K],
    old: &[T],
    new: &[T],
) -> EditScript<T> {
    Myers::new(keys1, keys2, old, new).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::EditCommand;
    use crate::transform::LowerCase;
    use proptest::prelude::*;

    fn lcs_len<T: Eq>(a: &[T], b: &[T]) -> usize {
        let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        for i in (0..a.len()).rev() {
            for j in (0..b.len()).rev() {
                table[i][j] = if a[i] == b[j] {
                    table[i + 1][j + 1] + 1
                } else {
                    table[i + 1][j].max(table[i][j + 1])
                };
            }
        }
        table[0][0]
    }

    proptest! {
        #[test]
        fn test_length_invariant(old: Vec<u8>, new: Vec<u8>) {
            let result = diff(&old, &new);
            let deletes = result.iter().filter(|c| c.is_delete()).count();
            let keeps = result.iter().filter(|c| c.is_keep()).count();
            let inserts = result.iter().filter(|c| c.is_insert()).count();
            prop_assert_eq!(old.len(), deletes + keeps);
            prop_assert_eq!(new.len(), inserts + keeps);
        }

        #[test]
        fn test_minimal(
            old in prop::collection::vec(0u8..4, 0..25),
            new in prop::collection::vec(0u8..4, 0..25),
        ) {
            let result = diff(&old, &new);
            let lcs = lcs_len(&old, &new);
            prop_assert_eq!(result.lcs_length(), lcs);
            prop_assert_eq!(result.edit_distance(), old.len() + new.len() - 2 * lcs);
        }

        #[test]
        fn test_idempotency(els: Vec<u8>) {
            let result = diff(&els, &els);
            let expected: Vec<EditCommand<u8>> =
                els.iter().map(|e| EditCommand::Keep(*e)).collect();
            prop_assert_eq!(result.commands(), expected.as_slice());
        }

        #[test]
        fn test_new_empty(els: Vec<u8>) {
            let result = diff(&els, &Vec::new());
            let expected: Vec<EditCommand<u8>> =
                els.iter().map(|e| EditCommand::Delete(*e)).collect();
            prop_assert_eq!(result.commands(), expected.as_slice());
        }

        #[test]
        fn test_old_empty(els: Vec<u8>) {
            let result = diff(&Vec::new(), &els);
            let expected: Vec<EditCommand<u8>> =
                els.iter().map(|e| EditCommand::Insert(*e)).collect();
            prop_assert_eq!(result.commands(), expected.as_slice());
        }

        #[test]
        fn test_symmetry(old: Vec<u8>, new: Vec<u8>) {
            let result = diff(&old, &new);
            let result_2 = diff(&new, &old);
            prop_assert_eq!(result.lcs_length(), result_2.lcs_length());
            prop_assert_eq!(result.edit_distance(), result_2.edit_distance());
        }
    }

    #[test]
    fn test_simple_diff() {
        let old = vec!["a", "b", "c"];
        let new = vec!["a", "x", "c"];
        let result = diff(&old, &new);
        assert_eq!(
            result.commands(),
            [
                EditCommand::Keep("a"),
                EditCommand::Insert("x"),
                EditCommand::Delete("b"),
                EditCommand::Keep("c")
            ]
        );
    }

    #[test]
    fn test_completely_different() {
        let old = vec!["a", "b", "c"];
        let new = vec!["x", "y", "z"];
        let result = diff(&old, &new);
        assert_eq!(
            result.commands(),
            [
                EditCommand::Insert("x"),
                EditCommand::Insert("y"),
                EditCommand::Insert("z"),
                EditCommand::Delete("a"),
                EditCommand::Delete("b"),
                EditCommand::Delete("c")
            ]
        );
        assert_eq!(result.lcs_length(), 0);
        assert_eq!(result.edit_distance(), 6);
    }

    #[test]
    fn test_single_element_different() {
        let old = vec!["a"];
        let new = vec!["b"];
        let result = diff(&old, &new);
        assert_eq!(
            result.commands(),
            [EditCommand::Insert("b"), EditCommand::Delete("a")]
        );
    }

    #[test]
    fn test_duplicates() {
        let old = vec!["a", "a", "b"];
        let new = vec!["a", "b", "b"];
        let result = diff(&old, &new);
        assert_eq!(
            result.commands(),
            [
                EditCommand::Keep("a"),
                EditCommand::Insert("b"),
                EditCommand::Delete("a"),
                EditCommand::Keep("b")
            ]
        );
    }

    #[test]
    fn test_insertion_in_middle() {
        let old = vec!["a", "c"];
        let new = vec!["a", "b", "c"];
        let result = diff(&old, &new);
        assert_eq!(
            result.commands(),
            [
                EditCommand::Keep("a"),
                EditCommand::Insert("b"),
                EditCommand::Keep("c")
            ]
        );
    }

    #[test]
    fn test_swap_around_shared_element() {
        let old = vec!["x", "a"];
        let new = vec!["a", "y"];
        let result = diff(&old, &new);
        assert_eq!(
            result.commands(),
            [
                EditCommand::Delete("x"),
                EditCommand::Keep("a"),
                EditCommand::Insert("y")
            ]
        );
    }

    #[test]
    fn test_repeated_collapse() {
        let old = vec!["a", "a", "a"];
        let new = vec!["a"];
        let result = diff(&old, &new);
        assert_eq!(result.edit_distance(), 2);
        assert_eq!(result.lcs_length(), 1);
        assert_eq!(result.iter().filter(|c| c.is_delete()).count(), 2);
    }

    #[test]
    fn test_diff_by_keeps_original_items() {
        let old: Vec<String> = vec!["Hello".into(), "World".into()];
        let new: Vec<String> = vec!["hello".into(), "there".into(), "WORLD".into()];
        let result = diff_by(&old, &new, &LowerCase);
        assert_eq!(
            result.commands(),
            [
                EditCommand::Keep("Hello".to_string()),
                EditCommand::Insert("there".to_string()),
                EditCommand::Keep("World".to_string())
            ]
        );
    }

    #[test]
    fn test_greedy_merge_prefers_longer_side() {
        let old = vec![1, 2, 3];
        let new = vec![4];
        let mut script = EditScript::new();
        let engine = Myers::new(&old, &new, &old, &new);
        engine.merge_greedy(0, 3, 0, 1, &mut script);
        assert_eq!(
            script.commands(),
            [
                EditCommand::Delete(1),
                EditCommand::Delete(2),
                EditCommand::Insert(4),
                EditCommand::Delete(3)
            ]
        );
    }
}
