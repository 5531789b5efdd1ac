mod expand;

use crate::myers;
use crate::options::{Algorithm, CompareOptions};
use crate::script::EditScript;
use crate::transform::Transformer;
use expand::Expander;
use log::debug;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// All elements that compare equal after transformation. `index` is only
/// assigned when the value occurs in both sequences.
#[derive(Debug, Default)]
struct EquivalenceClass {
    count1: usize,
    count2: usize,
    index: Option<usize>,
}

/// Which of the compared sequences to reduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Old,
    New,
}

/// Per-call table of equivalence classes. Elements refer to their class by
/// position in `classes`.
struct Classes {
    classes: Vec<EquivalenceClass>,
    of1: Vec<usize>,
    of2: Vec<usize>,
    shared1: usize,
    shared2: usize,
}

impl Classes {
    fn build<K: Eq + Hash>(keys1: &[K], keys2: &[K]) -> Self {
        let mut lookup: FxHashMap<&K, usize> = FxHashMap::default();
        let mut classes: Vec<EquivalenceClass> = Vec::new();

        let mut class_of = |key| {
            *lookup.entry(key).or_insert_with(|| {
                classes.push(EquivalenceClass::default());
                classes.len() - 1
            })
        };
        let of1: Vec<usize> = keys1.iter().map(&mut class_of).collect();
        let of2: Vec<usize> = keys2.iter().map(&mut class_of).collect();

        for &class in &of1 {
            classes[class].count1 += 1;
        }
        for &class in &of2 {
            classes[class].count2 += 1;
        }

        let (mut shared1, mut shared2, mut next) = (0, 0, 0);
        for class in classes.iter_mut().filter(|c| c.count1 > 0 && c.count2 > 0) {
            class.index = Some(next);
            next += 1;
            shared1 += class.count1;
            shared2 += class.count2;
        }

        Classes {
            classes,
            of1,
            of2,
            shared1,
            shared2,
        }
    }

    /// Indices of shared classes and the original positions they came from.
    fn reduce(&self, side: Side) -> (Vec<usize>, Vec<usize>) {
        let (of, capacity) = match side {
            Side::Old => (&self.of1, self.shared1),
            Side::New => (&self.of2, self.shared2),
        };
        let mut reduced = Vec::with_capacity(capacity);
        let mut positions = Vec::with_capacity(capacity);
        for (position, &class) in of.iter().enumerate() {
            if let Some(index) = self.classes[class].index {
                reduced.push(index);
                positions.push(position);
            }
        }
        (reduced, positions)
    }
}

/// Computes the shortest edit script between `old` and `new`, comparing the
/// elements after `transformer`.
///
/// Elements occurring in only one of the sequences cannot be part of the
/// common subsequence. Unless too many elements are shared, they are
/// dropped before running the engine on a dense integer alphabet, and put
/// back as plain deletes and inserts afterwards.
///
/// # Examples
///
/// ```
/// use editscript::{compare, EditCommand, Identity};
///
/// let old = vec!["GA", "ZO", "MEU", "BU"];
/// let new = vec!["GA", "BU", "ZO"];
/// let script = compare(&old, &new, &Identity);
/// assert_eq!(script.commands()[0], EditCommand::Keep("GA"));
/// assert_eq!(script.edit_distance(), 3);
/// ```
pub fn compare<T, X>(old: &[T], new: &[T], transformer: &X) -> EditScript<T>
where
    T: Eq + Hash + Clone,
    X: Transformer<T> + ?Sized,
{
    compare_with(old, new, transformer, &CompareOptions::default())
}

/// [`compare`] with explicit [`CompareOptions`].
pub fn compare_with<T, X>(
    old: &[T],
    new: &[T],
    transformer: &X,
    options: &CompareOptions,
) -> EditScript<T>
where
    T: Eq + Hash + Clone,
    X: Transformer<T> + ?Sized,
{
    let keys1: Vec<_> = old.iter().map(|e| transformer.transform(e)).collect();
    let keys2: Vec<_> = new.iter().map(|e| transformer.transform(e)).collect();

    if options.algorithm == Algorithm::Myers {
        return myers::diff_keys(&keys1, &keys2, old, new);
    }

    let classes = Classes::build(&keys1, &keys2);
    let shared = classes.shared1 + classes.shared2;
    if !options.reduces(shared, old.len()) {
        debug!(
            "skipping reduction: {shared} shared elements for {} original elements",
            old.len()
        );
        return myers::diff_keys(&keys1, &keys2, old, new);
    }

    let (reduced1, positions1) = classes.reduce(Side::Old);
    let (reduced2, positions2) = classes.reduce(Side::New);
    debug!(
        "reduced {}x{} elements to {}x{}",
        old.len(),
        new.len(),
        reduced1.len(),
        reduced2.len()
    );

    let script = myers::diff(&reduced1, &reduced2);
    let mut expander = Expander::new(old, new, &positions1, &positions2);
    script.visit(&mut expander);
    expander.into_script()
}
