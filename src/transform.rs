use std::borrow::Cow;

/// Normalizes elements before they are compared.
///
/// Only the transformed values take part in the comparison; the edit
/// script always carries the untransformed elements. Implementations must
/// be pure: the same input has to produce an equal output every time.
pub trait Transformer<T: Clone> {
    fn transform<'a>(&self, input: &'a T) -> Cow<'a, T>;
}

impl<T: Clone, X: Transformer<T> + ?Sized> Transformer<T> for &X {
    fn transform<'a>(&self, input: &'a T) -> Cow<'a, T> {
        (**self).transform(input)
    }
}

impl<T: Clone, X: Transformer<T> + ?Sized> Transformer<T> for Box<X> {
    fn transform<'a>(&self, input: &'a T) -> Cow<'a, T> {
        (**self).transform(input)
    }
}

/// Compares elements as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Clone> Transformer<T> for Identity {
    fn transform<'a>(&self, input: &'a T) -> Cow<'a, T> {
        Cow::Borrowed(input)
    }
}

/// Case-insensitive comparison of strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowerCase;

impl Transformer<String> for LowerCase {
    fn transform<'a>(&self, input: &'a String) -> Cow<'a, String> {
        let lower = input.to_lowercase();
        if lower == *input {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(lower)
        }
    }
}

/// Wraps a closure as a [`Transformer`].
///
/// # Examples
///
/// ```
/// use editscript::transform::{from_fn, Transformer};
///
/// let trim = from_fn(|s: &String| s.trim().to_string());
/// assert_eq!(trim.transform(&"  a ".to_string()).as_str(), "a");
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    FromFn(f)
}

#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<T: Clone, F: Fn(&T) -> T> Transformer<T> for FromFn<F> {
    fn transform<'a>(&self, input: &'a T) -> Cow<'a, T> {
        Cow::Owned((self.0)(input))
    }
}

/// Applies a list of transformers in the order they were added.
pub struct Chain<'t, T> {
    transformers: Vec<Box<dyn Transformer<T> + 't>>,
}

impl<'t, T: Clone> Default for Chain<'t, T> {
    fn default() -> Self {
        Chain::new()
    }
}

impl<'t, T: Clone> Chain<'t, T> {
    pub fn new() -> Self {
        Chain {
            transformers: Vec::new(),
        }
    }

    pub fn push<X: Transformer<T> + 't>(&mut self, transformer: X) -> &mut Self {
        self.transformers.push(Box::new(transformer));
        self
    }

    pub fn with<X: Transformer<T> + 't>(mut self, transformer: X) -> Self {
        self.push(transformer);
        self
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl<'t, T: Clone> Transformer<T> for Chain<'t, T> {
    fn transform<'a>(&self, input: &'a T) -> Cow<'a, T> {
        let mut current = Cow::Borrowed(input);
        for transformer in &self.transformers {
            current = match current {
                Cow::Borrowed(value) => transformer.transform(value),
                Cow::Owned(value) => Cow::Owned(transformer.transform(&value).into_owned()),
            };
        }
        current
    }
}
