use itertools::Itertools;

/// How strictly a recipe's required-item names are checked for repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateCheck {
    /// Any two items with the same name are rejected, wherever they appear.
    #[default]
    Pairwise,
    /// Only consecutive items are compared, so `A, B, A` is accepted.
    Adjacent,
}

impl DuplicateCheck {
    /// Returns the first repeated name found under this mode, if any.
    pub fn find<'a, I>(self, names: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names = names.into_iter();
        match self {
            DuplicateCheck::Pairwise => names.duplicates().next(),
            DuplicateCheck::Adjacent => names
                .tuple_windows()
                .find(|(left, right)| left == right)
                .map(|(left, _)| left),
        }
    }
}
