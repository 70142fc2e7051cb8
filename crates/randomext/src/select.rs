//! Uniform selection and shuffling.

use randomext_core::error::RandomError;
use randomext_core::rng::UniformSource;

use crate::ranged::RangedRandom;

/// A field-less enum whose constants can be listed in declaration order.
///
/// ```
/// use randomext::Enumeration;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Suit {
///     Clubs,
///     Diamonds,
///     Hearts,
///     Spades,
/// }
///
/// impl Enumeration for Suit {
///     const CONSTANTS: &'static [Self] = &[Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
/// }
/// ```
pub trait Enumeration: Copy + 'static {
    /// Every constant, in declaration order.
    const CONSTANTS: &'static [Self];
}

impl<S: UniformSource> RangedRandom<S> {
    /// Selects an element of `items` at a uniformly drawn index.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyInput` if `items` is empty.
    pub fn select<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RandomError> {
        if items.is_empty() {
            return Err(RandomError::EmptyInput { input: "slice" });
        }
        Ok(&items[self.draw_index(items.len())])
    }

    /// Selects an element of a counted iterable.
    ///
    /// The target index is drawn from the reported length, then the
    /// iterator is walked once in its natural order up to that index.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyInput` if the iterator reports no elements.
    ///
    /// # Panics
    ///
    /// Panics if the iterator ends before the index its reported length
    /// allowed. That is a broken `ExactSizeIterator` implementation, not a
    /// recoverable condition.
    pub fn select_from_iter<I>(&mut self, items: I) -> Result<I::Item, RandomError>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = items.into_iter();
        let len = iter.len();
        if len == 0 {
            return Err(RandomError::EmptyInput { input: "iterator" });
        }
        let target = self.draw_index(len);
        match iter.nth(target) {
            Some(item) => Ok(item),
            None => panic!("iterator reported {len} elements but ended before index {target}"),
        }
    }

    /// Selects a `char` of `text` uniformly.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyInput` if `text` is empty.
    pub fn select_char(&mut self, text: &str) -> Result<char, RandomError> {
        let count = text.chars().count();
        if count == 0 {
            return Err(RandomError::EmptyInput { input: "string" });
        }
        let target = self.draw_index(count);
        match text.chars().nth(target) {
            Some(c) => Ok(c),
            None => unreachable!("index {target} drawn below char count {count}"),
        }
    }

    /// Selects one of `E`'s constants uniformly.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyInput` if `E` declares no constants.
    pub fn select_enum<E: Enumeration>(&mut self) -> Result<E, RandomError> {
        let constants = E::CONSTANTS;
        if constants.is_empty() {
            return Err(RandomError::EmptyInput {
                input: "enumeration",
            });
        }
        Ok(constants[self.draw_index(constants.len())])
    }

    /// Shuffles `items` in place with Fisher-Yates and returns it.
    ///
    /// Walks from the last index down to 1, swapping each position with a
    /// uniform draw from `[0, position]`.
    pub fn shuffle<'a, T>(&mut self, items: &'a mut [T]) -> &'a mut [T] {
        for i in (1..items.len()).rev() {
            let j = self.draw_index(i + 1);
            items.swap(i, j);
        }
        items
    }

    /// Consumes `items` and returns them shuffled.
    #[must_use]
    pub fn shuffled<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        self.shuffle(&mut items);
        items
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use randomext_test_support::{MockSource, SequenceSource};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    impl Enumeration for Color {
        const CONSTANTS: &'static [Self] = &[Self::Red, Self::Green, Self::Blue];
    }

    #[derive(Debug, Clone, Copy)]
    enum Never {}

    impl Enumeration for Never {
        const CONSTANTS: &'static [Self] = &[];
    }

    /// An iterator that claims more elements than it yields.
    struct Liar(std::vec::IntoIter<u8>);

    impl Iterator for Liar {
        type Item = u8;

        fn next(&mut self) -> Option<u8> {
            self.0.next()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (10, Some(10))
        }
    }

    impl ExactSizeIterator for Liar {}

    fn scripted(ints: Vec<u64>) -> RangedRandom<SequenceSource> {
        RangedRandom::from_source(SequenceSource::new(ints))
    }

    // --- select ---

    #[test]
    fn test_select_returns_element_at_drawn_index() {
        let mut rng = scripted(vec![2, 0]);
        let items = ["a", "b", "c"];
        assert_eq!(*rng.select(&items).unwrap(), "c");
        assert_eq!(*rng.select(&items).unwrap(), "a");
    }

    #[test]
    fn test_select_behaves_the_same_for_every_element_type() {
        let mut rng = scripted(vec![1, 1, 1, 1]);
        assert!(*rng.select(&[false, true]).unwrap());
        assert_eq!(*rng.select(&[1.5_f32, 2.5]).unwrap(), 2.5);
        assert_eq!(*rng.select(&['x', 'y']).unwrap(), 'y');
        assert_eq!(rng.select(&[String::from("p"), String::from("q")]).unwrap(), "q");
    }

    #[test]
    fn test_select_empty_slice_returns_error_without_drawing() {
        let mut rng = scripted(vec![]);
        let empty: [u32; 0] = [];

        let result = rng.select(&empty);

        assert_eq!(result, Err(RandomError::EmptyInput { input: "slice" }));
        assert_eq!(rng.source().draws(), 0);
    }

    #[test]
    fn test_select_single_element() {
        let mut rng = RangedRandom::with_seed(1);
        for _ in 0..10 {
            assert_eq!(*rng.select(&[42]).unwrap(), 42);
        }
    }

    // --- select_from_iter ---

    #[test]
    fn test_select_from_iter_walks_in_natural_order() {
        let mut rng = scripted(vec![3]);
        let set: BTreeSet<u32> = [40, 10, 30, 20].into_iter().collect();
        assert_eq!(rng.select_from_iter(&set).unwrap(), &40);
    }

    #[test]
    fn test_select_from_iter_yields_owned_items() {
        let mut rng = scripted(vec![1]);
        let picked = rng
            .select_from_iter(vec![String::from("left"), String::from("right")])
            .unwrap();
        assert_eq!(picked, "right");
    }

    #[test]
    fn test_select_from_iter_empty_returns_error() {
        let mut rng = scripted(vec![]);
        let result = rng.select_from_iter(Vec::<u8>::new());
        assert_eq!(result, Err(RandomError::EmptyInput { input: "iterator" }));
    }

    #[test]
    #[should_panic(expected = "iterator reported 10 elements")]
    fn test_select_from_iter_panics_when_length_lies() {
        let mut rng = scripted(vec![9]);
        let _ = rng.select_from_iter(Liar(vec![1, 2, 3].into_iter()));
    }

    // --- select_char ---

    #[test]
    fn test_select_char_counts_chars_not_bytes() {
        let mut rng = scripted(vec![1, 2]);
        assert_eq!(rng.select_char("añb").unwrap(), 'ñ');
        assert_eq!(rng.select_char("añb").unwrap(), 'b');
    }

    #[test]
    fn test_select_char_empty_returns_error() {
        let mut rng = scripted(vec![]);
        assert_eq!(
            rng.select_char(""),
            Err(RandomError::EmptyInput { input: "string" })
        );
    }

    // --- select_enum ---

    #[test]
    fn test_select_enum_follows_declaration_order() {
        let mut rng = scripted(vec![0, 1, 2]);
        assert_eq!(rng.select_enum::<Color>().unwrap(), Color::Red);
        assert_eq!(rng.select_enum::<Color>().unwrap(), Color::Green);
        assert_eq!(rng.select_enum::<Color>().unwrap(), Color::Blue);
    }

    #[test]
    fn test_select_enum_is_roughly_uniform() {
        let mut rng = RangedRandom::with_seed(77);
        let mut counts: HashMap<Color, u32> = HashMap::new();
        for _ in 0..30_000 {
            *counts.entry(rng.select_enum::<Color>().unwrap()).or_default() += 1;
        }
        assert_eq!(counts.len(), 3);
        for (color, count) in counts {
            assert!((9_000..11_000).contains(&count), "{color:?} drawn {count} times");
        }
    }

    #[test]
    fn test_select_enum_without_constants_returns_error() {
        let mut rng = scripted(vec![]);
        let result = rng.select_enum::<Never>();
        assert!(matches!(
            result,
            Err(RandomError::EmptyInput {
                input: "enumeration"
            })
        ));
    }

    // --- shuffle ---

    #[test]
    fn test_shuffle_matches_canonical_fisher_yates() {
        // Draws for i = 3, 2, 1 are j = 0, 2, 0.
        let mut rng = scripted(vec![0, 2, 0]);
        let mut items = [1, 2, 3, 4];
        rng.shuffle(&mut items);
        // i=3 swap 0: [4,2,3,1]; i=2 swap 2: same; i=1 swap 0: [2,4,3,1]
        assert_eq!(items, [2, 4, 3, 1]);
        assert_eq!(rng.source().draws(), 3);
    }

    #[test]
    fn test_shuffle_draws_from_inclusive_position_bound() {
        // Scripted values wrap modulo i + 1, so 3 keeps position 3 in place.
        let mut rng = scripted(vec![3, 2, 1]);
        let mut items = ['a', 'b', 'c', 'd'];
        rng.shuffle(&mut items);
        assert_eq!(items, ['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_shuffle_empty_and_single_draw_nothing() {
        let mut rng = scripted(vec![]);
        let mut empty: [u8; 0] = [];
        let mut single = [9];
        assert!(rng.shuffle(&mut empty).is_empty());
        assert_eq!(rng.shuffle(&mut single), &[9]);
        assert_eq!(rng.source().draws(), 0);
    }

    #[test]
    fn test_shuffle_returns_same_slice_for_chaining() {
        let mut rng = RangedRandom::from_source(MockSource);
        let mut items = vec![1, 2, 3];
        let first = rng.shuffle(&mut items)[0];
        assert_eq!(first, 2);
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut rng = RangedRandom::with_seed(5);
        for len in 0..20 {
            let original: Vec<u32> = (0..len).map(|i| i % 4).collect();
            let mut items = original.clone();
            rng.shuffle(&mut items);

            let mut sorted_original = original.clone();
            let mut sorted_items = items.clone();
            sorted_original.sort_unstable();
            sorted_items.sort_unstable();
            assert_eq!(sorted_original, sorted_items);
        }
    }

    #[test]
    fn test_shuffle_covers_every_permutation_of_three() {
        let mut rng = RangedRandom::with_seed(99);
        let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
        for _ in 0..6_000 {
            let mut items = [0, 1, 2];
            rng.shuffle(&mut items);
            *counts.entry(items).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            assert!((800..1_200).contains(&count), "{perm:?} seen {count} times");
        }
    }

    #[test]
    fn test_shuffled_consumes_and_returns_vec() {
        let mut rng = RangedRandom::from_source(MockSource);
        assert_eq!(rng.shuffled(vec![1, 2, 3]), vec![2, 3, 1]);
    }
}
