//! Ordered, indexable composition of slides.
//!
//! Decks are written as a declarative block with [`slides!`](crate::slides),
//! which folds its items into nested [`Concat`] pairs and keeps every slide's
//! concrete type. Decks assembled at runtime use [`SlideListBuilder`] instead.
//! Both produce a [`SlideList`]: a fixed count plus type-erased access by
//! index.
//!
//! ```
//! use rune_slides::{slide, slides, SlideList, StepDeclaration, View};
//!
//! let intro = slide(StepDeclaration::empty(), |_| View::text("Intro", 40.0));
//! let body = slide(StepDeclaration::empty(), |_| View::text("Body", 20.0));
//! let outro = slide(StepDeclaration::empty(), |_| View::text("Thanks", 40.0));
//!
//! let deck = slides![intro, slides![body], outro];
//! assert_eq!(deck.count(), 3);
//! ```

use std::fmt;

use crate::slide::Slide;

/// An ordered, fixed-length collection of slides.
pub trait SlideList {
    fn count(&self) -> usize;

    /// Slide at `index`, or `None` when `index >= count()`.
    fn get(&self, index: usize) -> Option<&dyn Slide>;

    /// Slide at `index`.
    ///
    /// # Panics
    /// Panics if `index >= count()`. Callers are expected to stay in range.
    fn slide_at(&self, index: usize) -> &dyn Slide {
        match self.get(index) {
            Some(slide) => slide,
            None => panic!(
                "slide index {index} out of range for a list of {} slides",
                self.count()
            ),
        }
    }

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<S: Slide> SlideList for S {
    fn count(&self) -> usize {
        1
    }

    fn get(&self, index: usize) -> Option<&dyn Slide> {
        (index == 0).then_some(self as &dyn Slide)
    }
}

/// A list with no slides.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySlides;

impl SlideList for EmptySlides {
    fn count(&self) -> usize {
        0
    }

    fn get(&self, _index: usize) -> Option<&dyn Slide> {
        None
    }
}

/// `first` followed by `second`.
#[derive(Debug, Clone, Default)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A: SlideList, B: SlideList> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: SlideList, B: SlideList> SlideList for Concat<A, B> {
    fn count(&self) -> usize {
        self.first.count() + self.second.count()
    }

    fn get(&self, index: usize) -> Option<&dyn Slide> {
        let split = self.first.count();
        if index < split {
            self.first.get(index)
        } else {
            self.second.get(index - split)
        }
    }
}

/// Compose slides and slide lists into one [`SlideList`], in order.
///
/// `slides![]` is an [`EmptySlides`], a single item is returned as is, and
/// longer blocks nest into [`Concat`] pairs.
#[macro_export]
macro_rules! slides {
    () => {
        $crate::slide_list::EmptySlides
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($head:expr, $($tail:expr),+ $(,)?) => {
        $crate::slide_list::Concat::new($head, $crate::slides![$($tail),+])
    };
}

/// Heterogeneous list assembled at runtime.
#[derive(Default)]
pub struct SlideGroup {
    items: Vec<Box<dyn SlideList>>,
}

impl SlideList for SlideGroup {
    fn count(&self) -> usize {
        self.items.iter().map(|item| item.count()).sum()
    }

    fn get(&self, mut index: usize) -> Option<&dyn Slide> {
        for item in &self.items {
            let count = item.count();
            if index < count {
                return item.get(index);
            }
            index -= count;
        }
        None
    }
}

impl FromIterator<Box<dyn SlideList>> for SlideGroup {
    fn from_iter<I: IntoIterator<Item = Box<dyn SlideList>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for SlideGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideGroup")
            .field("items", &self.items.len())
            .field("count", &self.count())
            .finish()
    }
}

/// Builder for a [`SlideGroup`].
#[derive(Default)]
pub struct SlideListBuilder {
    items: Vec<Box<dyn SlideList>>,
}

impl SlideListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single slide.
    pub fn slide(self, slide: impl Slide + 'static) -> Self {
        self.list(slide)
    }

    /// Append every slide of `list`, in order.
    pub fn list(mut self, list: impl SlideList + 'static) -> Self {
        self.push(list);
        self
    }

    pub fn push(&mut self, list: impl SlideList + 'static) {
        self.items.push(Box::new(list));
    }

    pub fn build(self) -> SlideGroup {
        SlideGroup { items: self.items }
    }
}

impl fmt::Debug for SlideListBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideListBuilder")
            .field("items", &self.items.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NavigationContext;
    use crate::view::{View, ViewKind};

    struct Named(&'static str);

    impl Slide for Named {
        fn content(&self, _cx: &NavigationContext) -> View {
            View::text(self.0, 12.0)
        }
    }

    fn name_at(list: &dyn SlideList, index: usize) -> String {
        match list.slide_at(index).content(&NavigationContext::standalone(0)).kind {
            ViewKind::Text { content, .. } => content,
            other => panic!("unexpected view {other:?}"),
        }
    }

    fn names(list: &dyn SlideList) -> Vec<String> {
        (0..list.count()).map(|i| name_at(list, i)).collect()
    }

    #[test]
    fn test_single_slide_is_a_list_of_one() {
        let s = Named("solo");
        assert_eq!(s.count(), 1);
        assert!(s.get(1).is_none());
        assert_eq!(name_at(&s, 0), "solo");
    }

    #[test]
    fn test_macro_preserves_order() {
        let deck = slides![Named("a"), Named("b"), Named("c"), Named("d")];
        assert_eq!(deck.count(), 4);
        assert_eq!(names(&deck), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_nested_lists_route_transparently() {
        let deck = slides![
            Named("a"),
            slides![Named("b"), slides![Named("c"), Named("d")]],
            slides![],
            Named("e"),
        ];
        assert_eq!(deck.count(), 5);
        assert_eq!(names(&deck), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_concat_is_associative() {
        let left = Concat::new(Concat::new(Named("a"), Named("b")), Named("c"));
        let right = Concat::new(Named("a"), Concat::new(Named("b"), Named("c")));
        assert_eq!(left.count(), right.count());
        assert_eq!(names(&left), names(&right));
    }

    #[test]
    fn test_empty_list() {
        let deck = slides![];
        assert_eq!(deck.count(), 0);
        assert!(deck.is_empty());
        assert!(deck.get(0).is_none());
    }

    #[test]
    #[should_panic(expected = "slide index 0 out of range for a list of 0 slides")]
    fn test_empty_list_slide_at_panics() {
        EmptySlides.slide_at(0);
    }

    #[test]
    #[should_panic(expected = "slide index 3 out of range")]
    fn test_out_of_range_panics() {
        slides![Named("a"), Named("b"), Named("c")].slide_at(3);
    }

    #[test]
    fn test_builder_matches_macro() {
        let built = SlideListBuilder::new()
            .slide(Named("a"))
            .list(slides![Named("b"), Named("c")])
            .list(EmptySlides)
            .slide(Named("d"))
            .build();
        let declared = slides![Named("a"), slides![Named("b"), Named("c")], Named("d")];

        assert_eq!(built.count(), declared.count());
        assert_eq!(names(&built), names(&declared));
        assert!(built.get(4).is_none());
    }

    #[test]
    fn test_group_from_iterator() {
        let group: SlideGroup = ["x", "y"]
            .into_iter()
            .map(|name| Box::new(Named(name)) as Box<dyn SlideList>)
            .collect();
        assert_eq!(names(&group), ["x", "y"]);
    }
}
