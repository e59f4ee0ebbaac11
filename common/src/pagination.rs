//! Cursor-based pagination over an in-memory list of records.
//!
//! Records are provided in ascending (oldest first) order and are paginated in
//! the reverse one, so the first [`Page`] always starts with the most recent
//! record.

/// Record whose position in a list may be identified by a cursor.
pub trait Cursored {
    /// Type of the cursor.
    type Cursor: PartialEq;

    /// Returns the cursor of this record, if it has any.
    ///
    /// Records without a cursor can be paginated, but can never be paginated
    /// `after`.
    fn cursor(&self) -> Option<&Self::Cursor>;
}

/// Pagination arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Arguments<C> {
    /// Maximum number of records in a [`Page`].
    pub page_size: usize,

    /// Cursor of the record after which a [`Page`] starts.
    pub after: Option<C>,
}

impl<C> Arguments<C> {
    /// Number of records in a [`Page`] when none is requested explicitly.
    pub const DEFAULT_PAGE_SIZE: usize = 20;

    /// Creates new [`Arguments`].
    ///
    /// [`None`] is returned if the provided `page_size` doesn't fit into
    /// [`usize`] (e.g. is negative).
    pub fn new<Num>(page_size: Option<Num>, after: Option<C>) -> Option<Self>
    where
        Num: TryInto<usize>,
    {
        let page_size = match page_size {
            Some(size) => size.try_into().ok()?,
            None => Self::DEFAULT_PAGE_SIZE,
        };
        Some(Self { page_size, after })
    }
}

impl<C> Default for Arguments<C> {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            after: None,
        }
    }
}

/// Page of `N`odes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<N, C> {
    /// Nodes of this [`Page`], most recent first.
    pub nodes: Vec<N>,

    /// Cursor of the last node in this [`Page`], if any.
    pub cursor: Option<C>,

    /// Indicator whether there are more nodes after this [`Page`].
    pub has_more: bool,
}

impl<N, C> Page<N, C> {
    /// Creates an empty [`Page`] having nothing after it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            cursor: None,
            has_more: false,
        }
    }
}

/// Selects a [`Page`] out of the provided `nodes`.
///
/// `nodes` are expected in ascending order, while the [`Page`] is formed in
/// the descending one, starting right after the node with the
/// [`Arguments::after`] cursor. If no node has that cursor, the [`Page`] starts
/// from the most recent node, as if no cursor was provided at all.
pub fn paginate<N>(
    nodes: impl IntoIterator<Item = N>,
    args: &Arguments<N::Cursor>,
) -> Page<N, N::Cursor>
where
    N: Cursored,
    N::Cursor: Clone,
{
    let mut nodes = nodes.into_iter().collect::<Vec<_>>();
    nodes.reverse();
    let total = nodes.len();

    let start = args
        .after
        .as_ref()
        .and_then(|after| nodes.iter().position(|n| n.cursor() == Some(after)))
        .map_or(0, |at| at + 1);

    let nodes = nodes
        .into_iter()
        .skip(start)
        .take(args.page_size)
        .collect::<Vec<_>>();
    if nodes.is_empty() {
        return Page::empty();
    }

    Page {
        cursor: nodes.last().and_then(Cursored::cursor).cloned(),
        has_more: start.saturating_add(args.page_size) < total,
        nodes,
    }
}

/// Defines pagination types for a list of the provided node.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($node:ty) => {
        #[doc = "Cursor pointing to a node in a list."]
        pub type Cursor = <$node as $crate::pagination::Cursored>::Cursor;

        #[doc = "Arguments for selecting a [`Page`]."]
        pub type Arguments = $crate::pagination::Arguments<Cursor>;

        #[doc = "A page of nodes."]
        pub type Page = $crate::pagination::Page<$node, Cursor>;
    };
}

#[cfg(test)]
mod spec {
    use super::{paginate, Arguments, Cursored, Page};

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    struct Record {
        id: u32,
        cursor: Option<&'static str>,
    }

    impl Cursored for Record {
        type Cursor = &'static str;

        fn cursor(&self) -> Option<&Self::Cursor> {
            self.cursor.as_ref()
        }
    }

    fn rec(id: u32, cursor: &'static str) -> Record {
        Record {
            id,
            cursor: Some(cursor),
        }
    }

    fn bare(id: u32) -> Record {
        Record { id, cursor: None }
    }

    fn args(
        page_size: usize,
        after: Option<&'static str>,
    ) -> Arguments<&'static str> {
        Arguments { page_size, after }
    }

    #[test]
    fn returns_most_recent_first() {
        let page = paginate([rec(999, "foo")], &Arguments::default());

        assert_eq!(
            page,
            Page {
                nodes: vec![rec(999, "foo")],
                cursor: Some("foo"),
                has_more: false,
            },
        );
    }

    #[test]
    fn respects_page_size() {
        let page = paginate([rec(1, "foo"), rec(999, "bar")], &args(1, None));

        assert_eq!(
            page,
            Page {
                nodes: vec![rec(999, "bar")],
                cursor: Some("bar"),
                has_more: true,
            },
        );
    }

    #[test]
    fn zero_page_size_is_empty() {
        let records = [rec(1, "a"), rec(999, "b")];

        assert_eq!(paginate(records, &args(0, None)), Page::empty());
        assert_eq!(paginate(records, &args(0, Some("b"))), Page::empty());
        assert_eq!(paginate(records, &args(0, Some("zzz"))), Page::empty());
    }

    #[test]
    fn empty_records_are_empty() {
        assert_eq!(paginate::<Record>([], &args(20, None)), Page::empty());
        assert_eq!(paginate::<Record>([], &args(20, Some("a"))), Page::empty());
        assert_eq!(paginate::<Record>([], &args(0, None)), Page::empty());
    }

    #[test]
    fn respects_cursor() {
        let page =
            paginate([rec(1, "a"), rec(999, "b")], &args(20, Some("b")));

        assert_eq!(
            page,
            Page {
                nodes: vec![rec(1, "a")],
                cursor: Some("a"),
                has_more: false,
            },
        );
    }

    #[test]
    fn falls_back_to_start_when_cursor_not_found() {
        let page = paginate([bare(1), bare(999)], &args(20, Some("a")));

        assert_eq!(
            page,
            Page {
                nodes: vec![bare(999), bare(1)],
                cursor: None,
                has_more: false,
            },
        );
    }

    #[test]
    fn does_not_overflow_when_cursor_at_end() {
        let page =
            paginate([rec(1, "a"), rec(999, "b")], &args(20, Some("a")));

        assert_eq!(page, Page::empty());
    }

    #[test]
    fn respects_both_page_size_and_cursor() {
        let page = paginate(
            [rec(1, "a"), rec(999, "b"), rec(123, "c")],
            &args(1, Some("c")),
        );

        assert_eq!(
            page,
            Page {
                nodes: vec![rec(999, "b")],
                cursor: Some("b"),
                has_more: true,
            },
        );
    }

    #[test]
    fn skips_records_without_cursor_when_searching() {
        let page = paginate(
            [rec(1, "a"), bare(2), rec(3, "c")],
            &args(1, Some("c")),
        );

        assert_eq!(
            page,
            Page {
                nodes: vec![bare(2)],
                cursor: None,
                has_more: true,
            },
        );
    }

    #[test]
    fn pages_are_contiguous_reversed_slices() {
        let cursors = ["a", "b", "c", "d", "e"];
        let records = cursors
            .iter()
            .copied()
            .zip(1..)
            .map(|(c, id)| rec(id, c))
            .collect::<Vec<_>>();
        let reversed = records.iter().rev().copied().collect::<Vec<_>>();

        let afters = cursors
            .iter()
            .copied()
            .map(Some)
            .chain([None, Some("missing")]);
        for after in afters {
            for page_size in 0..=7 {
                let page = paginate(records.clone(), &args(page_size, after));

                assert!(page.nodes.len() <= page_size);

                let start = after
                    .and_then(|a| reversed.iter().position(|r| r.cursor == Some(a)))
                    .map_or(0, |at| at + 1);
                let end = (start + page_size).min(reversed.len());
                let expected = reversed.get(start..end).unwrap_or_default();
                assert_eq!(page.nodes, expected, "{after:?} {page_size}");

                assert_eq!(
                    page.has_more,
                    !page.nodes.is_empty() && end < reversed.len(),
                    "{after:?} {page_size}",
                );
                assert_eq!(
                    page.cursor,
                    page.nodes.last().and_then(|r| r.cursor),
                    "{after:?} {page_size}",
                );
            }
        }
    }

    #[test]
    fn arguments_reject_negative_page_size() {
        assert_eq!(Arguments::<()>::new(Some(-1), None), None);
        assert_eq!(
            Arguments::<()>::new(None::<i32>, None),
            Some(Arguments {
                page_size: 20,
                after: None,
            }),
        );
        assert_eq!(
            Arguments::new(Some(0), Some("a")),
            Some(args(0, Some("a"))),
        );
    }
}
