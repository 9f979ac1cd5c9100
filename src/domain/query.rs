use crate::config::PagesConfig;
use crate::domain::{PageKind, Status};

/// Field the fetched pages are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    MenuOrder,
    Title,
    Date,
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Description of a child-page fetch, handed to a [`PageSource`].
///
/// Built from a resolved configuration and passed through the `query` hook
/// chain before execution; a hook may replace it wholesale and the source
/// receives exactly the chain's result.
///
/// [`PageSource`]: crate::platform::PageSource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub parent: i64,
    pub status: Status,
    pub kind: PageKind,
    pub order_by: OrderBy,
    pub order: SortOrder,
    /// `false` means unbounded: every matching child is fetched.
    pub paginate: bool,
}

impl Query {
    /// Query for the published child pages of `config.id`, in menu order.
    pub fn children_of(config: &PagesConfig) -> Self {
        Self {
            parent: config.id,
            status: Status::Published,
            kind: PageKind::Page,
            order_by: OrderBy::MenuOrder,
            order: SortOrder::Asc,
            paginate: false,
        }
    }
}
