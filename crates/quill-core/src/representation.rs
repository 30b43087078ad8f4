//! Per-operation representation selection.
//!
//! A post is rendered in one of two shapes depending on which operation is
//! being served. The mapping is a static lookup table keyed on the operation
//! kind, resolved once per request before serialization and independent of
//! request payload content. Unmapped operations fall back to the summary
//! shape.

/// The operations served by the post resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    List,
    Retrieve,
    ArchiveDates,
    CommentList,
}

/// The two shapes a post can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostShape {
    /// Abbreviated fields for listings: no body, no tags, no derived markup.
    Summary,
    /// Every field plus `toc` and `body_html` derived from the raw body.
    Detail,
}

const SHAPE_TABLE: &[(PostAction, PostShape)] = &[
    (PostAction::List, PostShape::Summary),
    (PostAction::Retrieve, PostShape::Detail),
];

impl PostShape {
    pub const DEFAULT: PostShape = PostShape::Summary;

    /// Resolve the shape for an operation via the lookup table.
    pub fn for_action(action: PostAction) -> Self {
        SHAPE_TABLE
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, shape)| *shape)
            .unwrap_or(Self::DEFAULT)
    }
}
