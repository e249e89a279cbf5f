//! Page transition kinds.
//!
//! Every page load is started by some transition, and the transition decides
//! what happens once the page arrives: which photo becomes selected and whether
//! the gallery URL is rewritten.
//!
//! | transition | selection after load  | URL rewritten |
//! |------------|-----------------------|---------------|
//! | `Initial`  | unchanged             | no            |
//! | `Load`     | unchanged             | no            |
//! | `Jump`     | unchanged             | yes           |
//! | `Forward`  | first photo           | yes           |
//! | `Backward` | last photo            | yes           |

/// Where the selection lands once a page has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAfterLoad {
    /// Leave the selection as it is; its index is re-derived against the new page.
    Keep,
    /// Select the first photo, or nothing if the page is empty.
    First,
    /// Select the last photo, or nothing if the page is empty.
    Last,
}

/// The reason a page load was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The page named by the URL when the session starts.
    Initial,

    /// A reload of the current page.
    Load,

    /// A page picked by number.
    Jump,

    /// Moving to the following page, from the page buttons or by stepping past
    /// the last photo.
    Forward,

    /// Moving to the preceding page, from the page buttons or by stepping before
    /// the first photo.
    Backward,
}

impl Transition {
    #[must_use]
    pub const fn selection_after_load(self) -> SelectionAfterLoad {
        match self {
            Self::Initial | Self::Load | Self::Jump => SelectionAfterLoad::Keep,
            Self::Forward => SelectionAfterLoad::First,
            Self::Backward => SelectionAfterLoad::Last,
        }
    }

    /// Whether this transition moves between pages one step at a time.
    #[must_use]
    pub const fn is_step(self) -> bool {
        matches!(self, Self::Forward | Self::Backward)
    }

    /// Whether completing this transition rewrites the `page` URL parameter.
    #[must_use]
    pub const fn syncs_url(self) -> bool {
        matches!(self, Self::Jump | Self::Forward | Self::Backward)
    }
}
