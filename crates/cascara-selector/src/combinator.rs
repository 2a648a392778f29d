//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."
//!
//! The descendant combinator is whitespace, not punctuation. It has no
//! variant here: a component with an empty combinator list is followed by
//! its successor through the implicit descendant relationship.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// An explicit combinator token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, Serialize,
)]
pub enum Combinator {
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that follows
    /// element A (not necessarily immediately), where A and B share the same
    /// parent."
    #[strum(serialize = "~")]
    FollowingSibling,
}

impl Combinator {
    /// Whether `this` relates a superset of the element pairs `other`
    /// relates, where `None` stands for the descendant combinator.
    ///
    /// - descendant ⊇ child
    /// - `~` ⊇ `+`
    /// - every combinator ⊇ itself
    #[must_use]
    pub fn is_supercombinator(this: Option<Self>, other: Option<Self>) -> bool {
        this == other
            || (this.is_none() && other == Some(Self::Child))
            || (this == Some(Self::FollowingSibling) && other == Some(Self::NextSibling))
    }
}
