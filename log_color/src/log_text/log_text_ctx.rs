// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Color, InlineString};
use serde::{Deserialize, Serialize};

/// A tree of styled text, one per log line.
///
/// - [`LogTextCtx::Leaf`] holds literal text and an optional own [`Color`].
/// - [`LogTextCtx::Branch`] holds an ordered list of children and no text.
///
/// Appending to a leaf with [`LogTextCtx::then`] demotes it into a branch whose first
/// child is the old leaf. A leaf with empty text renders to nothing, in both the
/// colorized and the raw output.
///
/// ```
/// use r3bl_log_color::{BasicCode, Color, LogTextCtx, fg_green};
///
/// let line = LogTextCtx::colored("[", Color::basic(BasicCode::FG_DARK_GRAY))
///     .then([fg_green("INFO"), LogTextCtx::from_text("] started")]);
/// assert_eq!(line.children().len(), 3);
/// assert_eq!(line.to_raw_string(), "[INFO] started");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LogTextCtx {
    Leaf {
        text: InlineString,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
    Branch {
        children: Vec<LogTextCtx>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
}

impl Default for LogTextCtx {
    fn default() -> Self {
        Self::Leaf {
            text: InlineString::new(),
            color: None,
        }
    }
}

mod construct_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl LogTextCtx {
        /// Empty uncolored leaf.
        #[must_use]
        pub fn new() -> Self { Self::default() }

        #[must_use]
        pub fn from_text(text: impl AsRef<str>) -> Self {
            Self::Leaf {
                text: text.as_ref().into(),
                color: None,
            }
        }

        #[must_use]
        pub fn colored(text: impl AsRef<str>, color: impl Into<Color>) -> Self {
            Self::Leaf {
                text: text.as_ref().into(),
                color: Some(color.into()),
            }
        }
    }

    impl From<&str> for LogTextCtx {
        fn from(text: &str) -> Self { Self::from_text(text) }
    }

    impl From<String> for LogTextCtx {
        fn from(text: String) -> Self { Self::from_text(text) }
    }
}

mod access_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl LogTextCtx {
        #[must_use]
        pub fn color(&self) -> Option<Color> {
            match self {
                Self::Leaf { color, .. } | Self::Branch { color, .. } => *color,
            }
        }

        /// [`None`] for a branch.
        #[must_use]
        pub fn text(&self) -> Option<&str> {
            match self {
                Self::Leaf { text, .. } => Some(text.as_str()),
                Self::Branch { .. } => None,
            }
        }

        /// Empty for a leaf.
        #[must_use]
        pub fn children(&self) -> &[LogTextCtx] {
            match self {
                Self::Leaf { .. } => &[],
                Self::Branch { children, .. } => children,
            }
        }

        #[must_use]
        pub fn is_leaf(&self) -> bool { matches!(self, Self::Leaf { .. }) }

        /// Whether the tree renders to zero bytes, ie: every leaf has empty text.
        #[must_use]
        pub fn is_blank(&self) -> bool {
            match self {
                Self::Leaf { text, .. } => text.is_empty(),
                Self::Branch { children, .. } => children.iter().all(Self::is_blank),
            }
        }
    }
}

mod build_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl LogTextCtx {
        /// On a leaf (or a branch without children) sets the text. On a branch with
        /// children appends a new uncolored leaf.
        #[must_use]
        pub fn with_text(self, arg_text: impl AsRef<str>) -> Self {
            match self {
                Self::Leaf { color, .. } => Self::Leaf {
                    text: arg_text.as_ref().into(),
                    color,
                },
                Self::Branch { children, color } if children.is_empty() => Self::Leaf {
                    text: arg_text.as_ref().into(),
                    color,
                },
                Self::Branch {
                    mut children,
                    color,
                } => {
                    children.push(Self::from_text(arg_text));
                    Self::Branch { children, color }
                }
            }
        }

        /// Replaces the node's own color.
        #[must_use]
        pub fn with_color(self, arg_color: impl Into<Color>) -> Self {
            self.set_color(Some(arg_color.into()))
        }

        #[must_use]
        pub fn without_color(self) -> Self { self.set_color(None) }

        fn set_color(mut self, new_color: Option<Color>) -> Self {
            match &mut self {
                Self::Leaf { color, .. } | Self::Branch { color, .. } => *color = new_color,
            }
            self
        }

        /// Replaces the children, turning a leaf into a branch. A leaf's text is
        /// dropped, its color is kept.
        #[must_use]
        pub fn with_children(self, children: impl IntoIterator<Item = LogTextCtx>) -> Self {
            Self::Branch {
                children: children.into_iter().collect(),
                color: self.color(),
            }
        }

        /// Appends `others` as children.
        ///
        /// A leaf with text is demoted first: its text and color move into a new first
        /// child and the branch itself is left uncolored. A leaf without text keeps its
        /// color on the branch.
        #[must_use]
        pub fn then(mut self, others: impl IntoIterator<Item = LogTextCtx>) -> Self {
            self.append(others);
            self
        }

        /// Same as [`LogTextCtx::then`].
        #[must_use]
        pub fn and(self, others: impl IntoIterator<Item = LogTextCtx>) -> Self {
            self.then(others)
        }

        /// In place version of [`LogTextCtx::then`].
        pub fn append(&mut self, others: impl IntoIterator<Item = LogTextCtx>) {
            if let Self::Leaf { text, color } = self {
                let demoted = if text.is_empty() {
                    Self::Branch {
                        children: Vec::new(),
                        color: *color,
                    }
                } else {
                    let first_child = Self::Leaf {
                        text: std::mem::take(text),
                        color: color.take(),
                    };
                    Self::Branch {
                        children: vec![first_child],
                        color: None,
                    }
                };
                *self = demoted;
            }

            if let Self::Branch { children, .. } = self {
                children.extend(others);
            }
        }
    }
}
