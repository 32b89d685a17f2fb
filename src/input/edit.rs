use std::ops::Range;

use thiserror::Error;

use super::key::Key;

/// One edit event plus the caret/selection reported by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Key that produced the edit
    pub key: Key,
    /// `None` means "caret at end of buffer"
    pub selection: Option<Range<usize>>,
}

impl Edit {
    /// Edit with the caret at the end of the buffer
    pub fn key(key: Key) -> Self {
        Self {
            key,
            selection: None,
        }
    }

    /// Digit key shortcut
    pub fn digit(d: char) -> Self {
        Self::key(Key::Char(d))
    }

    /// Collapsed caret at `caret`
    pub fn at(mut self, caret: usize) -> Self {
        self.selection = Some(caret..caret);
        self
    }

    /// Replace `range` instead of acting at a caret
    pub fn selecting(mut self, range: Range<usize>) -> Self {
        self.selection = Some(range);
        self
    }
}

/// What an accepted edit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEffect {
    /// Caret movement; buffer untouched
    Moved,
    /// Buffer changed; new caret position in digits
    Changed {
        /// Caret after the edit, counted in digits
        caret: usize,
    },
}

/// Why an edit was refused. The buffer is never modified in these cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditRejected {
    /// Neither a digit, Backspace, Delete nor a movement key
    #[error("key is not accepted by a numeric field")]
    DisallowedKey,
    /// Backspace with the caret at position 0
    #[error("backspace at start of field")]
    AtStart,
    /// Delete with the caret after the last digit
    #[error("delete at end of field")]
    AtEnd,
    /// Accepting the edit would exceed 48 digits
    #[error("edit would grow the field to {length} digits")]
    Overflow {
        /// Length the buffer would have had
        length: usize,
    },
    /// Caret or selection points past the buffer
    #[error("caret or selection outside the buffer")]
    OutOfRange,
}

/// Removal/insertion counts computed before anything is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EditPlan {
    pub remove: Range<usize>,
    pub insert: Option<char>,
    pub caret_after: usize,
}

impl EditPlan {
    pub fn new_len(&self, current: usize) -> usize {
        current - self.remove.len() + usize::from(self.insert.is_some())
    }
}

/// Resolve a mutating edit against a buffer of `len` digits.
pub(crate) fn plan(edit: &Edit, len: usize) -> Result<EditPlan, EditRejected> {
    let selection = edit.selection.clone().unwrap_or(len..len);
    if selection.start > selection.end || selection.end > len {
        return Err(EditRejected::OutOfRange);
    }
    let caret = selection.start;
    let selected = !selection.is_empty();

    match edit.key {
        Key::Backspace => {
            if caret == 0 {
                return Err(EditRejected::AtStart);
            }
            let remove = if selected {
                selection
            } else {
                caret - 1..caret
            };
            let caret_after = remove.start;
            Ok(EditPlan {
                remove,
                insert: None,
                caret_after,
            })
        }
        Key::Delete => {
            if caret == len {
                return Err(EditRejected::AtEnd);
            }
            let remove = if selected { selection } else { caret..caret + 1 };
            Ok(EditPlan {
                remove,
                insert: None,
                caret_after: caret,
            })
        }
        key => {
            let d = key.digit().ok_or(EditRejected::DisallowedKey)?;
            Ok(EditPlan {
                remove: selection,
                insert: Some(d),
                caret_after: caret + 1,
            })
        }
    }
}
