use super::edit::{Edit, EditEffect, EditRejected, plan};
use super::key::Key;
use super::mask::{render_hint, render_masked};
use crate::decoder::layout::LINE_LEN;

/// Handle returned by [`InputBuffer::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&InputBuffer)>;

/// Digit buffer behind a masked 48-digit field.
///
/// Only [`InputBuffer::apply`] and [`InputBuffer::clear`] mutate it, so the
/// raw string, masked string and completion flag are always derived from
/// the same digits.
#[derive(Default)]
pub struct InputBuffer {
    digits: String,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl InputBuffer {
    /// Empty buffer with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw digits typed so far
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Number of digits held
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True before the first digit is typed
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True once all 48 digits are present
    pub fn is_complete(&self) -> bool {
        self.digits.len() == LINE_LEN
    }

    /// Display form; see [`render_masked`]
    pub fn masked(&self) -> String {
        render_masked(&self.digits)
    }

    /// Remaining template shown behind the typed digits
    pub fn hint(&self) -> String {
        render_hint(self.digits.len())
    }

    /// Apply one edit event.
    ///
    /// Movement keys are always accepted and never change the digits.
    /// Every mutating edit is planned first (what to remove, what to insert)
    /// and checked against the 48-digit ceiling before anything changes.
    pub fn apply(&mut self, edit: Edit) -> Result<EditEffect, EditRejected> {
        if edit.key.is_movement() {
            return Ok(EditEffect::Moved);
        }
        if !matches!(edit.key, Key::Backspace | Key::Delete) && edit.key.digit().is_none() {
            return Err(EditRejected::DisallowedKey);
        }

        let plan = plan(&edit, self.digits.len())?;
        let new_len = plan.new_len(self.digits.len());
        if new_len > LINE_LEN {
            if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                eprintln!("INPUT: rejected {:?}, length would be {}", edit.key, new_len);
            }
            return Err(EditRejected::Overflow { length: new_len });
        }

        let replacement = plan.insert.map(String::from).unwrap_or_default();
        self.digits.replace_range(plan.remove.clone(), &replacement);
        debug_assert_eq!(self.digits.len(), new_len);

        self.notify();
        Ok(EditEffect::Changed {
            caret: plan.caret_after,
        })
    }

    /// Feed every digit of `text` at the end of the buffer, skipping
    /// anything else. Returns how many digits were accepted.
    pub fn type_str(&mut self, text: &str) -> usize {
        text.chars()
            .filter(char::is_ascii_digit)
            .map(|c| self.apply(Edit::digit(c)))
            .filter(Result::is_ok)
            .count()
    }

    /// Drop every digit. Always succeeds.
    pub fn clear(&mut self) {
        self.digits.clear();
        self.notify();
    }

    /// Register a callback run after every change to the digits
    pub fn subscribe(&mut self, listener: impl FnMut(&InputBuffer) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback; returns false when the id is unknown
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(self);
        }
        self.listeners = listeners;
    }
}

impl std::fmt::Debug for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBuffer")
            .field("digits", &self.digits)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
