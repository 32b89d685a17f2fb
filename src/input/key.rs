/// A key press as seen by the input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character (only `0`-`9` are accepted)
    Char(char),
    /// Delete the digit before the caret
    Backspace,
    /// Delete the digit after the caret
    Delete,
    /// Caret one position left
    Left,
    /// Caret one position right
    Right,
    /// Caret to start
    Home,
    /// Caret to end
    End,
    /// Anything else (Enter, Tab, function keys...)
    Other,
}

impl Key {
    /// Parse a DOM-style key name (`"7"`, `"Backspace"`, `"ArrowLeft"`...)
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    /// Decimal value when this is a digit key
    pub fn digit(&self) -> Option<char> {
        match self {
            Key::Char(c) if c.is_ascii_digit() => Some(*c),
            _ => None,
        }
    }

    /// Caret movement keys never touch the buffer
    pub fn is_movement(&self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Home | Key::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Key::from_name("5"), Key::Char('5'));
        assert_eq!(Key::from_name("a"), Key::Char('a'));
        assert_eq!(Key::from_name("ArrowRight"), Key::Right);
        assert_eq!(Key::from_name("Enter"), Key::Other);
        assert_eq!(Key::from_name(""), Key::Other);
    }

    #[test]
    fn test_digit() {
        assert_eq!(Key::Char('0').digit(), Some('0'));
        assert_eq!(Key::Char('x').digit(), None);
        assert_eq!(Key::Backspace.digit(), None);
    }
}
