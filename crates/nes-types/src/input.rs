//! Platform-agnostic keyboard types.
//!
//! Hosts map their native key events to [`Key`]. Numeric codes follow the
//! GLFW/raylib numbering so that `get_keycode` reports the same values a
//! raylib-based host sees.

/// A keyboard key as seen by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key (letters, digits, punctuation, space).
    Char(char),
    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    Right,
    Left,
    Down,
    Up,
    PageUp,
    PageDown,
    Home,
    End,
    /// Function key `F1`..`F12`.
    F(u8),
    LeftShift,
    LeftControl,
    LeftAlt,
    RightShift,
    RightControl,
    RightAlt,
}

/// Modifier state sampled from raw key-down queries each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
}

impl Key {
    /// The grave/backtick key, the default console toggle.
    pub const GRAVE: Key = Key::Char('`');
    pub const SPACE: Key = Key::Char(' ');

    /// Numeric key code. Letters report their upper-case ASCII code.
    pub fn code(self) -> u32 {
        match self {
            Key::Char(c) if c.is_ascii_lowercase() => c.to_ascii_uppercase() as u32,
            Key::F(n) => special_code(Key::F(n.clamp(1, 12))),
            other => special_code(other),
        }
    }

    /// Resolve a key by name (`"a"`, `"space"`, `"left_shift"`, `"f5"`),
    /// ignoring case. Single characters resolve to themselves.
    pub fn from_name(name: &str) -> Option<Key> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c.to_ascii_lowercase()));
        }
        if let Some(n) = name
            .strip_prefix(['f', 'F'])
            .and_then(|rest| rest.parse::<u8>().ok())
            && (1..=12).contains(&n)
        {
            return Some(Key::F(n));
        }
        NAMED_KEYS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, k)| k)
    }

    /// Shift, control, and alt keys on either side.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Key::LeftShift
                | Key::RightShift
                | Key::LeftControl
                | Key::RightControl
                | Key::LeftAlt
                | Key::RightAlt
        )
    }
}

fn special_code(key: Key) -> u32 {
    match key {
        Key::Escape => 256,
        Key::Enter => 257,
        Key::Tab => 258,
        Key::Backspace => 259,
        Key::Insert => 260,
        Key::Delete => 261,
        Key::Right => 262,
        Key::Left => 263,
        Key::Down => 264,
        Key::Up => 265,
        Key::PageUp => 266,
        Key::PageDown => 267,
        Key::Home => 268,
        Key::End => 269,
        Key::LeftShift => 340,
        Key::LeftControl => 341,
        Key::LeftAlt => 342,
        Key::RightShift => 344,
        Key::RightControl => 345,
        Key::RightAlt => 346,
        Key::Char(c) => c as u32,
        Key::F(n) => 289 + u32::from(n),
    }
}

const NAMED_KEYS: &[(&str, Key)] = &[
    ("space", Key::Char(' ')),
    ("apostrophe", Key::Char('\'')),
    ("comma", Key::Char(',')),
    ("minus", Key::Char('-')),
    ("period", Key::Char('.')),
    ("slash", Key::Char('/')),
    ("zero", Key::Char('0')),
    ("one", Key::Char('1')),
    ("two", Key::Char('2')),
    ("three", Key::Char('3')),
    ("four", Key::Char('4')),
    ("five", Key::Char('5')),
    ("six", Key::Char('6')),
    ("seven", Key::Char('7')),
    ("eight", Key::Char('8')),
    ("nine", Key::Char('9')),
    ("semicolon", Key::Char(';')),
    ("equal", Key::Char('=')),
    ("left_bracket", Key::Char('[')),
    ("backslash", Key::Char('\\')),
    ("right_bracket", Key::Char(']')),
    ("grave", Key::GRAVE),
    ("escape", Key::Escape),
    ("enter", Key::Enter),
    ("tab", Key::Tab),
    ("backspace", Key::Backspace),
    ("insert", Key::Insert),
    ("delete", Key::Delete),
    ("right", Key::Right),
    ("left", Key::Left),
    ("down", Key::Down),
    ("up", Key::Up),
    ("page_up", Key::PageUp),
    ("page_down", Key::PageDown),
    ("home", Key::Home),
    ("end", Key::End),
    ("left_shift", Key::LeftShift),
    ("left_control", Key::LeftControl),
    ("left_alt", Key::LeftAlt),
    ("right_shift", Key::RightShift),
    ("right_control", Key::RightControl),
    ("right_alt", Key::RightAlt),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_codes_are_uppercase_ascii() {
        assert_eq!(Key::Char('a').code(), 65);
        assert_eq!(Key::Char('Z').code(), 90);
    }

    #[test]
    fn special_codes_match_raylib() {
        assert_eq!(Key::Escape.code(), 256);
        assert_eq!(Key::Enter.code(), 257);
        assert_eq!(Key::Up.code(), 265);
        assert_eq!(Key::LeftShift.code(), 340);
        assert_eq!(Key::RightAlt.code(), 346);
        assert_eq!(Key::F(1).code(), 290);
        assert_eq!(Key::F(12).code(), 301);
        assert_eq!(Key::GRAVE.code(), 96);
        assert_eq!(Key::SPACE.code(), 32);
    }

    #[test]
    fn from_name_named_keys() {
        assert_eq!(Key::from_name("space"), Some(Key::SPACE));
        assert_eq!(Key::from_name("LEFT_SHIFT"), Some(Key::LeftShift));
        assert_eq!(Key::from_name("Grave"), Some(Key::GRAVE));
        assert_eq!(Key::from_name("nine"), Some(Key::Char('9')));
    }

    #[test]
    fn from_name_single_char() {
        assert_eq!(Key::from_name("A"), Some(Key::Char('a')));
        assert_eq!(Key::from_name("`"), Some(Key::GRAVE));
    }

    #[test]
    fn from_name_function_keys() {
        assert_eq!(Key::from_name("f5"), Some(Key::F(5)));
        assert_eq!(Key::from_name("F12"), Some(Key::F(12)));
        assert_eq!(Key::from_name("f13"), None);
        assert_eq!(Key::from_name("f0"), None);
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(Key::from_name("not_a_key"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn modifiers_detected() {
        assert!(Key::LeftControl.is_modifier());
        assert!(Key::RightShift.is_modifier());
        assert!(!Key::Enter.is_modifier());
        assert!(!Key::Char('a').is_modifier());
    }

    #[test]
    fn modifiers_default_is_none_held() {
        let m = Modifiers::default();
        assert!(!m.shift);
        assert!(!m.control);
    }

    mod props {
        use proptest::prelude::*;

        use super::super::{Key, NAMED_KEYS};

        proptest! {
            #[test]
            fn named_keys_resolve_in_any_case(
                idx in 0..NAMED_KEYS.len(),
                upper in any::<bool>(),
            ) {
                let (name, key) = NAMED_KEYS[idx];
                let name = if upper { name.to_uppercase() } else { name.to_lowercase() };
                prop_assert_eq!(Key::from_name(&name), Some(key));
            }

            #[test]
            fn function_keys_resolve(n in 1u8..=12) {
                prop_assert_eq!(Key::from_name(&format!("F{n}")), Some(Key::F(n)));
                prop_assert_eq!(Key::from_name(&format!("f{n}")), Some(Key::F(n)));
            }

            #[test]
            fn letters_resolve_to_uppercase_codes(c in "[a-zA-Z]") {
                let key = Key::from_name(&c);
                let expected = c.to_ascii_uppercase().chars().next().map(|ch| ch as u32);
                prop_assert_eq!(key.map(Key::code), expected);
            }
        }
    }
}
