//! Chat text helpers built around the platform color-code convention:
//! user-facing text carries `&` escape markers (`&c`, `&l`, ...) which the
//! renderer only understands as `§`-prefixed codes.

/// The escape marker used in configuration and messages.
pub const COLOR_CHAR: char = '&';

/// The prefix the platform renderer recognizes.
pub const SECTION_CHAR: char = '§';

/// Translates `&`-style color codes into `§`-style codes.
///
/// This is a blind substitution of every `&`, matching the platform
/// convention: no validation of the following code character, a trailing
/// `&` is still replaced. Output has the same number of chars as the input.
pub fn colorize(input: &str) -> String {
    input.replace(COLOR_CHAR, "\u{00A7}")
}

/// Removes every `§<code>` pair from a string. Used for console senders
/// whose terminals cannot render formatting codes.
pub fn strip_codes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == SECTION_CHAR {
            // drop the code character too, if any
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

/// The formatting-code alphabet the renderer documents: colors `0-9a-f`,
/// styles `k-o`, reset `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ChatColor {
    pub fn code(self) -> char {
        match self {
            ChatColor::Black => '0',
            ChatColor::DarkBlue => '1',
            ChatColor::DarkGreen => '2',
            ChatColor::DarkAqua => '3',
            ChatColor::DarkRed => '4',
            ChatColor::DarkPurple => '5',
            ChatColor::Gold => '6',
            ChatColor::Gray => '7',
            ChatColor::DarkGray => '8',
            ChatColor::Blue => '9',
            ChatColor::Green => 'a',
            ChatColor::Aqua => 'b',
            ChatColor::Red => 'c',
            ChatColor::LightPurple => 'd',
            ChatColor::Yellow => 'e',
            ChatColor::White => 'f',
            ChatColor::Obfuscated => 'k',
            ChatColor::Bold => 'l',
            ChatColor::Strikethrough => 'm',
            ChatColor::Underline => 'n',
            ChatColor::Italic => 'o',
            ChatColor::Reset => 'r',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Some(match code.to_ascii_lowercase() {
            '0' => ChatColor::Black,
            '1' => ChatColor::DarkBlue,
            '2' => ChatColor::DarkGreen,
            '3' => ChatColor::DarkAqua,
            '4' => ChatColor::DarkRed,
            '5' => ChatColor::DarkPurple,
            '6' => ChatColor::Gold,
            '7' => ChatColor::Gray,
            '8' => ChatColor::DarkGray,
            '9' => ChatColor::Blue,
            'a' => ChatColor::Green,
            'b' => ChatColor::Aqua,
            'c' => ChatColor::Red,
            'd' => ChatColor::LightPurple,
            'e' => ChatColor::Yellow,
            'f' => ChatColor::White,
            'k' => ChatColor::Obfuscated,
            'l' => ChatColor::Bold,
            'm' => ChatColor::Strikethrough,
            'n' => ChatColor::Underline,
            'o' => ChatColor::Italic,
            'r' => ChatColor::Reset,
            _ => return None,
        })
    }
}

impl std::fmt::Display for ChatColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", SECTION_CHAR, self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_marker_is_identity() {
        assert_eq!(colorize("plain text"), "plain text");
        assert_eq!(colorize("hello world 123 !?"), "hello world 123 !?");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(colorize(""), "");
    }

    #[test]
    fn test_marker_with_code() {
        assert_eq!(colorize("&c"), "§c");
        assert_eq!(colorize("&aHello &lWorld"), "§aHello §lWorld");
    }

    #[test]
    fn test_trailing_marker_still_replaced() {
        assert_eq!(colorize("&"), "§");
        assert_eq!(colorize("oops&"), "oops§");
    }

    #[test]
    fn test_unrecognized_code_passes_through() {
        // blind substitution, the 'z' is untouched
        assert_eq!(colorize("&z"), "§z");
    }

    #[test]
    fn test_length_preserved() {
        for s in ["", "&", "&&&&", "a&b&c", "no markers here", "&c&l&o&r"] {
            assert_eq!(colorize(s).chars().count(), s.chars().count());
        }
    }

    #[test]
    fn test_strip_codes() {
        assert_eq!(strip_codes("§cred§r plain"), "red plain");
        assert_eq!(strip_codes(&colorize("&aHello &lWorld")), "Hello World");
        assert_eq!(strip_codes("no codes"), "no codes");
        assert_eq!(strip_codes("§"), "");
    }

    #[test]
    fn test_chat_color_roundtrip() {
        for code in "0123456789abcdefklmnor".chars() {
            let color = ChatColor::from_code(code).unwrap();
            assert_eq!(color.code(), code);
        }
        assert_eq!(ChatColor::from_code('z'), None);
        assert_eq!(ChatColor::from_code('C'), Some(ChatColor::Red));
    }

    #[test]
    fn test_chat_color_display() {
        assert_eq!(ChatColor::Red.to_string(), "§c");
        assert_eq!(format!("{}error", ChatColor::Red), "§cerror");
    }
}
