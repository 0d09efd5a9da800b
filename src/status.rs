use std::{
    fmt::{self, Display},
    io::{self, Write},
    process::exit,
    str::FromStr,
};

use crate::log;

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// How a category shows up on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Look {
    pub color: &'static str,
    pub tag: &'static str,
    pub glyph: &'static str,
}

// Indexed by `Category as usize`.
const LOOKS: [Look; 4] = [
    Look {
        color: GREEN,
        tag: "PURR",
        glyph: "☑ ",
    },
    Look {
        color: YELLOW,
        tag: "RAWR",
        glyph: "⚠ ",
    },
    Look {
        color: RED,
        tag: "HISS",
        glyph: "☒ ",
    },
    Look {
        color: CYAN,
        tag: "MEOW",
        glyph: "😺 ",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ok,
    Warn,
    Fail,
    Notice,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Ok, Self::Warn, Self::Fail, Self::Notice];

    pub fn look(self) -> &'static Look {
        &LOOKS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Fail => "fail",
            Self::Notice => "notice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message type `{0}` (expected ok, warn, fail or notice)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Self::Ok),
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            "notice" => Ok(Self::Notice),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Which part of the line gets the color and bold treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// `1`: only the icon and `[TAG]`.
    Tag,
    /// `2`: the whole line.
    Line,
}

impl Style {
    pub const ALL: [Style; 2] = [Self::Tag, Self::Line];

    pub fn name(self) -> &'static str {
        match self {
            Self::Tag => "1",
            Self::Line => "2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style `{0}` (expected 1 or 2)")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Tag),
            "2" => Ok(Self::Line),
            other => Err(UnknownStyle(other.to_string())),
        }
    }
}

/// A single status line waiting to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub category: Category,
    pub style: Style,
    pub icon: bool,
}

impl StatusMessage {
    pub fn new(text: impl Display, category: Category, style: Style, icon: bool) -> Self {
        Self {
            text: text.to_string(),
            category,
            style,
            icon,
        }
    }

    pub fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "{self}")
    }
}

impl Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Look { color, tag, glyph } = self.category.look();
        let icon = if self.icon { *glyph } else { "" };
        let text = &self.text;

        match self.style {
            Style::Tag => write!(f, "{color}{BOLD}{icon}[{tag}]{RESET} {text}"),
            Style::Line => write!(f, "{color}{BOLD}{icon}[{tag}] {text}{RESET}"),
        }
    }
}

/// Parses `category` and `style` and, if both are known, writes one status
/// line to `w`. Unknown values write nothing.
pub fn render_to(
    w: &mut impl Write,
    text: impl Display,
    category: &str,
    style: &str,
    icon: bool,
) -> io::Result<()> {
    match (category.parse::<Category>(), style.parse::<Style>()) {
        (Ok(category), Ok(style)) => StatusMessage::new(text, category, style, icon).write_to(w),
        _ => Ok(()),
    }
}

/// [`render_to`] against standard output. A failed write is reported on
/// stderr and exits with status 1.
pub fn render(text: impl Display, category: &str, style: &str, icon: bool) {
    render_to(&mut io::stdout().lock(), text, category, style, icon).unwrap_or_else(|e| {
        log::err("error (while writing to stdout)", e);
        exit(1);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CATEGORIES: [&str; 4] = ["ok", "warn", "fail", "notice"];
    const STYLES: [&str; 2] = ["1", "2"];

    fn rendered(text: &str, category: &str, style: &str, icon: bool) -> String {
        let mut out = Vec::new();
        render_to(&mut out, text, category, style, icon).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn every_combination_prints_one_line_with_tag_and_one_reset() {
        for category in CATEGORIES {
            let tag = category.parse::<Category>().unwrap().look().tag;
            for style in STYLES {
                for icon in [true, false] {
                    let out = rendered("hello", category, style, icon);
                    assert!(!out.is_empty());
                    assert_eq!(out.matches('\n').count(), 1, "{out:?}");
                    assert!(out.ends_with('\n'));
                    assert_eq!(out.matches(&format!("[{tag}]")).count(), 1, "{out:?}");
                    assert_eq!(out.matches(RESET).count(), 1, "{out:?}");
                }
            }
        }
    }

    #[test]
    fn tag_style_resets_before_the_text() {
        let out = rendered("all good", "ok", "1", true);
        assert_eq!(out, "\x1b[32m\x1b[1m☑ [PURR]\x1b[0m all good\n");
    }

    #[test]
    fn line_style_resets_at_the_end() {
        let out = rendered("all good", "ok", "2", true);
        assert_eq!(out, "\x1b[32m\x1b[1m☑ [PURR] all good\x1b[0m\n");
    }

    #[test]
    fn exact_lines_for_each_category() {
        assert_eq!(
            rendered("careful", "warn", "1", false),
            "\x1b[33m\x1b[1m[RAWR]\x1b[0m careful\n"
        );
        assert_eq!(
            rendered("broke", "fail", "2", false),
            "\x1b[31m\x1b[1m[HISS] broke\x1b[0m\n"
        );
        assert_eq!(
            rendered("fyi", "notice", "2", true),
            "\x1b[36m\x1b[1m😺 [MEOW] fyi\x1b[0m\n"
        );
    }

    #[test]
    fn icon_flag_controls_the_glyph() {
        let glyphs: Vec<&str> = Category::ALL.iter().map(|c| c.look().glyph).collect();

        for category in Category::ALL {
            for style in Style::ALL {
                let plain = StatusMessage::new("x", category, style, false).to_string();
                for glyph in &glyphs {
                    assert!(!plain.contains(glyph.trim_end()), "{plain:?}");
                }

                let iconic = StatusMessage::new("x", category, style, true).to_string();
                let own = category.look().glyph;
                assert_eq!(iconic.matches(own).count(), 1, "{iconic:?}");
                for glyph in glyphs.iter().filter(|g| **g != own) {
                    assert!(!iconic.contains(glyph.trim_end()), "{iconic:?}");
                }
            }
        }
    }

    #[test]
    fn color_always_comes_with_bold() {
        for category in Category::ALL {
            for style in Style::ALL {
                let line = StatusMessage::new("x", category, style, true).to_string();
                let color = category.look().color;
                assert!(line.starts_with(&format!("{color}{BOLD}")), "{line:?}");
            }
        }
    }

    #[test]
    fn unknown_category_or_style_prints_nothing() {
        assert_eq!(rendered("x", "info", "1", true), "");
        assert_eq!(rendered("x", "OK", "2", false), "");
        assert_eq!(rendered("x", "ok", "3", true), "");
        assert_eq!(rendered("x", "", "", false), "");
    }

    #[test]
    fn names_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>(), Ok(style));
        }
    }

    #[test]
    fn parse_errors_name_the_bad_value() {
        let err = "loud".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("loud".to_string()));
        assert!(err.to_string().contains("`loud`"));

        let err = "9".parse::<Style>().unwrap_err();
        assert!(err.to_string().contains("`9`"));
    }

    #[test]
    fn same_arguments_render_the_same_line() {
        let mut out = Vec::new();
        render_to(&mut out, "again", "fail", "1", true).unwrap();
        render_to(&mut out, "again", "fail", "1", true).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
    }

    #[test]
    fn written_line_is_display_plus_newline() {
        let msg = StatusMessage::new(42, Category::Notice, Style::Tag, false);
        let mut out = Vec::new();
        msg.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{msg}\n"));
        assert_eq!(msg.text, "42");
    }
}
