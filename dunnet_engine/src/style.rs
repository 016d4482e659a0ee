//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

const MAX_WRAP_WIDTH: usize = 100;

/// Wrapping options for ordinary paragraphs: terminal width, capped for readability.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(MAX_WRAP_WIDTH))
}

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn art_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn item_heading_style(&self) -> ColoredString;
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn engine_style(&self) -> ColoredString;
    fn system_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn art_style(&self) -> ColoredString {
        self.truecolor(120, 160, 120)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn item_heading_style(&self) -> ColoredString {
        self.item_style().bold()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn success_style(&self) -> ColoredString {
        self.bright_green()
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn engine_style(&self) -> ColoredString {
        self.dimmed()
    }
    fn system_style(&self) -> ColoredString {
        self.truecolor(200, 200, 200)
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().bright_yellow()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(75, 80, 75)
    }
}

impl GameStyle for String {
    fn art_style(&self) -> ColoredString {
        self.as_str().art_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn item_heading_style(&self) -> ColoredString {
        self.as_str().item_heading_style()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn engine_style(&self) -> ColoredString {
        self.as_str().engine_style()
    }
    fn system_style(&self) -> ColoredString {
        self.as_str().system_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}
