//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for inline markdown styling, with a plain text fallback.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match line_style(line) {
                LineStyle::Header => println!("{BLUE}{line}{RESET}"),
                LineStyle::Done => println!("{GREEN}{line}{RESET}"),
                LineStyle::Inline => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LineStyle {
    Header,
    Done,
    Inline,
}

fn line_style(line: &str) -> LineStyle {
    if line.starts_with('#') {
        LineStyle::Header
    } else if line.contains(". ✓ ") {
        LineStyle::Done
    } else {
        LineStyle::Inline
    }
}
