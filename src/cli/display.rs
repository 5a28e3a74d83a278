// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for search results and corpus summaries.
//!
//! Result cards are drawn in a box, one per Surah, with a badge showing which
//! source found it. Colors follow the terminal background: OneDark on dark
//! terminals, One Light on light ones.
//!
//! # Theme detection order
//!
//! 1. `NUR_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme
//!
//! `NO_COLOR` and non-TTY stdout turn colors off entirely.

use nur_search::{RevelationType, SearchResult, Surah};
use std::sync::OnceLock;

/// Visible width between the box borders.
pub const BOX_WIDTH: usize = 76;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// What a piece of text means, independent of theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Border,
    Heading,
    Semantic,
    Keyword,
    Muted,
    Accent,
    Warning,
}

type Rgb = (u8, u8, u8);

struct Palette {
    border: Rgb,
    heading: Rgb,
    semantic: Rgb,
    keyword: Rgb,
    muted: Rgb,
    accent: Rgb,
    warning: Rgb,
}

// OneDark: https://github.com/joshdick/onedark.vim
const ONE_DARK: Palette = Palette {
    border: (92, 99, 112),
    heading: (86, 182, 194),
    semantic: (198, 120, 221),
    keyword: (152, 195, 121),
    muted: (92, 99, 112),
    accent: (229, 192, 123),
    warning: (224, 108, 117),
};

// One Light: https://github.com/sonph/onehalf
const ONE_LIGHT: Palette = Palette {
    border: (160, 161, 167),
    heading: (1, 132, 188),
    semantic: (166, 38, 164),
    keyword: (80, 161, 79),
    muted: (160, 161, 167),
    accent: (193, 132, 1),
    warning: (228, 86, 73),
};

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("NUR_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up (except 8, dark gray) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn role_color(role: Role) -> Rgb {
    let palette = match theme() {
        Theme::Dark => &ONE_DARK,
        Theme::Light => &ONE_LIGHT,
    };
    match role {
        Role::Border => palette.border,
        Role::Heading => palette.heading,
        Role::Semantic => palette.semantic,
        Role::Keyword => palette.keyword,
        Role::Muted => palette.muted,
        Role::Accent => palette.accent,
        Role::Warning => palette.warning,
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Color `text` for its role, if colors are on.
pub fn paint(role: Role, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", rgb(role_color(role)), text, RESET)
    } else {
        text.to_string()
    }
}

/// Like `paint`, in bold.
pub fn paint_bold(role: Role, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", BOLD, rgb(role_color(role)), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Shorten plain text to at most `max` characters, ending in `…` if cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = paint(Role::Border, "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 2);
    println!("{} {}{} {}", border, content, " ".repeat(pad), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", paint_bold(Role::Heading, label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        paint(Role::Border, "┌"),
        label_part,
        paint(Role::Border, &format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├──────────────────┤
pub fn section_mid() {
    println!(
        "{}",
        paint(Role::Border, &format!("├{}┤", "─".repeat(BOX_WIDTH)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!(
        "{}",
        paint(Role::Border, &format!("└{}┘", "─".repeat(BOX_WIDTH)))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// DOMAIN FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `[AI]` for semantic hits, `[KW]` for keyword matches.
pub fn source_badge(result: &SearchResult) -> String {
    if result.is_semantic() {
        paint_bold(Role::Semantic, "[AI]")
    } else {
        paint_bold(Role::Keyword, "[KW]")
    }
}

pub fn revelation_label(revelation: RevelationType) -> String {
    let text = revelation.to_string();
    match revelation {
        RevelationType::Makkah => paint(Role::Accent, &text),
        RevelationType::Madinah => paint(Role::Heading, &text),
    }
}

/// Card title: `94. Ash-Sharh (The Relief)`, or just the number if the Surah
/// isn't in the corpus.
pub fn surah_title(result: &SearchResult, surah: Option<&Surah>) -> String {
    match surah {
        Some(s) => format!(
            "{}. {} {}",
            s.id,
            paint_bold(Role::Heading, &s.name),
            paint(Role::Muted, &format!("({})", s.english_meaning))
        ),
        None => format!(
            "{}. {}",
            result.surah_id(),
            paint(Role::Warning, "unknown Surah")
        ),
    }
}

/// Elapsed milliseconds, green when fast and red when slow.
pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.1} ms", value);
    if value < 50.0 {
        paint(Role::Keyword, &text)
    } else if value < 1000.0 {
        paint(Role::Accent, &text)
    } else {
        paint(Role::Warning, &text)
    }
}
