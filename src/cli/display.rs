// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the labkit CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection tries
//! `LABKIT_THEME` first, then `COLORFGBG`, then defaults to dark. `NO_COLOR` and
//! non-TTY stdout turn all styling off, so piped output is plain text.

use std::sync::OnceLock;

// Box drawing width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LABKIT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and 15 are the light ones
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if matches!(bg.trim().parse::<u8>(), Ok(7 | 15)) {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or nothing when piped
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escapes
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

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    themed(GRAY, &[], s)
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `size = N, capacity = M`, with capacity dimmed
pub fn size_capacity(len: usize, capacity: usize) -> String {
    format!(
        "size = {}, {}",
        themed(YELLOW, &[], &len.to_string()),
        themed(GRAY, &[], &format!("capacity = {}", capacity))
    )
}

/// Greedy word wrap on spaces. Input is plain text.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split(' ').filter(|w| !w.is_empty()) {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Expected-error lines in the demo transcript
pub fn expected_error(message: &str) -> String {
    themed(YELLOW, &[], &format!("error: {}", message))
}

/// Boolean result, colored by value
pub fn truth(value: bool) -> String {
    if value {
        themed(GREEN, &[BOLD], "true")
    } else {
        themed(RED, &[BOLD], "false")
    }
}

/// Fatal error line on stderr
pub fn fatal(message: &str) {
    eprintln!("{} {}", themed(RED, &[BOLD], "error:"), message);
}
