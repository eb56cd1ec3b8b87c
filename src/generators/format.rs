//! Format specifier parsing for localized strings.
//!
//! Extracts the argument list of a `String(format:)` style value such as
//! `"%1$@ has %2$ld new messages"`.

use std::collections::BTreeMap;

use crate::namespace::FormatArg;

/// Highest explicit `%N$` position honoured. Specifiers beyond it are ignored.
pub const MAX_POSITION: usize = 64;

/// Parse the format arguments of `value`, in positional order.
///
/// Positions not referenced by any specifier are typed as objects.
/// Explicit positions above [`MAX_POSITION`] are skipped.
pub fn parse_format_args(value: &str) -> Vec<FormatArg> {
    let mut by_position: BTreeMap<usize, FormatArg> = BTreeMap::new();
    let mut next_position = 1;
    let chars: Vec<char> = value.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '%' {
            i += 1;
            continue;
        }
        i += 1;

        // Explicit position: digits followed by '$'
        let mut position = None;
        let digits_start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i < chars.len() && chars[i] == '$' && i > digits_start {
            let digits: String = chars[digits_start..i].iter().collect();
            position = Some(digits.parse::<usize>().unwrap_or(usize::MAX)).filter(|p| *p > 0);
            i += 1;
        } else {
            i = digits_start;
        }

        while i < chars.len() && matches!(chars[i], '-' | '+' | ' ' | '#' | '0' | '\'') {
            i += 1;
        }

        // Width and precision; '*' consumes an Int argument
        for allow_dot in [false, true] {
            if allow_dot {
                if i < chars.len() && chars[i] == '.' {
                    i += 1;
                } else {
                    continue;
                }
            }
            if i < chars.len() && chars[i] == '*' {
                by_position.insert(next_position, FormatArg::Int);
                next_position += 1;
                i += 1;
            } else {
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
        }

        while i < chars.len() && matches!(chars[i], 'h' | 'l' | 'q' | 'L' | 'z' | 't' | 'j') {
            i += 1;
        }

        let Some(&conversion) = chars.get(i) else {
            break;
        };
        i += 1;

        let arg = match conversion {
            '@' => FormatArg::Object,
            'd' | 'i' | 'D' => FormatArg::Int,
            'u' | 'U' | 'o' | 'O' | 'x' | 'X' => FormatArg::UInt,
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 'a' | 'A' => FormatArg::Double,
            'c' | 'C' => FormatArg::Character,
            's' | 'S' => FormatArg::CString,
            'p' => FormatArg::Pointer,
            _ => continue,
        };

        let pos = match position {
            Some(pos) if pos > MAX_POSITION => continue,
            Some(pos) => pos,
            None => {
                next_position += 1;
                next_position - 1
            }
        };
        by_position.entry(pos).or_insert(arg);
    }

    let count = by_position.keys().next_back().copied().unwrap_or(0);
    (1..=count)
        .map(|pos| by_position.get(&pos).copied().unwrap_or(FormatArg::Object))
        .collect()
}
