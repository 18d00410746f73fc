// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Character-offset helpers.
//!
//! Cursors and mention ranges are counted in chars (Unicode scalar values), never bytes, so that
//! accented names do not shift offsets.

pub fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the `char_idx`-th char, clamped to the end of `text`.
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices().nth(char_idx).map_or(text.len(), |(byte, _)| byte)
}

/// Char offset of a byte position that lies on a char boundary.
pub fn char_offset(text: &str, byte_idx: usize) -> usize {
    text.get(..byte_idx).map_or_else(|| text_len(text), text_len)
}

/// The chars in `[start, end)`, clamped to the text.
pub fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    &text[start_byte..end_byte]
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if text_len(text) <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}
