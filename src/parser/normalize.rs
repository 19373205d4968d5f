//! Textual normalization of a raw declaration line
//!
//! Rewrites a trimmed declaration into the canonical spacing the lexer
//! expects:
//!
//! ```text
//! "int  luaL_loadstring (lua_State *L, const char *s);"
//!   → "int luaL_loadstring (lua_State* L, cchar* s"
//! ```
//!
//! The steps run in a fixed order because each relies on the spacing the
//! previous one produced.

use crate::constants::TYPE_PHRASES;
use crate::transcoder::errors::TranscodeError;

/// Normalize a trimmed, non-comment declaration and return its body: the
/// text up to, but not including, the closing `)` of the parameter list.
pub fn normalize(line: &str) -> Result<String, TranscodeError> {
    let text = collapse_spaces(&line.replace('\t', " "));
    let text = substitute_type_phrases(&text);
    let text = canonicalize_pointers(&text);

    let text = text.strip_suffix(';').unwrap_or(&text).trim_end();
    match text.strip_suffix(')') {
        Some(body) => Ok(body.trim_end().to_string()),
        None => Err(TranscodeError::MissingCloseParen {
            found: text.to_string(),
        }),
    }
}

/// Collapse every run of spaces to a single space
pub fn collapse_spaces(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out
}

/// Replace each multi-word base type in [`TYPE_PHRASES`] with its token
fn substitute_type_phrases(text: &str) -> String {
    TYPE_PHRASES
        .iter()
        .fold(text.to_string(), |acc, (phrase, token)| acc.replace(phrase, token))
}

/// Bind every `*` to the type on its left and follow it with one space;
/// consecutive markers merge into one token (`char **p` → `char** p`).
fn canonicalize_pointers(text: &str) -> String {
    let mut out = text.replace(" *", "*").replace('*', "* ");
    out = collapse_spaces(&out);
    while out.contains("* *") {
        out = out.replace("* *", "**");
    }
    collapse_spaces(&out)
}
