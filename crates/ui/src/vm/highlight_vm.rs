//! Syntax highlighting for lesson code blocks.
//!
//! A single pass tokenizer covering the languages lessons use. Output is
//! escaped HTML with `tok-*` span classes; unknown languages come back
//! escaped but unstyled.

use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    Text,
}

impl TokenKind {
    fn class(self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword => Some("tok-keyword"),
            TokenKind::String => Some("tok-string"),
            TokenKind::Comment => Some("tok-comment"),
            TokenKind::Number => Some("tok-number"),
            TokenKind::Text => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

pub struct Language {
    keywords: &'static [&'static str],
    /// Apex keywords match regardless of case.
    ignore_case: bool,
}

const APEX: Language = Language {
    keywords: &[
        "abstract", "break", "catch", "class", "continue", "delete", "do", "else", "extends",
        "false", "final", "finally", "for", "from", "global", "if", "implements", "insert",
        "interface", "new", "null", "override", "private", "protected", "public", "return",
        "select", "sharing", "static", "super", "this", "throw", "trigger", "true", "try",
        "undelete", "update", "upsert", "virtual", "void", "where", "while", "with", "without",
    ],
    ignore_case: true,
};

const JAVASCRIPT: Language = Language {
    keywords: &[
        "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
        "else", "export", "extends", "false", "finally", "for", "function", "if", "import",
        "let", "new", "null", "return", "static", "super", "switch", "this", "throw", "true",
        "try", "undefined", "var", "while",
    ],
    ignore_case: false,
};

impl Language {
    /// Look up a fence info string such as `apex` or `js`.
    #[must_use]
    pub fn named(name: &str) -> Option<&'static Language> {
        match name.trim().to_ascii_lowercase().as_str() {
            "apex" | "java" | "soql" => Some(&APEX),
            "javascript" | "js" | "lwc" => Some(&JAVASCRIPT),
            _ => None,
        }
    }

    fn is_keyword(&self, word: &str) -> bool {
        if self.ignore_case {
            self.keywords.iter().any(|k| k.eq_ignore_ascii_case(word))
        } else {
            self.keywords.iter().any(|k| *k == word)
        }
    }
}

/// Split `source` into contiguous tokens covering every byte.
#[must_use]
pub fn tokenize(source: &str, language: &Language) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let scanned = match bytes[pos] {
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                Some((TokenKind::Comment, line_end(bytes, pos)))
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                Some((TokenKind::Comment, block_comment_end(bytes, pos + 2)))
            }
            quote @ (b'\'' | b'"' | b'`') => Some((TokenKind::String, string_end(bytes, pos, quote))),
            b'0'..=b'9' => Some((
                TokenKind::Number,
                scan_while(bytes, pos, |b| b.is_ascii_alphanumeric() || b == b'.'),
            )),
            b if b.is_ascii_alphabetic() || b == b'_' => {
                let end = scan_while(bytes, pos, |b| b.is_ascii_alphanumeric() || b == b'_');
                let kind = if language.is_keyword(&source[pos..end]) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Text
                };
                Some((kind, end))
            }
            _ => None,
        };

        match scanned {
            Some((TokenKind::Text, end)) => pos = end,
            Some((kind, end)) => {
                if text_start < pos {
                    tokens.push(Token {
                        kind: TokenKind::Text,
                        range: text_start..pos,
                    });
                }
                tokens.push(Token {
                    kind,
                    range: pos..end,
                });
                pos = end;
                text_start = end;
            }
            None => pos += 1,
        }
    }

    if text_start < bytes.len() {
        tokens.push(Token {
            kind: TokenKind::Text,
            range: text_start..bytes.len(),
        });
    }
    tokens
}

fn scan_while(bytes: &[u8], start: usize, accept: impl Fn(u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !accept(b))
        .map_or(bytes.len(), |offset| start + offset)
}

fn line_end(bytes: &[u8], start: usize) -> usize {
    scan_while(bytes, start, |b| b != b'\n')
}

fn block_comment_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .windows(2)
        .position(|pair| pair == b"*/")
        .map_or(bytes.len(), |offset| from + offset + 2)
}

/// Unterminated quotes stop at the end of the line, except template literals.
fn string_end(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            b'\n' if quote != b'`' => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Highlight `code` written in `language` as escaped HTML.
#[must_use]
pub fn highlight(language: &str, code: &str) -> String {
    let Some(lang) = Language::named(language) else {
        return escape_html(code);
    };
    let mut html = String::with_capacity(code.len() * 2);
    for token in tokenize(code, lang) {
        let text = escape_html(&code[token.range]);
        match token.kind.class() {
            Some(class) => {
                html.push_str("<span class=\"");
                html.push_str(class);
                html.push_str("\">");
                html.push_str(&text);
                html.push_str("</span>");
            }
            None => html.push_str(&text),
        }
    }
    html
}

/// Full `<pre><code>` block for a fenced or indented code block.
#[must_use]
pub fn code_block_html(language: &str, code: &str) -> String {
    let body = highlight(language, code);
    if language.is_empty() {
        format!("<pre><code>{body}</code></pre>\n")
    } else {
        format!(
            "<pre><code class=\"language-{}\">{body}</code></pre>\n",
            escape_html(language)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds<'a>(source: &'a str, language: &str) -> Vec<(TokenKind, &'a str)> {
        let lang = Language::named(language).unwrap();
        tokenize(source, lang)
            .into_iter()
            .map(|t| (t.kind, &source[t.range]))
            .collect()
    }

    #[test]
    fn apex_keywords_strings_and_comments() {
        let tokens = kinds("UPDATE accs; // save\nSystem.debug('done');", "apex");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Keyword, "UPDATE"),
                (TokenKind::Text, " accs; "),
                (TokenKind::Comment, "// save"),
                (TokenKind::Text, "\nSystem.debug("),
                (TokenKind::String, "'done'"),
                (TokenKind::Text, ");"),
            ]
        );
    }

    #[test]
    fn javascript_keywords_are_case_sensitive() {
        let tokens = kinds("const Const = 42;", "js");
        assert_eq!(tokens[0], (TokenKind::Keyword, "const"));
        assert_eq!(tokens[1], (TokenKind::Text, " Const = "));
        assert_eq!(tokens[2], (TokenKind::Number, "42"));
    }

    #[test]
    fn tokens_cover_source_with_unterminated_constructs() {
        let source = "/* open\n'é and \"x";
        let tokens = tokenize(source, &APEX);
        let rebuilt: String = tokens.iter().map(|t| &source[t.range.clone()]).collect();
        assert_eq!(rebuilt, source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
    }

    #[test]
    fn highlight_escapes_markup() {
        let html = highlight("apex", "if (a < b) {}");
        assert_eq!(
            html,
            "<span class=\"tok-keyword\">if</span> (a &lt; b) {}"
        );
        assert_eq!(highlight("cobol", "<x>"), "&lt;x&gt;");
    }

    #[test]
    fn code_block_keeps_language_class() {
        let html = code_block_html("apex", "return null;");
        assert!(html.starts_with("<pre><code class=\"language-apex\">"), "{html}");
        assert!(html.contains("tok-keyword"), "{html}");
        assert_eq!(code_block_html("", "x"), "<pre><code>x</code></pre>\n");
    }
}
