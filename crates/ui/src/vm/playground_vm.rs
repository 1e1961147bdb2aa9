use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// Editor contents when a unit body carries no `apex` block.
pub const DEFAULT_STARTER: &str = "// Code here";

/// Body of the first fenced `apex` code block, or [`DEFAULT_STARTER`].
#[must_use]
pub fn starter_code(markdown: &str) -> String {
    let mut inside = false;
    let mut code = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang)))
                if lang.split_whitespace().next() == Some("apex") =>
            {
                inside = true;
            }
            Event::Text(text) if inside => code.push_str(&text),
            Event::End(TagEnd::CodeBlock) if inside => {
                if code.is_empty() {
                    break;
                }
                return code;
            }
            _ => {}
        }
    }
    DEFAULT_STARTER.to_owned()
}
