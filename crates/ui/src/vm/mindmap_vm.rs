//! Outline text to a nested tree for the Visualize tab.
//!
//! Headings (`#`..`######`) nest by level; bullet items (`-`, `*`, `+`)
//! nest under the closest heading by indentation.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MindmapNode {
    pub label: String,
    pub children: Vec<MindmapNode>,
}

impl MindmapNode {
    fn leaf(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            children: Vec::new(),
        }
    }
}

fn depth_of(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        let hashes = trimmed.chars().take_while(|c| *c == '#').count();
        let label = trimmed[hashes..].trim();
        if hashes <= 6 && !label.is_empty() {
            return Some((hashes, label));
        }
        return None;
    }
    for marker in ["- ", "* ", "+ "] {
        if let Some(label) = trimmed.strip_prefix(marker) {
            let indent = line.len() - trimmed.len();
            let label = label.trim();
            if label.is_empty() {
                return None;
            }
            // Bullets sit below every heading level.
            return Some((7 + indent / 2, label));
        }
    }
    None
}

/// Parse an outline into its top-level nodes. Blank or unrecognised lines
/// are skipped.
#[must_use]
pub fn parse_mindmap(outline: &str) -> Vec<MindmapNode> {
    let mut roots: Vec<MindmapNode> = Vec::new();
    // (depth, path of child indices from the roots)
    let mut stack: Vec<(usize, Vec<usize>)> = Vec::new();

    for line in outline.lines() {
        let Some((depth, label)) = depth_of(line) else {
            continue;
        };
        while stack.last().is_some_and(|(d, _)| *d >= depth) {
            stack.pop();
        }

        let path = match stack.last() {
            None => {
                roots.push(MindmapNode::leaf(label));
                vec![roots.len() - 1]
            }
            Some((_, parent_path)) => {
                let mut parent_path = parent_path.clone();
                let Some(parent) = node_at(&mut roots, &parent_path) else {
                    continue;
                };
                parent.children.push(MindmapNode::leaf(label));
                parent_path.push(parent.children.len() - 1);
                parent_path
            }
        };
        stack.push((depth, path));
    }
    roots
}

fn node_at<'a>(roots: &'a mut [MindmapNode], path: &[usize]) -> Option<&'a mut MindmapNode> {
    let (first, rest) = path.split_first()?;
    let mut node = roots.get_mut(*first)?;
    for index in rest {
        node = node.children.get_mut(*index)?;
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_bullets_nest() {
        let tree = parse_mindmap("# Root\n## A\n- a1\n- a2\n## B\n");
        assert_eq!(tree.len(), 1);
        let root = &tree[0];
        assert_eq!(root.label, "Root");
        let labels: Vec<&str> = root.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["A", "B"]);
        assert_eq!(root.children[0].children.len(), 2);
        assert!(root.children[1].children.is_empty());
    }

    #[test]
    fn indented_bullets_nest_under_bullets() {
        let tree = parse_mindmap("- top\n  - inner\n- next");
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children[0].label, "inner");
    }

    #[test]
    fn blank_and_plain_lines_are_skipped() {
        assert!(parse_mindmap("\n\nplain text\n#\n").is_empty());
    }
}
