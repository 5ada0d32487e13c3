//! Treeviz formatter for syntax trees
//!
//! One line per node, nesting drawn with box connectors, 2 columns per level. Keyword nodes
//! print their tag, value nodes print their tag and literal.
//!
//!     EFFECT
//!     ├─ STRINGLITERAL "glass"
//!     └─ TECHNIQUE
//!       └─ PASS
//!         ├─ AMBIENT
//!         │ ├─ FLOATVALUE 1.0
//!         ...

use super::registry::{FormatError, Formatter};
use crate::effect::pipeline::Compilation;
use crate::effect::tree::{EffectTree, Node};

fn label(node: &Node) -> String {
    match &node.payload {
        Some(payload) => format!("{} {}", node.node_type, payload),
        None => node.node_type.to_string(),
    }
}

pub fn to_treeviz_str(tree: &EffectTree) -> String {
    let root = tree.root();
    let mut result = format!("{}\n", label(root));
    append_children(&mut result, tree, root, "");
    result
}

fn append_node(result: &mut String, tree: &EffectTree, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, label(node)));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, tree, node, &new_prefix);
}

fn append_children(result: &mut String, tree: &EffectTree, node: &Node, prefix: &str) {
    let count = node.child_count();
    for (i, child) in tree.children(node).enumerate() {
        append_node(result, tree, child, prefix, i == count - 1);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, compilation: &Compilation) -> Result<String, FormatError> {
        Ok(to_treeviz_str(&compilation.tree))
    }

    fn description(&self) -> &str {
        "Syntax tree, one node per line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::parsing::parse;

    #[test]
    fn test_treeviz_nesting() {
        let tree = parse(r#"effect "e" { technique { pass { maxlights 2 lighting enabled } } }"#)
            .expect("parses");

        let expected = "\
EFFECT
├─ STRINGLITERAL \"e\"
└─ TECHNIQUE
  └─ PASS
    ├─ MAXLIGHTS
    │ └─ UINTVALUE 2
    └─ LIGHTING
      └─ BOOLEAN true
";
        assert_eq!(to_treeviz_str(&tree), expected);
    }
}
