use std::fmt::{self, Display};

use crate::{node::Node, AvlTree};

impl<T> AvlTree<T>
where
    T: Display,
{
    /// Render the tree structure as a Graphviz `dot` digraph, labelling each
    /// node with its value and cached height.
    pub fn to_dot(&self) -> String {
        Dot(self).to_string()
    }
}

struct Dot<'a, T>(&'a AvlTree<T>);

impl<T> Display for Dot<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, r#"bgcolor = "transparent";"#)?;
        writeln!(
            f,
            r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
        )?;
        if let Some(root) = self.0.root() {
            // Node IDs are assigned in pre-order, as values may repeat.
            recurse(root, &mut 0, f)?;
        }
        writeln!(f, "}}")
    }
}

fn recurse<T>(n: &Node<T>, next_id: &mut usize, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Display,
{
    let id = *next_id;
    *next_id += 1;

    writeln!(f, r#"n{id} [label="{} | h={}"];"#, n.value(), n.height())?;

    for (side, v) in [("l", n.left()), ("r", n.right())] {
        match v {
            Some(v) => {
                writeln!(f, "n{id} -> n{} [color = \"orange1\";];", *next_id)?;
                recurse(v, next_id, f)?;
            }
            None => {
                writeln!(f, "null_{id}_{side} [shape=point,style=invis];")?;
                writeln!(f, "n{id} -> null_{id}_{side} [style=invis];")?;
            }
        };
    }

    Ok(())
}
