use super::node::Node;

pub const DEFAULT_SPACING: usize = 3;

impl Node {
    /// ASCII drawing of the tree, operations above their operands
    pub fn tree(&self, spacing: usize) -> String {
        let width = self.width(spacing);
        self.tree_lines(spacing)
            .iter()
            .map(|line| pad_to(line, width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn tree_lines(&self, spacing: usize) -> Vec<String> {
        let Node::Operation {
            operation,
            lhs,
            rhs,
            ..
        } = self
        else {
            return vec![self.value().to_string()];
        };

        let lhs_width = lhs.width(spacing);
        let rhs_width = rhs.width(spacing);
        let mut lines = vec![
            format!("{}[{operation}]", spaces(lhs_width)),
            format!(
                "{}/{}\\",
                spaces(lhs_width.saturating_sub(1)),
                spaces(spacing)
            ),
        ];

        let height = lhs.height().max(rhs.height());
        let lhs_lines = padded_lines(lhs.tree(spacing), height, lhs_width);
        let rhs_lines = padded_lines(rhs.tree(spacing), height, rhs_width);
        lines.extend(
            lhs_lines
                .into_iter()
                .zip(rhs_lines)
                .map(|(left, right)| format!("{left}{}{right}", spaces(spacing))),
        );
        lines
    }

    fn width(&self, spacing: usize) -> usize {
        match self {
            Node::Number(value) => value.to_string().len(),
            Node::Operation { lhs, rhs, .. } => lhs.width(spacing) + spacing + rhs.width(spacing),
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::Number(_) => 1,
            Node::Operation { lhs, rhs, .. } => 2 + lhs.height().max(rhs.height()),
        }
    }
}

fn spaces(count: usize) -> String {
    " ".repeat(count)
}

/// Pads with spaces or truncates to exactly `width` characters
fn pad_to(line: &str, width: usize) -> String {
    let mut padded: String = line.chars().take(width).collect();
    let missing = width.saturating_sub(padded.chars().count());
    padded.push_str(&spaces(missing));
    padded
}

fn padded_lines(tree: String, height: usize, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = tree.split('\n').map(String::from).collect();
    while lines.len() < height {
        lines.push(spaces(width));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::super::node::tests::{add, mul, sub};
    use super::*;

    #[test]
    fn test_single_operation() {
        assert_eq!(add(3, 4).tree(DEFAULT_SPACING), " [+] \n/   \\\n3   4");
    }

    #[test]
    fn test_nested_tree() {
        let tree = mul(add(100, 75), sub(9, 7)).tree(DEFAULT_SPACING);
        let expected = [
            "        [*]     ",
            "       /   \\    ",
            "   [+]      [-] ",
            "  /   \\    /   \\",
            "100   75   9   7",
        ];
        assert_eq!(tree, expected.join("\n"));
    }

    #[test]
    fn test_uneven_depth_pads_shallow_side() {
        let tree = add(mul(2, 3), 4).tree(1);
        for line in tree.lines() {
            assert_eq!(line.chars().count(), 5);
        }
        assert_eq!(tree.lines().count(), 5);
        assert_eq!(tree, "   [+\n  / \\\n [* 4\n/ \\  \n2 3  ");
    }

    #[test]
    fn test_number() {
        assert_eq!(Node::Number(25).tree(DEFAULT_SPACING), "25");
    }
}
