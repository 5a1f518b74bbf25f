use std::fmt;

use super::operation::Operation;

/// An expression tree; every operation node caches its value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Number(u64),
    Operation {
        operation: Operation,
        lhs: Box<Node>,
        rhs: Box<Node>,
        value: u64,
    },
}

/// Which nested operations are written as a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// One step per operation
    None,
    /// Chains of the same operation share a step
    SameOperations,
    /// Chains of operations with the same precedence share a step
    #[default]
    Precedence,
}

impl Grouping {
    pub(crate) fn groups(self, outer: Operation, inner: Operation) -> bool {
        match self {
            Grouping::None => false,
            Grouping::SameOperations => outer == inner,
            Grouping::Precedence => outer.precedence() == inner.precedence(),
        }
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::Number(value)
    }
}

impl Node {
    /// Apply `operation`, or `None` when the result is not a positive integer
    pub fn combine(operation: Operation, lhs: Node, rhs: Node) -> Option<Node> {
        let value = operation.perform(lhs.value(), rhs.value())?;
        Some(Node::operation(operation, lhs, rhs, value))
    }

    pub(crate) fn operation(operation: Operation, lhs: Node, rhs: Node, value: u64) -> Node {
        Node::Operation {
            operation,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            value,
        }
    }

    pub fn value(&self) -> u64 {
        match self {
            Node::Number(value) | Node::Operation { value, .. } => *value,
        }
    }

    pub fn operation_kind(&self) -> Option<Operation> {
        match self {
            Node::Number(_) => None,
            Node::Operation { operation, .. } => Some(*operation),
        }
    }

    /// Rewrite `a - (b - c)`, `a / (b / c)`, `a - (b + c)` and `a / (b * c)`
    /// without the parentheses until nothing changes
    pub fn reduced(&self) -> Node {
        let mut current = self.clone();
        loop {
            let next = current.reduce_once();
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn reduce_once(&self) -> Node {
        let Node::Operation {
            operation,
            lhs,
            rhs,
            value,
        } = self
        else {
            return self.clone();
        };
        let (operation, value) = (*operation, *value);

        let nested = match rhs.as_ref() {
            Node::Operation {
                operation: child,
                lhs: child_lhs,
                rhs: child_rhs,
                ..
            } if child.precedence() == operation.precedence() => operation
                .applied_twice()
                .map(|switched| (switched, *child, child_lhs, child_rhs)),
            _ => None,
        };

        let Some((switched, child, child_lhs, child_rhs)) = nested else {
            return Node::operation(operation, lhs.reduced(), rhs.reduced(), value);
        };
        let child_lhs = child_lhs.reduced();
        let child_rhs = child_rhs.reduced();
        let lhs = (**lhs).clone();

        if child == operation {
            // a - (b - c) -> a + (c - b)
            if let Some(child_value) = operation.perform(child_rhs.value(), child_lhs.value()) {
                let rhs = Node::operation(operation, child_rhs, child_lhs, child_value);
                return Node::operation(switched, lhs, rhs, value);
            }
            // a - (b - c) -> (a - b) + c
            if let Some(child_value) = operation.perform(lhs.value(), child_lhs.value()) {
                let lhs = Node::operation(operation, lhs, child_lhs, child_value);
                return Node::operation(switched, lhs, child_rhs, value);
            }
        } else if child.is_commutative() {
            // a - (b + c) -> (a - b) - c
            if let Some(child_value) = operation.perform(lhs.value(), child_lhs.value()) {
                let lhs = Node::operation(operation, lhs, child_lhs, child_value);
                return Node::operation(operation, lhs, child_rhs, value);
            }
            // a - (b + c) -> (a - c) - b
            if let Some(child_value) = operation.perform(lhs.value(), child_rhs.value()) {
                let lhs = Node::operation(operation, lhs, child_rhs, child_value);
                return Node::operation(operation, lhs, child_lhs, value);
            }
        }
        self.clone()
    }

    /// The calculation as the lines a contestant would write down
    pub fn steps(&self, grouping: Grouping) -> Vec<String> {
        let Node::Operation {
            operation,
            lhs,
            rhs,
            value,
        } = self.reduced()
        else {
            return Vec::new();
        };

        let rhs_kind = rhs.operation_kind();
        let (mut steps, lhs_text) = lhs.partial_result(operation, grouping);
        let (rhs_steps, rhs_text) = rhs.partial_result(operation, grouping);
        steps.extend(rhs_steps);
        steps.push(format!(
            "{lhs_text} {operation} {} = {value}",
            parenthesize(&rhs_text, rhs_needs_parens(operation, rhs_kind))
        ));
        steps
    }

    fn partial_result(&self, outer: Operation, grouping: Grouping) -> (Vec<String>, String) {
        match self {
            Node::Operation {
                operation,
                lhs,
                rhs,
                ..
            } if grouping.groups(outer, *operation) => {
                let (mut steps, lhs_text) = lhs.partial_result(*operation, grouping);
                let (rhs_steps, rhs_text) = rhs.partial_result(*operation, grouping);
                steps.extend(rhs_steps);
                let text = format!(
                    "{lhs_text} {operation} {}",
                    parenthesize(&rhs_text, rhs_needs_parens(*operation, rhs.operation_kind()))
                );
                (steps, text)
            }
            _ => (self.steps(grouping), self.value().to_string()),
        }
    }

    /// Infix form; `always_parenthesize` wraps every operation
    pub fn describe(&self, always_parenthesize: bool) -> String {
        let Node::Operation {
            operation,
            lhs,
            rhs,
            ..
        } = self
        else {
            return self.value().to_string();
        };

        let lhs_text = lhs.describe(always_parenthesize);
        let rhs_text = rhs.describe(always_parenthesize);
        if always_parenthesize {
            return format!("({lhs_text} {operation} {rhs_text})");
        }

        let lhs_parens = lhs
            .operation_kind()
            .is_some_and(|child| child.precedence() < operation.precedence());
        let rhs_parens = rhs.operation_kind().is_some_and(|child| {
            child.precedence() < operation.precedence() || !operation.is_commutative()
        });
        format!(
            "{} {operation} {}",
            parenthesize(&lhs_text, lhs_parens),
            parenthesize(&rhs_text, rhs_parens)
        )
    }
}

/// `a - (b - c)` keeps its parentheses inside a grouped step
fn rhs_needs_parens(operation: Operation, rhs: Option<Operation>) -> bool {
    !operation.is_commutative()
        && rhs.is_some_and(|child| child.precedence() == operation.precedence())
}

fn parenthesize(text: &str, parens: bool) -> String {
    if parens {
        format!("({text})")
    } else {
        text.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(false))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn node(value: impl Into<Node>) -> Node {
        value.into()
    }

    pub(crate) fn add(lhs: impl Into<Node>, rhs: impl Into<Node>) -> Node {
        Node::combine(Operation::Addition, node(lhs), node(rhs)).unwrap()
    }

    pub(crate) fn sub(lhs: impl Into<Node>, rhs: impl Into<Node>) -> Node {
        Node::combine(Operation::Subtraction, node(lhs), node(rhs)).unwrap()
    }

    pub(crate) fn mul(lhs: impl Into<Node>, rhs: impl Into<Node>) -> Node {
        Node::combine(Operation::Multiplication, node(lhs), node(rhs)).unwrap()
    }

    pub(crate) fn div(lhs: impl Into<Node>, rhs: impl Into<Node>) -> Node {
        Node::combine(Operation::Division, node(lhs), node(rhs)).unwrap()
    }

    #[test]
    fn test_combine_rejects_invalid_results() {
        assert!(Node::combine(Operation::Subtraction, node(3), node(5)).is_none());
        assert!(Node::combine(Operation::Division, node(5), node(3)).is_none());
        assert_eq!(div(12, 4).value(), 3);
    }

    #[test]
    fn test_steps() {
        let node = sub(mul(4, 5), sub(10, add(add(1, 2), 3)));
        assert_eq!(node.to_string(), "4 * 5 - (10 - (1 + 2 + 3))");
        assert_eq!(
            node.steps(Grouping::Precedence).join("\n"),
            "4 * 5 = 20\n20 - 10 + 1 + 2 + 3 = 16"
        );
    }

    #[test]
    fn test_description() {
        let node = mul(add(add(100, 75), 6), sub(9, 7));
        assert_eq!(node.describe(true), "(((100 + 75) + 6) * (9 - 7))");
        assert_eq!(node.describe(false), "(100 + 75 + 6) * (9 - 7)");
    }

    #[test]
    fn test_reduce_subtracted_sum() {
        let node = sub(sub(mul(50, 9), add(75, 7)), 6);
        assert_eq!(node.to_string(), "50 * 9 - (75 + 7) - 6");
        assert_eq!(node.reduced().to_string(), "50 * 9 - 75 - 7 - 6");
    }

    #[test]
    fn test_reduce_nested_subtraction() {
        let node = sub(20, sub(10, add(add(1, 2), 3)));
        assert_eq!(node.to_string(), "20 - (10 - (1 + 2 + 3))");
        assert_eq!(node.reduced().to_string(), "20 - 10 + 1 + 2 + 3");
        assert_eq!(node.reduced().value(), node.value());
    }

    #[test]
    fn test_numbers_have_no_steps() {
        assert!(node(7).steps(Grouping::Precedence).is_empty());
        assert_eq!(node(7).to_string(), "7");
    }
}
