use std::cmp::Ordering;

use super::node::{Grouping, Node};
use super::operation::Operation;

impl Node {
    /// Whether two trees are the same calculation written differently,
    /// e.g. `2 * (3 * 4)` and `(4 * 2) * 3`
    pub fn is_semantically_equal(&self, other: &Node) -> bool {
        if self == other {
            return true;
        }
        if self.value() != other.value() {
            return false;
        }

        if let (
            Node::Operation {
                operation,
                lhs,
                rhs,
                ..
            },
            Node::Operation {
                operation: other_operation,
                lhs: other_lhs,
                rhs: other_rhs,
                ..
            },
        ) = (self, other)
        {
            if operation == other_operation {
                if lhs.is_semantically_equal(other_lhs) && rhs.is_semantically_equal(other_rhs) {
                    return true;
                }
                if operation.is_commutative()
                    && lhs.is_semantically_equal(other_rhs)
                    && rhs.is_semantically_equal(other_lhs)
                {
                    return true;
                }
            }
        }

        self.step_values(Grouping::Precedence) == other.step_values(Grouping::Precedence)
    }

    /// Sorted intermediate results, one per step
    pub fn step_values(&self, grouping: Grouping) -> Vec<u64> {
        let Node::Operation {
            operation,
            lhs,
            rhs,
            value,
        } = self
        else {
            return Vec::new();
        };

        let mut values = lhs.partial_values(*operation, grouping);
        values.extend(rhs.partial_values(*operation, grouping));
        values.push(*value);
        values.sort_unstable();
        values
    }

    fn partial_values(&self, outer: Operation, grouping: Grouping) -> Vec<u64> {
        match self {
            Node::Operation {
                operation,
                lhs,
                rhs,
                ..
            } if grouping.groups(outer, *operation) => {
                let mut values = lhs.partial_values(*operation, grouping);
                values.extend(rhs.partial_values(*operation, grouping));
                values
            }
            _ => self.step_values(grouping),
        }
    }

    /// Sum of the operation weights; multiplication and division cost more
    pub fn complexity(&self) -> usize {
        match self {
            Node::Number(_) => 0,
            Node::Operation {
                operation,
                lhs,
                rhs,
                ..
            } => lhs.complexity() + rhs.complexity() + operation.complexity(),
        }
    }

    /// Fewer steps, then shorter steps
    pub fn is_shorter(&self, other: &Node) -> bool {
        self.step_lengths().cmp(&other.step_lengths()) == Ordering::Less
    }

    /// Lower complexity, then fewer and shorter steps
    pub fn is_less_complex(&self, other: &Node) -> bool {
        let (count, length) = self.step_lengths();
        let (other_count, other_length) = other.step_lengths();
        (self.complexity(), count, length).cmp(&(other.complexity(), other_count, other_length))
            == Ordering::Less
    }

    fn step_lengths(&self) -> (usize, usize) {
        let steps = self.steps(Grouping::Precedence);
        let length = steps.iter().map(|step| step.chars().count()).sum();
        (steps.len(), length)
    }
}

#[cfg(test)]
mod tests {
    use super::super::node::tests::{add, mul, sub};
    use super::*;

    fn assert_all_equal(nodes: &[Node]) {
        for node in nodes {
            for other in nodes {
                assert!(node.is_semantically_equal(other), "{node} differs from {other}");
            }
        }
    }

    #[test]
    fn test_reordered_numbers_are_equal() {
        assert_all_equal(&[
            mul(2, mul(3, 4)),
            mul(2, mul(4, 3)),
            mul(3, mul(2, 4)),
            mul(3, mul(4, 2)),
            mul(4, mul(2, 3)),
            mul(4, mul(3, 2)),
            mul(mul(3, 4), 2),
            mul(mul(4, 3), 2),
            mul(mul(2, 4), 3),
            mul(mul(4, 2), 3),
            mul(mul(2, 3), 4),
            mul(mul(3, 2), 4),
        ]);
    }

    #[test]
    fn test_reordered_subtrees_are_equal() {
        let base = mul(mul(20, 30), mul(40, 50));
        assert_all_equal(&[
            mul(mul(3, base.clone()), 2),
            mul(mul(2, base.clone()), 3),
            mul(2, mul(3, base.clone())),
            mul(3, mul(2, base.clone())),
            mul(mul(base.clone(), 3), 2),
            mul(mul(base.clone(), 2), 3),
            mul(2, mul(base.clone(), 3)),
            mul(3, mul(base.clone(), 2)),
            mul(mul(3, 2), base.clone()),
            mul(mul(2, 3), base.clone()),
            mul(base.clone(), mul(3, 2)),
            mul(base, mul(2, 3)),
        ]);
    }

    #[test]
    fn test_regrouped_subtrees_are_equal() {
        let base = mul(mul(20, 30), mul(40, 50));
        assert_all_equal(&[
            mul(mul(2, 3), mul(4, base.clone())),
            mul(mul(2, 4), mul(3, base.clone())),
            mul(mul(3, 4), mul(2, base.clone())),
            mul(mul(3, 2), mul(4, base.clone())),
            mul(mul(4, 2), mul(3, base.clone())),
            mul(mul(4, 3), mul(2, base)),
        ]);
    }

    #[test]
    fn test_different_calculations_differ() {
        // Single steps with the same result count as the same calculation
        assert!(mul(4, 3).is_semantically_equal(&add(10, 2)));

        assert!(!mul(mul(2, 3), 2).is_semantically_equal(&add(mul(2, 5), 2)));
        assert!(!add(mul(3, 3), 3).is_semantically_equal(&mul(3, 4)));
        assert!(!sub(20, 8).is_semantically_equal(&add(10, 3)));
    }

    #[test]
    fn test_complexity_ordering() {
        let sum = add(add(5, 4), 3);
        let product = mul(4, 3);
        assert_eq!(sum.complexity(), 2);
        assert_eq!(product.complexity(), 5);
        assert!(sum.is_less_complex(&product));
        assert!(!product.is_less_complex(&sum));
        assert!(product.is_shorter(&add(add(5, 4), add(2, 1))));
        assert!(!sum.is_less_complex(&sum));
    }
}
