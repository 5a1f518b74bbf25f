use std::collections::HashSet;
use std::fmt;
use std::ops::ControlFlow;

use kanal::AsyncReceiver;

use super::node::{Grouping, Node};
use super::operation::Operation;
use crate::error::NumbersError;

/// Stream of distinct solutions. A failure, if any, is the last item.
pub type NumberSolutions = AsyncReceiver<Result<Solution, NumbersError>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionReason {
    New,
    /// Replaces an equivalent solution, given as its steps
    Simpler { replaced: Vec<String> },
}

impl fmt::Display for SolutionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionReason::New => write!(f, "Found a new solution"),
            SolutionReason::Simpler { replaced } => write!(
                f,
                "Found a less complex solution instead of [{}]",
                replaced.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub reason: SolutionReason,
    pub node: Node,
}

/// Combines numbers with the allowed operations to reach a target
#[derive(Debug, Clone)]
pub struct NumberSolver {
    target: u64,
    numbers: Vec<u64>,
    operations: Vec<Operation>,
}

impl NumberSolver {
    pub fn new(
        target: u64,
        numbers: &[u64],
        operations: &[Operation],
    ) -> Result<Self, NumbersError> {
        if numbers.contains(&0) {
            return Err(NumbersError::NotPositive);
        }
        if operations.is_empty() {
            return Err(NumbersError::NoOperations);
        }

        let mut numbers = numbers.to_vec();
        numbers.sort_unstable_by(|a, b| b.cmp(a));

        Ok(Self {
            target,
            numbers,
            operations: operations.to_vec(),
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    /// Every reduced tree that reaches the target, in search order,
    /// until `found` breaks
    pub fn search<F>(&self, mut found: F)
    where
        F: FnMut(Node) -> ControlFlow<()>,
    {
        let nodes: Vec<Node> = self.numbers.iter().copied().map(Node::Number).collect();
        let _ = self.build(&nodes, &mut found);
    }

    fn build(
        &self,
        nodes: &[Node],
        found: &mut dyn FnMut(Node) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        if let Some(node) = nodes.iter().find(|node| node.value() == self.target) {
            found(node.reduced())?;
        }

        for first in 0..nodes.len() {
            for second in first + 1..nodes.len() {
                let (lhs, rhs) = (&nodes[first], &nodes[second]);
                for &operation in &self.operations {
                    let Some(value) = operation.perform(lhs.value(), rhs.value()) else {
                        continue;
                    };
                    // Results that repeat an operand get nowhere
                    if value == lhs.value() || value == rhs.value() {
                        continue;
                    }

                    let mut next = nodes.to_vec();
                    next.remove(second);
                    next.remove(first);
                    next.insert(0, Node::operation(operation, lhs.clone(), rhs.clone(), value));
                    self.build(&next, found)?;
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Distinct solutions as they are found. A solution equivalent to an
    /// earlier one is reported only when it is less complex, and replaces it.
    pub fn solutions<F>(&self, mut on_solution: F) -> Result<(), NumbersError>
    where
        F: FnMut(Solution) -> ControlFlow<()>,
    {
        let mut known = KnownSolutions::default();
        self.search(|node| match known.offer(node) {
            Some(solution) => on_solution(solution),
            None => ControlFlow::Continue(()),
        });

        if known.is_empty() {
            return Err(NumbersError::Unsolvable);
        }
        tracing::debug!("{} distinct solutions for {}", known.len(), self.target);
        Ok(())
    }

    /// Run [`Self::solutions`] on a blocking task. Dropping the receiver stops the search.
    pub fn stream(self, capacity: usize) -> NumberSolutions {
        let (tx, rx) = kanal::bounded(capacity);

        tokio::task::spawn_blocking(move || {
            let result = self.solutions(|solution| {
                if tx.send(Ok(solution)).is_err() {
                    tracing::debug!("Receiver dropped, stopping number search");
                    return ControlFlow::Break(());
                }
                ControlFlow::Continue(())
            });
            if let Err(e) = result {
                let _ = tx.send(Err(e));
            }
        });

        rx.to_async()
    }
}

#[derive(Default)]
struct KnownSolutions {
    seen: HashSet<Node>,
    ordered: Vec<Node>,
}

impl KnownSolutions {
    fn offer(&mut self, node: Node) -> Option<Solution> {
        if self.seen.contains(&node) {
            return None;
        }

        let mut reason = SolutionReason::New;
        if let Some(index) = self
            .ordered
            .iter()
            .position(|existing| node.is_semantically_equal(existing))
        {
            if !node.is_less_complex(&self.ordered[index]) {
                return None;
            }
            let replaced = self.ordered.remove(index);
            self.seen.remove(&replaced);
            reason = SolutionReason::Simpler {
                replaced: replaced.steps(Grouping::Precedence),
            };
        }

        self.seen.insert(node.clone());
        self.ordered.push(node.clone());
        Some(Solution { reason, node })
    }

    fn len(&self) -> usize {
        self.ordered.len()
    }

    fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
