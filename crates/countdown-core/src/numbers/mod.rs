//! The numbers round: expression trees over the drawn numbers, a
//! depth-first solver and the rules for telling solutions apart.

mod drawing;
mod node;
mod operation;
mod semantics;
mod solver;

pub use drawing::DEFAULT_SPACING;
pub use node::{Grouping, Node};
pub use operation::Operation;
pub use solver::{NumberSolutions, NumberSolver, Solution, SolutionReason};
