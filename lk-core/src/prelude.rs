//! This module reimports commonly used types.

pub use crate::models::common::{Dimension, Distance, Gain, Node};
pub use crate::models::{AlternatingWalk, Problem, Tour};

pub use crate::solver::candidates::{CandidateEdgeKind, CandidateEdges};
pub use crate::solver::search::{LinKernighan, SearchConfig};
pub use crate::solver::{LinKernighanSolver, SolverConfig};

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::{GenericError, GenericResult};
