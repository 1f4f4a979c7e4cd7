use crate::expression::Operator;

/// When the solver may evaluate only the first shape for an operator tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortCircuit {
    /// Every shape is always evaluated
    Disabled,
    /// Only when the whole tuple repeats a single associative and
    /// commutative operator, where the shape provably cannot matter
    UniformOperator,
    /// Whenever every operator of the tuple is associative and commutative
    /// (no subtraction or division). Mixed `+`/`*` tuples do depend on the
    /// shape, so this can miss solutions that only one bracketing reaches.
    #[default]
    AssociativeOperators,
}

impl ShortCircuit {
    /// Whether a single shape is enough for `operators`
    pub fn applies(self, operators: &[Operator]) -> bool {
        match self {
            ShortCircuit::Disabled => false,
            ShortCircuit::UniformOperator => operators.first().is_none_or(|first| {
                first.is_associative_commutative() && operators.iter().all(|op| op == first)
            }),
            ShortCircuit::AssociativeOperators => operators
                .iter()
                .all(|op| op.is_associative_commutative()),
        }
    }
}

/// Configuration for the expression search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub short_circuit: ShortCircuit,
    /// Spread operator tuples over the rayon pool. Results and their order
    /// are the same as a sequential search.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            short_circuit: ShortCircuit::default(),
            parallel: true,
        }
    }
}
