use super::variable::Variable;

/// Product of a coefficient and zero or more variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonLinearTerm<F> {
    /// Scalar coefficient.
    pub coeff: F,
    /// Multiplied variables, in order.
    pub vars: Vec<Variable>,
}

impl<F> NonLinearTerm<F> {
    /// Creates a term.
    pub fn new(coeff: F, vars: Vec<Variable>) -> Self {
        Self { coeff, vars }
    }

    /// Number of variables multiplied together.
    pub fn degree(&self) -> usize {
        self.vars.len()
    }
}

/// Sum of non-linear terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonLinearCombination<F> {
    /// Summed terms, in order.
    pub terms: Vec<NonLinearTerm<F>>,
}

/// A gate constraint is a combination required to vanish.
pub type Constraint<F> = NonLinearCombination<F>;

impl<F> NonLinearCombination<F> {
    /// Creates a combination from its terms.
    pub fn new(terms: Vec<NonLinearTerm<F>>) -> Self {
        Self { terms }
    }

    /// Highest term degree, zero when empty.
    pub fn degree(&self) -> usize {
        self.terms.iter().map(NonLinearTerm::degree).max().unwrap_or(0)
    }

    /// Iterates over every variable in term order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.terms.iter().flat_map(|term| term.vars.iter())
    }
}

impl<F> Default for NonLinearCombination<F> {
    fn default() -> Self {
        Self { terms: Vec::new() }
    }
}

impl<F> From<Vec<NonLinearTerm<F>>> for NonLinearCombination<F> {
    fn from(terms: Vec<NonLinearTerm<F>>) -> Self {
        Self::new(terms)
    }
}
