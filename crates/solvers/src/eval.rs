/// An objective wrapper that counts its evaluations.
pub(crate) struct Counted<F> {
    f: F,
    evals: usize,
}

impl<F> Counted<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f, evals: 0 }
    }

    /// Evaluates the wrapped objective at `x`.
    pub(crate) fn call<X>(&mut self, x: X) -> f64
    where
        F: FnMut(X) -> f64,
    {
        self.evals += 1;
        (self.f)(x)
    }

    /// Returns the number of evaluations so far.
    pub(crate) fn evals(&self) -> usize {
        self.evals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_call() {
        let mut f = Counted::new(|x: f64| x * x);

        assert_eq!(f.evals(), 0);
        let _ = f.call(2.0);
        let _ = f.call(3.0);
        assert_eq!(f.evals(), 2);
    }
}
