use crate::domain::model::Priors;

/// Anything that can hand the calculator its three input probabilities.
pub trait PriorProvider {
    fn priors(&self) -> Priors;

    /// Whether inputs must be checked against [0, 1] before computing.
    fn strict(&self) -> bool {
        false
    }
}

impl PriorProvider for Priors {
    fn priors(&self) -> Priors {
        *self
    }
}

impl<T: PriorProvider + ?Sized> PriorProvider for &T {
    fn priors(&self) -> Priors {
        (**self).priors()
    }

    fn strict(&self) -> bool {
        (**self).strict()
    }
}
