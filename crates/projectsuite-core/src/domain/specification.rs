//! Specification pattern for composable business rules
//!
//! Specifications are predicate objects combined with boolean logic. The
//! combinators are generic, so a composed rule is one concrete type; box it
//! when the shape is only known at runtime. Conjunction is the job of the
//! stage pipeline in each builder.

/// A rule an entity either satisfies or not
pub trait Specification<T>: Send + Sync {
    /// Check if the entity satisfies this specification
    fn is_satisfied_by(&self, entity: &T) -> bool;

    /// Either rule may hold
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or(self, other)
    }

    /// Negate this specification
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<T, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        (**self).is_satisfied_by(entity)
    }
}

/// Disjunction; the right side is skipped when the left holds
#[derive(Debug, Clone, Copy)]
pub struct Or<L, R>(L, R);

impl<T, L, R> Specification<T> for Or<L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.0.is_satisfied_by(entity) || self.1.is_satisfied_by(entity)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Not<S>(S);

impl<T, S> Specification<T> for Not<S>
where
    S: Specification<T>,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        !self.0.is_satisfied_by(entity)
    }
}
