//! Composite termination condition.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates when ANY wrapped termination does.
///
/// # Examples
///
/// ```
/// use colormerge_solver::scope::SearchScope;
/// use colormerge_solver::termination::{
///     NodeCountTermination, OrTermination, Termination, TimeTermination,
/// };
///
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(0),
/// ));
/// assert!(termination.is_terminated(&SearchScope::new()));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T: Termination),+> Termination for OrTermination<($($T,)+)> {
            fn is_terminated(&self, scope: &SearchScope) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
