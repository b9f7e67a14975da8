use crate::Utility;
use std::sync::Arc;

/// A caller-supplied payoff function, called as `payoff(mine, theirs)`.
///
/// Must be pure: the matrix may be evaluated from several threads, and
/// every analysis assumes the same pair always yields the same payoff.
pub type Payoff<C> = Arc<dyn Fn(&C, &C) -> anyhow::Result<Utility> + Send + Sync>;

/// Wrap an infallible payoff function.
pub fn infallible<C, F>(f: F) -> Payoff<C>
where
    C: 'static,
    F: Fn(&C, &C) -> Utility + Send + Sync + 'static,
{
    Arc::new(move |mine: &C, theirs: &C| -> anyhow::Result<Utility> {
        Ok(f(mine, theirs))
    })
}
