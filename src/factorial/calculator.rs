//! Iterative factorial with a synthetic per-step delay.

use std::time::Duration;

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_INPUT: u32 = 34;

/// Delay inserted after every multiplication in production.
pub const STEP_DELAY: Duration = Duration::from_millis(10);

/// Compute `n!`, sleeping `step_delay` after each multiplication.
///
/// Runs inside a `fact` span that is closed when the future completes or is
/// dropped. The sleep suspends only this request's task.
///
/// Inputs above [`MAX_INPUT`] saturate at `u128::MAX`; callers validate
/// with [`parse_input`](super::parse_input) first.
#[tracing::instrument(name = "fact", level = "info", skip(step_delay))]
pub async fn factorial(n: u32, step_delay: Duration) -> u128 {
    let mut product: u128 = 1;
    for i in 1..=u128::from(n) {
        product = product.saturating_mul(i);
        tokio::time::sleep(step_delay).await;
    }
    product
}
