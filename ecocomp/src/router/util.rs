use ecocomp_core::CompareError;

/// Join two fetches and apply an optional request-level deadline.
///
/// Both futures are polled concurrently. On timeout, returns
/// `CompareError::RequestTimeout("compare")`.
pub async fn join_pair_with_deadline<A, B>(
    first: A,
    second: B,
    deadline: Option<std::time::Duration>,
) -> Result<(A::Output, B::Output), CompareError>
where
    A: std::future::Future,
    B: std::future::Future,
{
    crate::core::with_request_deadline(deadline, "compare", futures::future::join(first, second))
        .await
}

/// Collapse the outcome of the two fetches of a comparison.
///
/// Rules:
/// - Both succeeded → both series.
/// - Either failed → that error; no partial result.
/// - Both failed → the first (country1) error.
pub fn collapse_pair<T>(
    first: Result<T, CompareError>,
    second: Result<T, CompareError>,
) -> Result<(T, T), CompareError> {
    match (first, second) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), _) | (Ok(_), Err(e)) => Err(e),
    }
}
