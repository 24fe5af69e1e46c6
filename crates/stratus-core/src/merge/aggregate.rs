//! Multi-application response aggregation.

use crate::response::ConfigResponse;
use tracing::debug;

/// Combines per-application responses into one synthesized response.
///
/// Responses must be given in the caller's configured application order.
/// The *last* application is the highest-priority one: the response list
/// is reversed before concatenating each response's own (already
/// priority-ordered) property sources, so the final source order is
/// `[last app's sources, ..., first app's sources]`. Source order inside
/// each response is never touched.
///
/// Aggregate metadata: `name` is the comma-joined application names in
/// their original order; `profiles`, `label`, `version` and `state` are
/// taken verbatim from the last-configured application's response, not
/// merged.
///
/// Returns `None` when given no responses.
pub fn aggregate_responses(responses: Vec<ConfigResponse>) -> Option<ConfigResponse> {
    let last = responses.last()?;

    let name = responses
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut aggregate = ConfigResponse::new(name, last.profiles.clone());
    aggregate.label = last.label.clone();
    aggregate.version = last.version.clone();
    aggregate.state = last.state.clone();

    for response in responses.into_iter().rev() {
        aggregate.property_sources.extend(response.property_sources);
    }

    debug!(
        "aggregated {} property sources for '{}'",
        aggregate.len(),
        aggregate.name
    );

    Some(aggregate)
}
