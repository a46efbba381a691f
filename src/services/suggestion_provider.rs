// src/services/suggestion_provider.rs
// Provides "did you mean" suggestions for unrecognized values

use crate::domain::options::DeploymentMechanism;

/// Candidates scoring at or below this are not worth suggesting
const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Suggest the closest deployment mechanism name for an unrecognized value
pub(crate) fn suggest_deployment_mechanism(value: &str) -> Option<String> {
    find_most_similar(&value.to_ascii_lowercase(), &DeploymentMechanism::NAMES)
}

/// Find the most similar candidate using string similarity
fn find_most_similar(target: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (*candidate, strsim::jaro_winkler(target, candidate)))
        .filter(|(_, similarity)| *similarity > SIMILARITY_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name.to_string())
}
