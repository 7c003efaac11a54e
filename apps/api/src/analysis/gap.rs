/// Required skills not present in `found`, in requirement order.
pub fn compute_missing_skills(required: &[String], found: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|skill| !found.contains(skill))
        .cloned()
        .collect()
}

/// Required skills present in `found`, in requirement order.
pub fn compute_matched_skills(required: &[String], found: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|skill| found.contains(skill))
        .cloned()
        .collect()
}
