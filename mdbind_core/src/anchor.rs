/// Anchor slug for a topic or directory name: lowercased, spaces become
/// hyphens.
pub fn anchor_for(name: &str) -> String {
	name.to_lowercase().replace(' ', "-")
}

/// Anchor slug for a path segment taken from a link target. Percent-encoded
/// spaces are treated like literal ones.
pub fn anchor_for_link_segment(segment: &str) -> String {
	anchor_for(segment).replace("%20", "-")
}
