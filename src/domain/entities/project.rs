use serde::Serialize;

/// One showcase entry. Defined statically and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub problem: &'static str,
    pub role: &'static str,
    pub features: &'static [&'static str],
    pub impact: &'static str,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
