use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::skill::{Proficiency, Skill, SkillCategory};

/// Proficiency selection. Parsing never fails: labels that are neither
/// exactly `all` nor exactly a known level become `Unrecognized` and match
/// nothing. Case and surrounding whitespace are significant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProficiencyFilter {
    #[default]
    All,
    Only(Proficiency),
    Unrecognized(String),
}

impl ProficiencyFilter {
    pub fn matches(&self, proficiency: Proficiency) -> bool {
        match self {
            ProficiencyFilter::All => true,
            ProficiencyFilter::Only(level) => *level == proficiency,
            ProficiencyFilter::Unrecognized(_) => false,
        }
    }

    pub fn parse(label: &str) -> Self {
        if label == "all" {
            return ProficiencyFilter::All;
        }
        match label.parse::<Proficiency>() {
            Ok(level) => ProficiencyFilter::Only(level),
            Err(_) => ProficiencyFilter::Unrecognized(label.to_string()),
        }
    }
}

impl From<&str> for ProficiencyFilter {
    fn from(label: &str) -> Self {
        ProficiencyFilter::parse(label)
    }
}

impl From<Proficiency> for ProficiencyFilter {
    fn from(level: Proficiency) -> Self {
        ProficiencyFilter::Only(level)
    }
}

impl fmt::Display for ProficiencyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProficiencyFilter::All => write!(f, "all"),
            ProficiencyFilter::Only(level) => write!(f, "{}", level),
            ProficiencyFilter::Unrecognized(label) => write!(f, "{}", label),
        }
    }
}

impl Serialize for ProficiencyFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProficiencyFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ProficiencyFilter::parse(&label))
    }
}

/// Active filter selections for one interaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub proficiency: ProficiencyFilter,
    /// `None` means every category.
    pub category: Option<String>,
    pub search_query: String,
}

impl FilterCriteria {
    pub fn new(proficiency: impl Into<ProficiencyFilter>, category: Option<&str>, search_query: &str) -> Self {
        FilterCriteria {
            proficiency: proficiency.into(),
            category: category.map(str::to_string),
            search_query: search_query.to_string(),
        }
    }

    pub fn has_active_filters(&self) -> bool {
        self.proficiency != ProficiencyFilter::All
            || self.category.is_some()
            || !self.search_query.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    pub fn matches_category(&self, category: &SkillCategory) -> bool {
        self.category
            .as_deref()
            .is_none_or(|title| title == category.title)
    }

    /// Lowercased, trimmed search text; `None` when it matches everything.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    pub fn matches_skill(&self, category: &SkillCategory, skill: &Skill, needle: Option<&str>) -> bool {
        self.proficiency.matches(skill.proficiency) && matches_search(category, skill, needle)
    }
}

fn matches_search(category: &SkillCategory, skill: &Skill, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };

    skill.name.to_lowercase().contains(needle)
        || skill
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || category.title.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_and_known_levels() {
        assert_eq!(ProficiencyFilter::parse("all"), ProficiencyFilter::All);
        assert_eq!(
            ProficiencyFilter::parse("advanced"),
            ProficiencyFilter::Only(Proficiency::Advanced)
        );
    }

    #[test]
    fn labels_must_match_exactly() {
        for label in ["ALL", "All", " all", "Expert", "expert ", "ADVANCED"] {
            assert_eq!(
                ProficiencyFilter::parse(label),
                ProficiencyFilter::Unrecognized(label.to_string())
            );
        }
    }

    #[test]
    fn unknown_label_matches_nothing() {
        let filter = ProficiencyFilter::parse("wizard");
        assert!(Proficiency::ALL.iter().all(|p| !filter.matches(*p)));
    }

    #[test]
    fn proficiency_match_is_exact_not_at_least() {
        let filter = ProficiencyFilter::Only(Proficiency::Advanced);
        assert!(filter.matches(Proficiency::Advanced));
        assert!(!filter.matches(Proficiency::Expert));
    }

    #[test]
    fn whitespace_search_is_inactive() {
        let criteria = FilterCriteria::new(ProficiencyFilter::All, None, "   ");
        assert!(!criteria.has_active_filters());
        assert_eq!(criteria.search_needle(), None);
    }

    #[test]
    fn clear_resets_every_selection() {
        let mut criteria = FilterCriteria::new(Proficiency::Expert, Some("Frontend"), "react");
        assert!(criteria.has_active_filters());

        criteria.clear();

        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn deserializes_from_ui_state() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{"proficiency":"expert","category":null,"searchQuery":"REACT"}"#,
        )
        .unwrap();

        assert_eq!(criteria.proficiency, ProficiencyFilter::Only(Proficiency::Expert));
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.search_needle().as_deref(), Some("react"));
    }
}
