use serde::Serialize;

use crate::entities::{
    filter::FilterCriteria,
    skill::{Catalog, Skill, SkillCategory},
};

/// Derived counts for a filter result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSummary {
    pub category_count: usize,
    pub skill_count: usize,
}

impl FilterSummary {
    pub fn of(categories: &[SkillCategory]) -> Self {
        FilterSummary {
            category_count: categories.len(),
            skill_count: categories.iter().map(|c| c.skills.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skill_count == 0
    }
}

/// Returns the categories that still hold matching skills, ordered by priority.
///
/// A skill survives only if it passes the proficiency, category and search
/// predicates together. Categories left with no skills are dropped. The input
/// is never modified.
pub fn filter_catalog(categories: &[SkillCategory], criteria: &FilterCriteria) -> Vec<SkillCategory> {
    let needle = criteria.search_needle();

    let mut retained: Vec<SkillCategory> = categories
        .iter()
        .filter(|category| criteria.matches_category(category))
        .filter_map(|category| {
            let skills: Vec<Skill> = category
                .skills
                .iter()
                .filter(|skill| criteria.matches_skill(category, skill, needle.as_deref()))
                .cloned()
                .collect();

            (!skills.is_empty()).then(|| category.with_skills(skills))
        })
        .collect();

    // stable: equal priorities keep catalog order
    retained.sort_by_key(|c| c.priority);
    retained
}

impl Catalog {
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<SkillCategory> {
        filter_catalog(self.categories(), criteria)
    }
}

/// Splits skills into at most two display rows, the first never shorter.
pub fn split_into_balanced_rows(skills: &[Skill]) -> Vec<&[Skill]> {
    match skills.len() {
        0 => Vec::new(),
        1 | 2 => vec![skills],
        n => {
            let (top, bottom) = skills.split_at(n.div_ceil(2));
            vec![top, bottom]
        }
    }
}
