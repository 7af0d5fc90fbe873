use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// Competence level of a skill, ordered from least to most proficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub const ALL: [Proficiency; 4] = [
        Proficiency::Beginner,
        Proficiency::Intermediate,
        Proficiency::Advanced,
        Proficiency::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
        }
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Proficiency::Beginner),
            "intermediate" => Ok(Proficiency::Intermediate),
            "advanced" => Ok(Proficiency::Advanced),
            "expert" => Ok(Proficiency::Expert),
            _ => Err(format!("Unknown proficiency level: {}", s)),
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub color: Option<String>,
    pub proficiency: Proficiency,
    /// Title of the owning category.
    pub category: String,
    pub years_of_experience: Option<f32>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_highlighted: bool,
}

impl Skill {
    pub fn new(name: &str, icon: &str, proficiency: Proficiency) -> Self {
        Skill {
            name: name.to_string(),
            icon: icon.to_string(),
            color: None,
            proficiency,
            category: String::new(),
            years_of_experience: None,
            description: None,
            is_highlighted: false,
        }
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn years(mut self, years: f32) -> Self {
        self.years_of_experience = Some(years.max(0.0));
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.is_highlighted = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Lower values are displayed first.
    pub priority: i32,
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    /// Builds a category and points every skill back at it.
    pub fn new(title: &str, description: &str, icon: &str, priority: i32, skills: Vec<Skill>) -> Self {
        let skills = skills
            .into_iter()
            .map(|mut skill| {
                skill.category = title.to_string();
                skill
            })
            .collect();

        SkillCategory {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            priority,
            skills,
        }
    }

    /// Same category metadata carrying a different skill list.
    pub fn with_skills(&self, skills: Vec<Skill>) -> Self {
        SkillCategory {
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            priority: self.priority,
            skills,
        }
    }
}

/// Validated, immutable collection of skill categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<SkillCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<SkillCategory>) -> Result<Self, CatalogError> {
        let mut titles = HashSet::new();

        for category in &categories {
            if !titles.insert(category.title.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.title.clone()));
            }

            let mut names = HashSet::new();
            for skill in &category.skills {
                if skill.category != category.title {
                    return Err(CatalogError::OrphanedSkill {
                        skill: skill.name.clone(),
                        claimed: skill.category.clone(),
                        owner: category.title.clone(),
                    });
                }
                if !names.insert(skill.name.as_str()) {
                    return Err(CatalogError::DuplicateSkill {
                        category: category.title.clone(),
                        skill: skill.name.clone(),
                    });
                }
            }
        }

        Ok(Catalog { categories })
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn category(&self, title: &str) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| c.title == title)
    }

    /// Category titles in display order, as offered by the category filter.
    pub fn titles(&self) -> Vec<&str> {
        let mut ordered: Vec<&SkillCategory> = self.categories.iter().collect();
        ordered.sort_by_key(|c| c.priority);
        ordered.into_iter().map(|c| c.title.as_str()).collect()
    }

    pub fn total_skills(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }

    pub fn highlighted(&self) -> Vec<&Skill> {
        let mut ordered: Vec<&SkillCategory> = self.categories.iter().collect();
        ordered.sort_by_key(|c| c.priority);
        ordered
            .into_iter()
            .flat_map(|c| c.skills.iter())
            .filter(|s| s.is_highlighted)
            .collect()
    }
}
