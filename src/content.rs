use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::gallery::{Categorized, Keyed};

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(load_portfolio);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
    #[error("Duplicate key '{key}' in {list}")]
    DuplicateKey { list: &'static str, key: String },
    #[error("Skill '{name}' has level {level}, expected 0-100")]
    LevelOutOfRange { name: String, level: u8 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub site: SiteConfig,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub timeline: Vec<TimelineEvent>,
    pub skills: Vec<SkillEntry>,
    pub skill_stats: Vec<Stat>,
    pub projects: Vec<Project>,
    pub project_stats: Vec<Stat>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<Certification>,
    pub contact: ContactContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    pub brand: String,
    pub email: String,
    pub base_path: String,
    pub default_subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

impl Keyed for Link {
    fn key(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub tagline: String,
    pub specialties: Vec<String>,
    pub socials: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

impl Keyed for Highlight {
    fn key(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub paragraphs: Vec<String>,
    pub featured: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub current_role: Highlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Work,
    Education,
    Achievement,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Work => "Work",
            EventKind::Education => "Education",
            EventKind::Achievement => "Achievement",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub date: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub kind: EventKind,
    pub description: String,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Keyed for TimelineEvent {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Backend,
    Frontend,
    Cloud,
    Database,
    Design,
    Devops,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Backend => "Backend Development",
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Cloud => "Cloud & Infrastructure",
            SkillCategory::Database => "Database Management",
            SkillCategory::Design => "Design & UX",
            SkillCategory::Devops => "DevOps & Tools",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
    pub technologies: Vec<String>,
}

impl Keyed for SkillEntry {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Categorized for SkillEntry {
    type Category = SkillCategory;

    fn category(&self) -> SkillCategory {
        self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Backend,
    Frontend,
    Fullstack,
    Automation,
    Analytics,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Backend => "Backend",
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Fullstack => "Fullstack",
            ProjectCategory::Automation => "Automation",
            ProjectCategory::Analytics => "Analytics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Completed,
    Ongoing,
    Archived,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub year: String,
    pub impact: String,
    pub features: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl Keyed for Project {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Categorized for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationKind {
    Degree,
    Certification,
    Course,
}

impl EducationKind {
    pub fn label(&self) -> &'static str {
        match self {
            EducationKind::Degree => "Degree",
            EducationKind::Certification => "Certification",
            EducationKind::Course => "Course",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub duration: String,
    #[serde(default)]
    pub grade: Option<String>,
    pub description: String,
    pub highlights: Vec<String>,
    pub kind: EducationKind,
}

impl Keyed for EducationEntry {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationStatus {
    Completed,
    InProgress,
}

impl CertificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CertificationStatus::Completed => "Completed",
            CertificationStatus::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub status: CertificationStatus,
}

impl Keyed for Certification {
    fn key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    pub href: String,
}

impl ContactChannel {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

impl Keyed for ContactChannel {
    fn key(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub intro: String,
    pub channels: Vec<ContactChannel>,
    pub actions: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Keyed for Stat {
    fn key(&self) -> &str {
        &self.label
    }
}

fn ensure_unique<T: Keyed>(list: &'static str, items: &[T]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.key()) {
            return Err(ContentError::DuplicateKey {
                list,
                key: item.key().to_string(),
            });
        }
    }
    Ok(())
}

impl Portfolio {
    pub fn validate(&self) -> Result<(), ContentError> {
        ensure_unique("hero.socials", &self.hero.socials)?;
        ensure_unique("about.highlights", &self.about.highlights)?;
        ensure_unique("timeline", &self.timeline)?;
        ensure_unique("skills", &self.skills)?;
        ensure_unique("skill_stats", &self.skill_stats)?;
        ensure_unique("projects", &self.projects)?;
        ensure_unique("project_stats", &self.project_stats)?;
        ensure_unique("education", &self.education)?;
        ensure_unique("certifications", &self.certifications)?;
        ensure_unique("contact.channels", &self.contact.channels)?;
        ensure_unique("contact.actions", &self.contact.actions)?;
        if let Some(s) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::LevelOutOfRange {
                name: s.name.clone(),
                level: s.level,
            });
        }
        Ok(())
    }
}

pub fn parse_portfolio(raw: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio =
        serde_json::from_str(raw).map_err(|e| ContentError::ParseError(e.to_string()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

pub fn load_portfolio() -> Result<Portfolio, ContentError> {
    let file = Assets::get(PORTFOLIO_FILE)
        .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
    let raw = std::str::from_utf8(&file.data)
        .map_err(|e| ContentError::ParseError(e.to_string()))?;
    parse_portfolio(raw)
}

/// The embedded portfolio, parsed once per process.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{categories, filter_items, CategoryFilter};

    #[test]
    fn test_embedded_portfolio_loads() {
        let p = portfolio().expect("embedded content should be valid");
        assert!(!p.site.email.is_empty());
        assert!(p.site.base_path.starts_with('/'));
        assert!(p.site.base_path.ends_with('/'));
        assert_eq!(p.timeline.len(), 5);
        assert_eq!(p.projects.len(), 6);
        assert_eq!(p.skills.len(), 14);
        assert_eq!(p.education.len(), 1);
        assert_eq!(p.certifications.len(), 4);
    }

    #[test]
    fn test_embedded_project_filters() {
        let p = portfolio().unwrap();
        assert_eq!(
            categories(&p.projects),
            vec![
                ProjectCategory::Backend,
                ProjectCategory::Analytics,
                ProjectCategory::Fullstack,
                ProjectCategory::Automation,
            ]
        );
        let labels: Vec<_> = categories(&p.projects).iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Backend", "Analytics", "Fullstack", "Automation"]);
        let backend = filter_items(&p.projects, CategoryFilter::Only(ProjectCategory::Backend));
        assert_eq!(backend.len(), 3);
        // No frontend projects exist; the gallery is simply empty
        assert!(filter_items(&p.projects, CategoryFilter::Only(ProjectCategory::Frontend)).is_empty());
        assert_eq!(filter_items(&p.projects, CategoryFilter::All).len(), p.projects.len());
    }

    #[test]
    fn test_embedded_skill_filters() {
        let p = portfolio().unwrap();
        let cats = categories(&p.skills);
        assert_eq!(cats.len(), 6);
        let total: usize = cats
            .iter()
            .map(|c| filter_items(&p.skills, CategoryFilter::Only(*c)).len())
            .sum();
        assert_eq!(total, p.skills.len());
    }

    fn minimal(extra_skill: &str) -> String {
        format!(
            r#"{{
                "site": {{
                    "owner": "Test Person",
                    "brand": "TP",
                    "email": "tp@example.com",
                    "base_path": "/",
                    "default_subject": "Hi"
                }},
                "hero": {{ "tagline": "t", "specialties": [], "socials": [] }},
                "about": {{
                    "paragraphs": [],
                    "featured": [],
                    "highlights": [],
                    "current_role": {{ "title": "t", "description": "d" }}
                }},
                "timeline": [],
                "skills": [
                    {{ "name": "Rust", "level": 80, "category": "backend", "technologies": [] }}
                    {extra_skill}
                ],
                "skill_stats": [],
                "projects": [],
                "project_stats": [],
                "education": [],
                "certifications": [],
                "contact": {{ "intro": "i", "channels": [], "actions": [] }}
            }}"#
        )
    }

    #[test]
    fn test_parse_minimal() {
        let p = parse_portfolio(&minimal("")).unwrap();
        assert_eq!(p.skills[0].category, SkillCategory::Backend);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let raw = minimal(
            r#", { "name": "Rust", "level": 70, "category": "cloud", "technologies": [] }"#,
        );
        assert_eq!(
            parse_portfolio(&raw).unwrap_err(),
            ContentError::DuplicateKey {
                list: "skills",
                key: "Rust".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        let raw = minimal(
            r#", { "name": "Go", "level": 70, "category": "mobile", "technologies": [] }"#,
        );
        assert!(matches!(
            parse_portfolio(&raw),
            Err(ContentError::ParseError(_))
        ));
    }

    #[test]
    fn test_level_out_of_range_rejected() {
        let raw = minimal(
            r#", { "name": "Go", "level": 150, "category": "backend", "technologies": [] }"#,
        );
        assert!(matches!(
            parse_portfolio(&raw),
            Err(ContentError::LevelOutOfRange { level: 150, .. })
        ));
    }
}
