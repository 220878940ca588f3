use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// Experience levels hh.ru knows about. The display name is what the
/// `experience` dictionary carries, so it is what we match on remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Experience {
    NoExperience,
    Between1And3,
    Between3And6,
    MoreThan6,
}

lazy_static::lazy_static! {
    /// Every accepted spelling, lowercased.
    static ref EXPERIENCE_LABELS: HashMap<String, Experience> = {
        use Experience::*;
        let mut labels = HashMap::new();
        for exp in [NoExperience, Between1And3, Between3And6, MoreThan6] {
            labels.insert(exp.display_name().to_lowercase(), exp);
            labels.insert(exp.key().to_lowercase(), exp);
        }
        labels.insert("no experience".to_string(), NoExperience);
        labels.insert("1 to 3 years".to_string(), Between1And3);
        labels.insert("3 to 6 years".to_string(), Between3And6);
        labels.insert("more than 6 years".to_string(), MoreThan6);
        labels
    };
}

impl Experience {
    pub fn display_name(self) -> &'static str {
        match self {
            Experience::NoExperience => "Нет опыта",
            Experience::Between1And3 => "От 1 года до 3 лет",
            Experience::Between3And6 => "От 3 до 6 лет",
            Experience::MoreThan6 => "Более 6 лет",
        }
    }

    /// The id hh.ru has historically used for this level. Only used as an
    /// accepted spelling; the real id always comes from the dictionary.
    pub fn key(self) -> &'static str {
        match self {
            Experience::NoExperience => "noExperience",
            Experience::Between1And3 => "between1And3",
            Experience::Between3And6 => "between3And6",
            Experience::MoreThan6 => "moreThan6",
        }
    }
}

impl FromStr for Experience {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        EXPERIENCE_LABELS
            .get(&label.to_lowercase())
            .copied()
            .ok_or_else(|| Error::InvalidEnumValue {
                value: label.to_string(),
            })
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub id: String,
    pub name: String,
}

/// Response of `GET /dictionaries`. Only the experience category is kept.
#[derive(Debug, Deserialize, Clone)]
pub struct Dictionaries {
    #[serde(default)]
    pub experience: Vec<DictionaryEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Area {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub areas: Vec<Area>,
}

/// One page of `GET /vacancies`. Items stay opaque.
#[derive(Debug, Deserialize, Clone)]
pub struct VacancyPage {
    pub pages: u32,
    pub items: Vec<Value>,
    #[serde(default)]
    pub found: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl VacancyPage {
    /// Whether `page` (zero-based) is the last one. A report of zero pages
    /// still counts the first page as the last.
    pub fn is_last(&self, page: u32) -> bool {
        page.saturating_add(1) >= self.pages
    }
}

/// Everything one search returned, with the total the API reported on its
/// first page.
#[derive(Debug, Clone)]
pub struct Collected {
    pub items: Vec<Value>,
    pub found: Option<u64>,
    pub pages: u32,
}

/// Query string for `GET /vacancies`. `page` is advanced in place while
/// collecting.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct VacancyFilter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    pub per_page: u32,
    pub page: u32,
}

impl VacancyFilter {
    pub fn new(text: impl Into<String>, per_page: u32) -> Self {
        Self {
            text: text.into(),
            area: None,
            experience: None,
            per_page,
            page: 0,
        }
    }

    pub fn with_area(mut self, area_id: impl Into<String>) -> Self {
        self.area = Some(area_id.into());
        self
    }

    pub fn with_experience(mut self, experience_id: impl Into<String>) -> Self {
        self.experience = Some(experience_id.into());
        self
    }
}
