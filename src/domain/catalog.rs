use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Skill category, drives the card style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
    Tool,
    Software,
    Technology,
    /// Anything the page sends that we don't know; rendered neutral.
    Unknown,
}

impl SkillCategory {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "language" => SkillCategory::Language,
            "framework" => SkillCategory::Framework,
            "tool" => SkillCategory::Tool,
            "software" => SkillCategory::Software,
            "technology" => SkillCategory::Technology,
            _ => SkillCategory::Unknown,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SkillCategory::Language => "language",
            SkillCategory::Framework => "framework",
            SkillCategory::Tool => "tool",
            SkillCategory::Software => "software",
            SkillCategory::Technology => "technology",
            SkillCategory::Unknown => "unknown",
        }
    }
}

/// One named item of the catalog. Becomes exactly one card.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    /// Brand color (`#RRGGBB`), purely decorative.
    pub color: Option<String>,
}

impl CatalogItem {
    pub fn new(id: &str, name: &str, category: SkillCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            color: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

#[derive(Deserialize)]
struct CatalogEntryJson {
    id: String,
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    color: Option<String>,
}

/// Ordered list of skills the widget visualizes
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    id_to_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build from items, keeping the first occurrence of each id.
    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut catalog = Catalog::default();
        for item in items {
            if catalog.id_to_index.contains_key(&item.id) {
                console_warn!("catalog: duplicate id '{}' ignored", item.id);
                continue;
            }
            catalog.id_to_index.insert(item.id.clone(), catalog.items.len());
            catalog.items.push(item);
        }
        catalog
    }

    /// Parse `[{ "id", "name", "category", "color"? }, ...]`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let entries: Vec<CatalogEntryJson> = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(Self::from_items(entries.into_iter().map(|entry| CatalogItem {
            id: entry.id,
            name: entry.name,
            category: SkillCategory::from_key(&entry.category),
            color: entry.color,
        })))
    }

    /// The portfolio's own skill list.
    pub fn builtin() -> Self {
        use SkillCategory::*;

        Self::from_items([
            CatalogItem::new("1", "React", Framework).with_color("#61DAFB"),
            CatalogItem::new("2", "TypeScript", Language).with_color("#3178C6"),
            CatalogItem::new("3", "JavaScript", Language).with_color("#F7DF1E"),
            CatalogItem::new("4", "Node.js", Framework).with_color("#339933"),
            CatalogItem::new("5", "Python", Language).with_color("#3776AB"),
            CatalogItem::new("6", "Java", Language).with_color("#ED8B00"),
            CatalogItem::new("7", "HTML5", Language).with_color("#E34F26"),
            CatalogItem::new("8", "CSS3", Language).with_color("#1572B6"),
            CatalogItem::new("9", "Tailwind CSS", Framework).with_color("#06B6D4"),
            CatalogItem::new("10", "Vue.js", Framework).with_color("#4FC08D"),
            CatalogItem::new("11", "Git", Tool).with_color("#F05032"),
            CatalogItem::new("12", "Docker", Tool).with_color("#2496ED"),
            CatalogItem::new("13", "MongoDB", Technology).with_color("#47A248"),
            CatalogItem::new("14", "PostgreSQL", Technology).with_color("#336791"),
            CatalogItem::new("15", "Figma", Software).with_color("#F24E1E"),
            CatalogItem::new("16", "VS Code", Software).with_color("#007ACC"),
            CatalogItem::new("17", "AWS", Technology).with_color("#232F3E"),
            CatalogItem::new("18", "Linux", Technology).with_color("#FCC624"),
        ])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.id_to_index.get(id).and_then(|&idx| self.items.get(idx))
    }
}
