use super::catalog::SkillCategory;

/// Classes shared by every card regardless of category.
pub const CARD_BASE_CLASS: &str =
    "absolute border-2 rounded-lg px-4 py-2 backdrop-blur-md cursor-grab active:cursor-grabbing shadow-lg select-none";

/// Tailwind color classes for a category. Unknown categories get the neutral gray.
pub fn category_class(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Language => "bg-blue-500/30 border-blue-400/60 text-blue-200",
        SkillCategory::Framework => "bg-purple-500/30 border-purple-400/60 text-purple-200",
        SkillCategory::Tool => "bg-green-500/30 border-green-400/60 text-green-200",
        SkillCategory::Software => "bg-orange-500/30 border-orange-400/60 text-orange-200",
        SkillCategory::Technology => "bg-pink-500/30 border-pink-400/60 text-pink-200",
        SkillCategory::Unknown => "bg-gray-500/30 border-gray-400/60 text-gray-200",
    }
}

/// Full class string for a card element.
pub fn card_class(category: SkillCategory) -> String {
    format!("{} {}", CARD_BASE_CLASS, category_class(category))
}
