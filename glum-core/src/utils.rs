//! Shared string transforms for naming generated code.

/// Convert a string to snake_case (e.g., "subCategory" -> "sub_category")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_separator = true;
    for c in s.chars() {
        if c == '-' || c == '_' || c == ' ' {
            if !prev_separator {
                result.push('_');
            }
            prev_separator = true;
            continue;
        }
        if c.is_uppercase() && !prev_separator {
            result.push('_');
        }
        result.extend(c.to_lowercase());
        prev_separator = false;
    }
    result
}

/// Convert a string to kebab-case (e.g., "UserSettings" -> "user-settings")
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

/// Irregular singular → plural forms, matched on the last word.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
];

/// Words whose plural is the word itself.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "equipment",
    "feedback",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "series",
    "sheep",
    "species",
];

/// Pluralize a lower-case English noun the way table names are derived
/// from model names (e.g., "category" -> "categories", "person" -> "people").
///
/// Only the last `_`-separated word is inflected.
pub fn to_plural(word: &str) -> String {
    let (head, last) = match word.rfind('_') {
        Some(idx) => word.split_at(idx + 1),
        None => ("", word),
    };
    format!("{}{}", head, plural_word(last))
}

fn plural_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(single, _)| *single == word) {
        return plural.to_string();
    }
    if let Some(stem) = word.strip_suffix('y')
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
    {
        return format!("{}ies", stem);
    }
    if word.ends_with(['s', 'x', 'z']) || word.ends_with("ch") || word.ends_with("sh") {
        return format!("{}es", word);
    }
    format!("{}s", word)
}
