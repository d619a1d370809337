//! Fixed cooking-tip rules for the suggestion endpoint.

use crate::models::{SuggestRequest, SuggestResponse};

pub const SALT_TIP: &str = "Add a pinch of salt to enhance flavors.";
pub const CITRUS_TIP: &str = "A squeeze of citrus at the end brightens the dish.";
pub const GARLIC_TIP: &str = "Saute garlic gently; burnt garlic turns bitter.";
pub const FALLBACK_TIP: &str = "Taste as you cook and adjust seasoning gradually.";

const MAX_TIPS: usize = 3;

/// Evaluate the rules against the joined, lowercased ingredient text.
/// Rule order is fixed and the result is cut to three tips.
pub fn suggest_tips(ingredients: &[String]) -> Vec<String> {
    let text = ingredients.join(", ").to_lowercase();

    let mut tips = Vec::new();
    if !text.contains("salt") {
        tips.push(SALT_TIP);
    }
    if text.contains("lemon") || text.contains("lime") {
        tips.push(CITRUS_TIP);
    }
    if text.contains("garlic") {
        tips.push(GARLIC_TIP);
    }
    if tips.is_empty() {
        tips.push(FALLBACK_TIP);
    }

    tips.into_iter()
        .take(MAX_TIPS)
        .map(str::to_string)
        .collect()
}

pub fn suggest(req: &SuggestRequest) -> SuggestResponse {
    SuggestResponse {
        tips: suggest_tips(&req.ingredients),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tips(ingredients: &[&str]) -> Vec<String> {
        let ingredients: Vec<String> = ingredients.iter().map(|s| s.to_string()).collect();
        suggest_tips(&ingredients)
    }

    #[test]
    fn chicken_and_garlic_get_salt_then_garlic() {
        assert_eq!(tips(&["chicken", "garlic"]), vec![SALT_TIP, GARLIC_TIP]);
    }

    #[test]
    fn seasoned_plain_dish_gets_fallback_only() {
        assert_eq!(tips(&["salt", "pepper"]), vec![FALLBACK_TIP]);
    }

    #[test]
    fn all_rules_fire_in_order() {
        assert_eq!(
            tips(&["Lime", "GARLIC", "fish"]),
            vec![SALT_TIP, CITRUS_TIP, GARLIC_TIP]
        );
    }

    #[test]
    fn matching_is_substring_and_case_insensitive() {
        assert_eq!(tips(&["Sea Salt", "lemongrass"]), vec![CITRUS_TIP]);
        assert_eq!(tips(&["unsalted butter"]), vec![FALLBACK_TIP]);
    }

    #[test]
    fn no_ingredients_still_suggests_salt() {
        assert_eq!(tips(&[]), vec![SALT_TIP]);
    }

    #[test]
    fn rules_see_the_joined_text() {
        // "sal" + ", " + "t" never forms "salt"; joining must not glue words
        assert_eq!(tips(&["sal", "t"]), vec![SALT_TIP]);
    }
}
