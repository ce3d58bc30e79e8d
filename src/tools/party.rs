//! Party-planning lookups: menu, catering, and theme suggestions.
//!
//! All three are fixed in-code tables; no state, no I/O.

/// Catering services and their ratings.
const CATERING_SERVICES: [(&str, f32); 3] = [
    ("Gotham Catering Co.", 4.9),
    ("Wayne Manor Catering", 4.8),
    ("Gotham City Events", 4.7),
];

/// Suggest a menu for the given occasion.
pub fn suggest_menu(occasion: &str) -> String {
    match occasion.trim().to_lowercase().as_str() {
        "casual" => "Pizza, snacks, and drinks.",
        "formal" => "3-course dinner with wine and dessert.",
        "superhero" => "Buffet with high-energy and healthy food.",
        _ => "Custom menu for the butler.",
    }
    .to_string()
}

/// Return the highest-rated catering service.
///
/// The query is accepted for schema compatibility but the table is fixed.
pub fn catering_service(_query: &str) -> String {
    CATERING_SERVICES
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name.to_string())
        .unwrap_or_default()
}

/// Describe a party theme for a known category.
pub fn party_theme(category: &str) -> String {
    match category.trim().to_lowercase().as_str() {
        "classic heroes" => {
            "Justice League Gala: Guests come dressed as their favorite DC heroes with \
             themed cocktails like 'The Kryptonite Punch'."
        }
        "villain masquerade" => {
            "Gotham Rogues' Ball: A mysterious masquerade where guests dress as classic \
             Batman villains."
        }
        "futuristic gotham" => {
            "Neo-Gotham Night: A sleek, futuristic party inspired by Batman Beyond, with \
             neon decorations and futuristic gadgets."
        }
        _ => {
            "Themed party idea not found. Try 'classic heroes', 'villain masquerade', or \
             'futuristic gotham'."
        }
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_menu_known_occasions() {
        assert_eq!(suggest_menu("casual"), "Pizza, snacks, and drinks.");
        assert_eq!(suggest_menu("Formal"), "3-course dinner with wine and dessert.");
        assert_eq!(suggest_menu("superhero"), "Buffet with high-energy and healthy food.");
    }

    #[test]
    fn test_suggest_menu_fallback() {
        assert_eq!(suggest_menu("birthday"), "Custom menu for the butler.");
    }

    #[test]
    fn test_catering_service_picks_highest_rated() {
        assert_eq!(catering_service("any query"), "Gotham Catering Co.");
    }

    #[test]
    fn test_party_theme_known_categories() {
        assert!(party_theme("classic heroes").starts_with("Justice League Gala:"));
        assert!(party_theme("Villain Masquerade").starts_with("Gotham Rogues' Ball:"));
        assert!(party_theme("futuristic gotham").starts_with("Neo-Gotham Night:"));
    }

    #[test]
    fn test_party_theme_unknown_category_guides() {
        let out = party_theme("disco");
        assert!(out.starts_with("Themed party idea not found."));
        assert!(out.contains("classic heroes"));
    }
}
