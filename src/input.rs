// Normalisation of the raw console answers. Kept free of any terminal
// handling so the rules can be tested directly.

/// First character of the trimmed, uppercased name. An empty name gives an
/// empty nickname.
pub fn nickname(name: &str) -> String {
    name.trim().to_uppercase().chars().take(1).collect()
}

/// Trimmed, lowercased fitness level. Not checked against any allowed set;
/// the exercises service decides what an unknown level means.
pub fn fitness_level(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Only an exact `y` (after trimming and lowercasing) opts in.
pub fn wants_quote(raw: &str) -> bool {
    raw.trim().to_lowercase() == "y"
}
