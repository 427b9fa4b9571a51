/// Build the enhanced prompt sent to the model backend.
///
/// The base prompt is suffixed with a genre clause, then a mood clause,
/// in that fixed order. Empty qualifiers are treated as absent.
pub fn compose(prompt: &str, genre: Option<&str>, mood: Option<&str>) -> String {
    let mut enhanced = prompt.to_string();
    if let Some(genre) = genre.filter(|g| !g.is_empty()) {
        enhanced.push_str(&format!(" in {genre} style"));
    }
    if let Some(mood) = mood.filter(|m| !m.is_empty()) {
        enhanced.push_str(&format!(" with {mood} mood"));
    }
    enhanced
}
