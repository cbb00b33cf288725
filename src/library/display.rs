/// Label shown on option buttons and in round results: `Artist – Title`.
pub fn display_label(artist: &str, title: &str) -> String {
    let artist = artist.trim();
    let title = title.trim();
    if artist.is_empty() {
        title.to_string()
    } else {
        format!("{artist} – {title}")
    }
}
