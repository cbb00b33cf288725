use super::display::display_label;

#[test]
fn display_label_joins_artist_and_title_with_en_dash() {
    assert_eq!(display_label("Artist", "Song"), "Artist – Song");
    assert_eq!(display_label("  Artist  ", " Song "), "Artist – Song");
}

#[test]
fn display_label_without_artist_is_just_the_title() {
    assert_eq!(display_label("", "Song"), "Song");
    assert_eq!(display_label("   ", "Song"), "Song");
}
