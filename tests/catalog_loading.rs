use std::fs;
use tempfile::TempDir;
use video_player::library::{bundled_catalog, parse_catalog};
use video_player::VideoPlayer;

#[test]
fn test_load_catalog_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("videos.txt");
    fs::write(
        &path,
        "Zoo Trip | zoo | #animal , #travel\n\nAlpha | alpha |\nAlpha | alpha_two | #first\n",
    )
    .expect("Failed to write catalog");

    let catalog = parse_catalog(&path).expect("Catalog should load");
    assert_eq!(catalog.len(), 3);

    let player = VideoPlayer::new(catalog);
    assert_eq!(
        player.show_all_videos(),
        vec![
            "Here's a list of all available videos:",
            "Alpha (alpha) []",
            "Alpha (alpha_two) [#first]",
            "Zoo Trip (zoo) [#animal #travel]",
        ]
    );
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = parse_catalog(&temp_dir.path().join("nope.txt")).unwrap_err();

    assert!(err.to_string().contains("Failed to read video catalog"));
}

#[test]
fn test_malformed_file_names_the_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("videos.txt");
    fs::write(&path, "Good | good |\nbroken line\n").expect("Failed to write catalog");

    let err = parse_catalog(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("line 2"));
}

#[test]
fn test_bundled_catalog_session() {
    let mut player = VideoPlayer::new(bundled_catalog().unwrap());

    assert_eq!(player.number_of_videos(), vec!["5 videos in the library"]);
    assert_eq!(
        player.search_videos_with_tag("#animal")[1..4],
        [
            "1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "2) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "3) Funny Dogs (funny_dogs_video_id) [#dog #animal]",
        ]
    );
    assert_eq!(
        player.resolve_selection("3"),
        vec!["Playing video: Funny Dogs"]
    );
}
