use video_player::model::{Video, VideoCatalog};
use video_player::{Command, PlayerConfig, VideoPlayer};

/// Two-video catalog: Amy (tagged #fun) and Bob (untagged)
fn create_test_player() -> VideoPlayer {
    let catalog: VideoCatalog = vec![
        Video::new("Amy", "amy", vec!["#fun".to_string()]),
        Video::new("Bob", "bob", Vec::new()),
    ]
    .into_iter()
    .collect();

    VideoPlayer::with_config(catalog, &PlayerConfig::new().with_seed(42))
}

#[test]
fn test_play_then_stop_leaves_nothing_loaded() {
    for id in ["amy", "bob"] {
        let mut player = create_test_player();
        player.play(id);
        player.pause();
        player.stop();

        assert_eq!(player.current_video_id(), None);
        assert!(!player.catalog().get(id).unwrap().is_paused());
    }
}

#[test]
fn test_playback_scenario() {
    let mut player = create_test_player();

    assert_eq!(player.play("bob"), vec!["Playing video: Bob"]);
    assert_eq!(
        player.play("amy"),
        vec!["Stopping video: Bob", "Playing video: Amy"]
    );
    assert_eq!(player.pause(), vec!["Pausing video: Amy"]);
    assert_eq!(player.continue_video(), vec!["Continuing video: Amy"]);
    assert_eq!(
        player.continue_video(),
        vec!["Cannot continue video: Video is not paused"]
    );
}

#[test]
fn test_flag_playing_video_stops_it() {
    let mut player = create_test_player();
    player.play("amy");

    assert_eq!(
        player.flag_video("amy", Some("spam")),
        vec![
            "Stopping video: Amy",
            "Successfully flagged video: Amy (reason: spam)",
        ]
    );
    assert_eq!(player.current_video_id(), None);

    assert_eq!(
        player.play("amy"),
        vec!["Cannot play video: Video is currently flagged (reason: spam)"]
    );
    assert_eq!(player.current_video_id(), None);
}

#[test]
fn test_flag_paused_video_returns_it_to_idle() {
    let mut player = create_test_player();
    player.play("amy");
    player.pause();

    assert_eq!(
        player.flag_video("amy", Some("spam")),
        vec![
            "Stopping video: Amy",
            "Successfully flagged video: Amy (reason: spam)",
        ]
    );
    assert_eq!(player.current_video_id(), None);
    assert!(!player.catalog().get("amy").unwrap().is_paused());
    assert_eq!(
        player.show_playing(),
        vec!["No video is currently playing"]
    );
}

#[test]
fn test_flag_state_unchanged_on_repeat() {
    let mut player = create_test_player();
    player.flag_video("bob", Some("first"));
    player.flag_video("bob", Some("second"));
    assert_eq!(player.catalog().get("bob").unwrap().flag_reason(), "first");

    player.allow_video("amy");
    assert!(!player.catalog().get("amy").unwrap().is_flagged());
}

#[test]
fn test_playlist_names_case_insensitive() {
    let mut player = create_test_player();

    player.create_playlist("Foo");
    assert_eq!(
        player.create_playlist("foo"),
        vec!["Cannot create playlist: A playlist with the same name already exists"]
    );
    assert_eq!(
        player.show_playlist("FOO"),
        vec!["Showing playlist: FOO", "No videos here yet"]
    );
    assert_eq!(
        player.show_all_playlists(),
        vec!["Showing all playlists:", "Foo"]
    );
}

#[test]
fn test_missing_playlist_reported_before_missing_video() {
    let mut player = create_test_player();

    assert_eq!(
        player.remove_from_playlist("missing", "bob"),
        vec!["Cannot remove video from missing: Playlist does not exist"]
    );
    assert_eq!(
        player.add_to_playlist("missing", "nope"),
        vec!["Cannot add video to missing: Playlist does not exist"]
    );
}

#[test]
fn test_playlist_round_trip() {
    let mut player = create_test_player();
    player.create_playlist("My List");

    assert_eq!(
        player.add_to_playlist("My List", "bob"),
        vec!["Added video to My List: Bob"]
    );
    assert_eq!(
        player.add_to_playlist("My List", "bob"),
        vec!["Cannot add video to My List: Video already added"]
    );
    assert_eq!(player.playlist("my list").unwrap().len(), 1);

    assert_eq!(
        player.remove_from_playlist("My List", "bob"),
        vec!["Removed video from My List: Bob"]
    );
    assert_eq!(
        player.show_playlist("My List"),
        vec!["Showing playlist: My List", "No videos here yet"]
    );
}

#[test]
fn test_commands_through_execute() {
    let mut player = create_test_player();

    let script = [
        "CREATE_PLAYLIST mix",
        "ADD_TO_PLAYLIST MIX amy",
        "SEARCH_VIDEOS_WITH_TAG #FUN",
        "FLAG_VIDEO bob too loud",
    ];
    let outputs: Vec<Vec<String>> = script
        .iter()
        .map(|line| {
            let command = Command::parse(line).unwrap().unwrap();
            player.execute(command)
        })
        .collect();

    assert_eq!(outputs[0], vec!["Successfully created new playlist: mix"]);
    assert_eq!(outputs[1], vec!["Added video to MIX: Amy"]);
    assert_eq!(outputs[2][1], "1) Amy (amy) [#fun]");
    assert_eq!(
        outputs[3],
        vec!["Successfully flagged video: Bob (reason: too loud)"]
    );

    // The search listing was dropped by the next command
    assert!(!player.has_pending_selection());
    assert!(player.resolve_selection("1").is_empty());
}

#[test]
fn test_seeded_random_is_reproducible() {
    let picks = |seed: u64| -> Vec<String> {
        let catalog: VideoCatalog = (0..10)
            .map(|i| Video::new(format!("Video {}", i), format!("v{}", i), Vec::new()))
            .collect();
        let mut player = VideoPlayer::with_config(catalog, &PlayerConfig::new().with_seed(seed));

        (0..5)
            .map(|_| {
                player.play_random();
                player.current_video_id().unwrap().to_string()
            })
            .collect()
    };

    assert_eq!(picks(3), picks(3));
}
