//! Integration tests for the vidplayer console and player
//!
//! These tests verify the complete player functionality including:
//! - Catalog loading from text and JSON files
//! - Playback transitions as seen on the console
//! - Playlist management end to end
//! - Search with the selection follow-up

use anyhow::Result;
use vidplayer::{
    Command, CommandError, MediaPlayerBuilder, PlaybackState, VidPlayerError, VideoCatalog, VideoId,
};
use vidplayer_integration_tests::{output_lines, run_script, TestFixture, VIDEOS};

#[test]
fn test_text_and_json_catalogs_agree() -> Result<()> {
    let fixture = TestFixture::new()?;

    let text = VideoCatalog::load(&fixture.catalog_files.text)?;
    let json = VideoCatalog::load(&fixture.catalog_files.json)?;

    assert_eq!(text.len(), VIDEOS.len());
    assert_eq!(text.videos(), json.videos());
    assert!(text.get("nothing_video_id").unwrap().tags().is_empty());

    Ok(())
}

#[test]
fn test_broken_and_empty_catalogs() -> Result<()> {
    let fixture = TestFixture::new()?;

    let err = VideoCatalog::load(&fixture.catalog_files.broken).unwrap_err();
    assert!(matches!(err, VidPlayerError::Catalog(_)));
    assert!(err.to_string().contains("line 2"));

    let empty = VideoCatalog::load(&fixture.catalog_files.empty)?;
    let player = MediaPlayerBuilder::new().with_catalog(empty).build()?;
    assert_eq!(player.execute(&Command::PlayRandom), Err(CommandError::EmptyCatalog));

    let output = run_script(player, "PLAY_RANDOM\nNUMBER_OF_VIDEOS\n")?;
    assert_eq!(
        output_lines(&output),
        ["Cannot play video: No videos available", "0 videos in the library"]
    );

    Ok(())
}

#[test]
fn test_show_all_videos_sorted_by_title() -> Result<()> {
    let fixture = TestFixture::new()?;
    let output = run_script(fixture.player()?, "SHOW_ALL_VIDEOS\n")?;

    assert_eq!(
        output_lines(&output),
        [
            "Here's a list of all available videos:",
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "  Another Cat Video (another_cat_video_id) [#cat #animal]",
            "  Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            "  Life at Google (life_at_google_video_id) [#google #career]",
            "  Video about nothing (nothing_video_id) []",
        ]
    );

    Ok(())
}

#[test]
fn test_playback_session() -> Result<()> {
    let fixture = TestFixture::new()?;
    let script = "\
        PLAY amazing_cats_video_id\n\
        PAUSE\n\
        PAUSE\n\
        SHOW_PLAYING\n\
        CONTINUE\n\
        CONTINUE\n\
        PLAY does_not_exist\n\
        PLAY amazing_cats_video_id\n\
        STOP\n\
        PAUSE\n\
        SHOW_PLAYING\n";

    let output = run_script(fixture.player()?, script)?;
    assert_eq!(
        output_lines(&output),
        [
            "Playing video: Amazing Cats",
            "Pausing video: Amazing Cats",
            "Video already paused: Amazing Cats",
            "Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED",
            "Continuing video: Amazing Cats",
            "Cannot continue video: Video is not paused",
            "Cannot play video: Video does not exist",
            "Stopping video: Amazing Cats",
            "Playing video: Amazing Cats",
            "Stopping video: Amazing Cats",
            "Cannot pause video: No video is currently playing",
            "No video is currently playing",
        ]
    );

    Ok(())
}

#[test]
fn test_playlist_session() -> Result<()> {
    let fixture = TestFixture::new()?;
    let script = "\
        SHOW_ALL_PLAYLISTS\n\
        CREATE_PLAYLIST My_List\n\
        CREATE_PLAYLIST my_list\n\
        CREATE_PLAYLIST Banana\n\
        CREATE_PLAYLIST apple\n\
        ADD_TO_PLAYLIST my_LIST funny_dogs_video_id\n\
        ADD_TO_PLAYLIST my_list amazing_cats_video_id\n\
        ADD_TO_PLAYLIST my_list amazing_cats_video_id\n\
        ADD_TO_PLAYLIST nope amazing_cats_video_id\n\
        ADD_TO_PLAYLIST my_list nope\n\
        SHOW_PLAYLIST MY_LIST\n\
        SHOW_ALL_PLAYLISTS\n\
        REMOVE_FROM_PLAYLIST my_list life_at_google_video_id\n\
        REMOVE_FROM_PLAYLIST nope nope\n\
        REMOVE_FROM_PLAYLIST my_list funny_dogs_video_id\n\
        CLEAR_PLAYLIST my_list\n\
        SHOW_PLAYLIST my_list\n\
        DELETE_PLAYLIST My_list\n\
        DELETE_PLAYLIST my_list\n\
        SHOW_PLAYLIST my_list\n";

    let output = run_script(fixture.player()?, script)?;
    assert_eq!(
        output_lines(&output),
        [
            "No playlists exist yet",
            "Successfully created new playlist: My_List",
            "Cannot create playlist: A playlist with the same name already exists",
            "Successfully created new playlist: Banana",
            "Successfully created new playlist: apple",
            "Added video to my_LIST: Funny Dogs",
            "Added video to my_list: Amazing Cats",
            "Cannot add video to my_list: Video already added",
            "Cannot add video to nope: Playlist does not exist",
            "Cannot add video to my_list: Video does not exist",
            "Showing playlist: MY_LIST",
            "  Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "Showing all playlists:",
            "  Banana",
            "  My_List",
            "  apple",
            "Cannot remove video from my_list: Video is not in playlist",
            "Cannot remove video from nope: Video does not exist",
            "Removed video from my_list: Funny Dogs",
            "Successfully removed all videos from my_list",
            "Showing playlist: my_list",
            "  No videos here yet",
            "Deleted playlist: My_list",
            "Cannot delete playlist my_list: Playlist does not exist",
            "Cannot show playlist my_list: Playlist does not exist",
        ]
    );

    Ok(())
}

#[test]
fn test_search_and_select() -> Result<()> {
    let fixture = TestFixture::new()?;
    let script = "\
        SEARCH_VIDEOS cat\n\
        2\n\
        SEARCH_VIDEOS_WITH_TAG #ANIMAL\n\
        9\n\
        SEARCH_VIDEOS_WITH_TAG animal\n\
        SHOW_PLAYING\n";

    let output = run_script(fixture.player()?, script)?;
    assert_eq!(
        output_lines(&output),
        [
            "Here are the results for cat:",
            "  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "  2) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "Playing video: Another Cat Video",
            "Here are the results for #ANIMAL:",
            "  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "  2) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "  3) Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "No search results for animal",
            "Currently playing: Another Cat Video (another_cat_video_id) [#cat #animal]",
        ]
    );

    Ok(())
}

#[test]
fn test_seeded_random_play_is_reproducible() -> Result<()> {
    let fixture = TestFixture::new()?;

    let first = fixture.player()?;
    let second = fixture.player()?;
    for _ in 0..5 {
        first.execute(&Command::PlayRandom)?;
        second.execute(&Command::PlayRandom)?;
        assert_eq!(first.get_state(), second.get_state());
    }

    let playing = match first.get_state() {
        PlaybackState::Playing(id) => id,
        other => panic!("expected playing, got {:?}", other),
    };
    assert!(VIDEOS.iter().any(|(_, id, _)| VideoId::new(*id) == playing));

    Ok(())
}
