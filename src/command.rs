//! Command-line parsing for the interactive prompt
//!
//! Each input line is one command word followed by whitespace-separated
//! arguments. Command words are case-insensitive.

/// A parsed player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    /// Flag a video; `None` means no reason was given
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// Why an input line could not be turned into a command
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}")]
    Unknown(String),

    #[error("{command} is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command} takes {expected} argument(s), got {found}")]
    TooManyArguments {
        command: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Reference text printed by HELP
pub const HELP_TEXT: &[&str] = &[
    "Available commands:",
    "    NUMBER_OF_VIDEOS - Shows how many videos are in the library.",
    "    SHOW_ALL_VIDEOS - Lists all videos from the library.",
    "    PLAY <video_id> - Plays specified video.",
    "    PLAY_RANDOM - Plays a random video from the library.",
    "    STOP - Stop the current video.",
    "    PAUSE - Pause the current video.",
    "    CONTINUE - Resume the current paused video.",
    "    SHOW_PLAYING - Displays the title, url and paused status of the video that is currently playing (or paused).",
    "    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.",
    "    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.",
    "    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist",
    "    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.",
    "    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.",
    "    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.",
    "    SHOW_ALL_PLAYLISTS - Display all the available playlists.",
    "    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.",
    "    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.",
    "    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.",
    "    ALLOW_VIDEO <video_id> - Removes a flag from a video.",
    "    HELP - Displays help.",
    "    EXIT - Terminates the program execution.",
];

impl Command {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match word.to_uppercase().as_str() {
            "NUMBER_OF_VIDEOS" => no_args("NUMBER_OF_VIDEOS", &args, Command::NumberOfVideos)?,
            "SHOW_ALL_VIDEOS" => no_args("SHOW_ALL_VIDEOS", &args, Command::ShowAllVideos)?,
            "PLAY" => Command::Play(one_arg("PLAY", "video_id", &args)?),
            "PLAY_RANDOM" => no_args("PLAY_RANDOM", &args, Command::PlayRandom)?,
            "STOP" => no_args("STOP", &args, Command::Stop)?,
            "PAUSE" => no_args("PAUSE", &args, Command::Pause)?,
            "CONTINUE" => no_args("CONTINUE", &args, Command::Continue)?,
            "SHOW_PLAYING" => no_args("SHOW_PLAYING", &args, Command::ShowPlaying)?,
            "CREATE_PLAYLIST" => {
                Command::CreatePlaylist(one_arg("CREATE_PLAYLIST", "playlist_name", &args)?)
            }
            "ADD_TO_PLAYLIST" => {
                let (playlist, video_id) = two_args("ADD_TO_PLAYLIST", &args)?;
                Command::AddToPlaylist { playlist, video_id }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let (playlist, video_id) = two_args("REMOVE_FROM_PLAYLIST", &args)?;
                Command::RemoveFromPlaylist { playlist, video_id }
            }
            "CLEAR_PLAYLIST" => {
                Command::ClearPlaylist(one_arg("CLEAR_PLAYLIST", "playlist_name", &args)?)
            }
            "DELETE_PLAYLIST" => {
                Command::DeletePlaylist(one_arg("DELETE_PLAYLIST", "playlist_name", &args)?)
            }
            "SHOW_PLAYLIST" => {
                Command::ShowPlaylist(one_arg("SHOW_PLAYLIST", "playlist_name", &args)?)
            }
            "SHOW_ALL_PLAYLISTS" => no_args("SHOW_ALL_PLAYLISTS", &args, Command::ShowAllPlaylists)?,
            "SEARCH_VIDEOS" => {
                Command::SearchVideos(one_arg("SEARCH_VIDEOS", "search_term", &args)?)
            }
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag(one_arg(
                "SEARCH_VIDEOS_WITH_TAG",
                "tag_name",
                &args,
            )?),
            "FLAG_VIDEO" => {
                let (video_id, rest) = args.split_first().ok_or(CommandError::MissingArgument {
                    command: "FLAG_VIDEO",
                    argument: "video_id",
                })?;
                let reason = if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" "))
                };
                Command::FlagVideo {
                    video_id: video_id.to_string(),
                    reason,
                }
            }
            "ALLOW_VIDEO" => Command::AllowVideo(one_arg("ALLOW_VIDEO", "video_id", &args)?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Some(command))
    }
}

fn no_args(command: &'static str, args: &[&str], parsed: Command) -> Result<Command, CommandError> {
    if !args.is_empty() {
        return Err(CommandError::TooManyArguments {
            command,
            expected: 0,
            found: args.len(),
        });
    }
    Ok(parsed)
}

fn one_arg(
    command: &'static str,
    argument: &'static str,
    args: &[&str],
) -> Result<String, CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument { command, argument }),
        [value] => Ok(value.to_string()),
        _ => Err(CommandError::TooManyArguments {
            command,
            expected: 1,
            found: args.len(),
        }),
    }
}

fn two_args(command: &'static str, args: &[&str]) -> Result<(String, String), CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument {
            command,
            argument: "playlist_name",
        }),
        [_] => Err(CommandError::MissingArgument {
            command,
            argument: "video_id",
        }),
        [playlist, video_id] => Ok((playlist.to_string(), video_id.to_string())),
        _ => Err(CommandError::TooManyArguments {
            command,
            expected: 2,
            found: args.len(),
        }),
    }
}
