use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use video_player::library::{bundled_catalog, parse_catalog};
use video_player::{Command, PlayerConfig, VideoPlayer};

const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive in-memory video catalog player", long_about = None)]
struct Args {
    /// Path to a catalog file (`title | id | #tag1 , #tag2` per line)
    #[arg(short = 'c', long)]
    catalog: Option<String>,

    /// Seed for PLAY_RANDOM (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for player output
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = PlayerConfig::new();
    if let Some(path) = &args.catalog {
        // Expand ~ in paths
        let expanded = shellexpand::tilde(path);
        config = config.with_catalog(PathBuf::from(expanded.as_ref()));
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let catalog = match &config.catalog_path {
        Some(path) => parse_catalog(path)?,
        None => bundled_catalog()?,
    };

    let mut player = VideoPlayer::with_config(catalog, &config);
    run(&mut player, io::stdin().lock(), io::stdout().lock())
}

/// Read commands until EXIT or end of input
fn run(player: &mut VideoPlayer, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "Hello and welcome to YouTube, what would you like to do?")?;
    writeln!(output, "Enter HELP for list of available commands or EXIT to terminate.")?;

    loop {
        write!(output, "YT> ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                writeln!(output, "{}", INVALID_COMMAND)?;
                continue;
            }
        };

        if command == Command::Exit {
            break;
        }

        print_lines(&mut output, &player.execute(command))?;

        if player.has_pending_selection() {
            output.flush()?;
            let answer = read_answer(&mut input)?.unwrap_or_default();
            print_lines(&mut output, &player.resolve_selection(&answer))?;
        }
    }

    writeln!(output, "YouTube has now terminated its execution. Thank you and goodbye!")?;
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_string()))
}

/// Next non-blank line, used for the search selection
fn read_answer(input: &mut impl BufRead) -> Result<Option<String>> {
    while let Some(line) = read_line(input)? {
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

fn print_lines(output: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut player = VideoPlayer::new(bundled_catalog().unwrap());
        let mut output = Vec::new();
        run(&mut player, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_runs_commands() {
        let out = session("NUMBER_OF_VIDEOS\nplay funny_dogs_video_id\nEXIT\nSTOP\n");

        assert!(out.contains("5 videos in the library"));
        assert!(out.contains("Playing video: Funny Dogs"));
        assert!(!out.contains("Stopping video"));
        assert!(out.ends_with("Thank you and goodbye!\n"));
    }

    #[test]
    fn test_invalid_command_message() {
        let out = session("DANCE\n");
        assert!(out.contains(INVALID_COMMAND));
    }

    #[test]
    fn test_search_reads_selection() {
        let out = session("SEARCH_VIDEOS cat\n2\nSHOW_PLAYING\n");

        assert!(out.contains("2) Another Cat Video (another_cat_video_id) [#cat #animal]"));
        assert!(out.contains("Playing video: Another Cat Video"));
        assert!(out.contains("Currently playing: Another Cat Video"));
    }

    #[test]
    fn test_selection_skips_blank_lines() {
        let out = session("SEARCH_VIDEOS dog\n\n   \n1 yes\nSHOW_PLAYING\n");

        assert!(out.contains("Playing video: Funny Dogs"));
        assert!(out.contains("Currently playing: Funny Dogs"));
        assert!(!out.contains(INVALID_COMMAND));
    }

    #[test]
    fn test_search_declined_at_end_of_input() {
        let out = session("SEARCH_VIDEOS_WITH_TAG #cat\n");
        assert!(!out.contains("Playing video"));
    }
}
