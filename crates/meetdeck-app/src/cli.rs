use clap::Parser;

/// MeetDeck — a desktop shell for Google Meet, Chat and Currents.
#[derive(Parser, Debug)]
#[command(name = "meetdeck", version, about)]
pub struct Args {
    /// Meeting room to open on launch (appended to the Meet URL).
    #[arg(long)]
    pub room: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_flag_is_parsed() {
        let args = Args::parse_from(["meetdeck", "--room", "abc-defg-hij"]);
        assert_eq!(args.room.as_deref(), Some("abc-defg-hij"));
        assert!(args.config.is_none());
    }

    #[test]
    fn no_flags_means_no_room() {
        let args = Args::parse_from(["meetdeck"]);
        assert!(args.room.is_none());
        assert!(args.log_level.is_none());
    }
}
