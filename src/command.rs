use crate::app::Page;

pub const HELP: &str = "\
commands:
  live | schedule | rankings | news | players   switch page
  rank <batting|bowling|all-rounder|teams>      ranking category
  format <TEST|ODI|T20>                         ranking format
  player <name>                                 search a player
  commentary <match id>                         open commentary
  close                                         close commentary
  refresh                                       reload live matches now
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Page),
    Rank(String),
    Format(String),
    Player(String),
    Commentary(String),
    CloseCommentary,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim().to_string();

        Some(match head.to_lowercase().as_str() {
            "rank" => Command::Rank(rest.to_lowercase()),
            "format" => Command::Format(rest),
            "player" => Command::Player(rest),
            "commentary" => Command::Commentary(rest),
            "close" => Command::CloseCommentary,
            "refresh" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => match other.parse::<Page>() {
                Ok(page) => Command::Go(page),
                Err(_) => Command::Unknown(line.to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_and_arguments() {
        assert_eq!(Command::parse(" News "), Some(Command::Go(Page::News)));
        assert_eq!(Command::parse("rank All-Rounder"), Some(Command::Rank("all-rounder".into())));
        assert_eq!(Command::parse("player  MS Dhoni "), Some(Command::Player("MS Dhoni".into())));
        assert_eq!(Command::parse("commentary 87654"), Some(Command::Commentary("87654".into())));
        assert_eq!(Command::parse("player"), Some(Command::Player(String::new())));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
    }

    #[test]
    fn blank_and_unknown() {
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("bowl fast"), Some(Command::Unknown("bowl fast".into())));
    }
}
