//! BoardGameGeek forum post rendering.

use chrono::{Datelike, NaiveDate};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;

use super::palette::{StarPainter, badges};
use crate::challenge::{Arrangement, GameEntry, Slot};
use crate::config::ChallengeConfig;
use crate::error::{Error, Result};
use crate::progress::ProgressMetrics;

/// Characters left as-is in the user name query value.
const USER_NAME_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Tag wrapping applied by [`decorate`], innermost first.
#[derive(Debug, Clone, Copy, Default)]
struct Emphasis {
    underline: bool,
    bold: bool,
    size: Option<u32>,
}

fn decorate(text: &str, emphasis: Emphasis) -> String {
    let mut out = text.to_string();
    if emphasis.underline {
        out = format!("[u]{}[/u]", out);
    }
    if emphasis.bold {
        out = format!("[b]{}[/b]", out);
    }
    if let Some(size) = emphasis.size {
        out = format!("[size={}]{}[/size]", size, out);
    }
    out
}

fn bold(text: &str) -> String {
    decorate(
        text,
        Emphasis {
            bold: true,
            ..Default::default()
        },
    )
}

/// Render the full post as lines of BBCode.
///
/// `today` stamps the update line and picks the default logging year.
pub fn render_post<R: Rng + ?Sized>(
    config: &ChallengeConfig,
    arrangement: &Arrangement,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<String>> {
    let level = arrangement.len();
    let mode = config.challenge.mode;
    let metrics = ProgressMetrics::measure(arrangement);

    let mut lines = vec!["[center]".to_string()];

    lines.push(decorate(
        &format!("Staircase-{}", level),
        Emphasis {
            underline: true,
            bold: true,
            size: Some(24),
        },
    ));
    lines.push(bold(&format!(" ({} Mode)", mode.title_name())));
    lines.push(String::new());

    lines.push(decorate(
        "Progress",
        Emphasis {
            underline: true,
            size: Some(18),
            ..Default::default()
        },
    ));
    lines.push(format!(
        "{}{}",
        bold("Last Update:"),
        today.format(" %B %d")
    ));

    let progress = metrics.progress;
    lines.push(format!(
        "{} {}/{} ({:.1}%)",
        bold("Plays:"),
        progress.credited_plays,
        progress.target_plays,
        progress.percent()
    ));
    lines.push(format!(
        "{} {}",
        bold("Largest Complete Staircase:"),
        metrics.largest_complete
    ));

    if let Some(user_name) = config.profile.user_name.as_deref() {
        lines.push(bold(&plays_link(user_name, config.profile.start_date, today)));
    }

    lines.push("[/center]".to_string());

    let capacity = usize::try_from(progress.target_plays).unwrap_or(usize::MAX);
    let mut painter = StarPainter::new(config.display.color_scheme, capacity, rng);
    let mut rows = Vec::with_capacity(level);
    for (number, slot) in arrangement.numbered() {
        rows.push(slot_row(
            number,
            slot,
            level,
            config.display.justify_right,
            &mut painter,
        )?);
    }

    lines.push(decorate(
        &format!("\n{}\n", rows.join("\n")),
        Emphasis {
            size: Some(14),
            ..Default::default()
        },
    ));

    Ok(lines)
}

/// Link to the user's logged plays for the challenge year.
fn plays_link(user_name: &str, start_date: Option<NaiveDate>, today: NaiveDate) -> String {
    let (query_start, year) = match start_date {
        Some(start) => (start.format("%Y-%m-%d").to_string(), start.year()),
        None => (format!("{}-01-01", today.year()), today.year()),
    };
    format!(
        "[geekurl=geekplay.php?username={}&redirect=1&startdate={}&enddate={}-12-31\
         &action=bygame&subtype=boardgame]My Plays[/geekurl]",
        utf8_percent_encode(user_name, USER_NAME_SAFE),
        query_start,
        year
    )
}

fn row_label(total_plays: u32, number: usize, level: usize) -> String {
    if level >= 100 {
        format!("[c]({:3}/{:3})[/c]", total_plays, number)
    } else if level >= 10 {
        format!("[c]({:2}/{:2})[/c]", total_plays, number)
    } else {
        format!("[c]({})[/c]", number)
    }
}

/// Game name markup: linked when an id is known, bare title otherwise.
pub fn game_name(game: &GameEntry) -> Result<String> {
    if !game.is_nameable() {
        return Err(Error::Render(
            "Cannot list a game with neither a title nor a BGG ID".to_string(),
        ));
    }
    Ok(match game.external_id {
        Some(id) => format!("[thing={}]{}[/thing]", id, game.title),
        None => game.title.clone(),
    })
}

fn slot_row(
    number: usize,
    slot: &Slot,
    level: usize,
    justify_right: bool,
    painter: &mut StarPainter,
) -> Result<String> {
    let total_plays = slot.play_count();
    let credited = slot.entry().map_or(0, |game| game.credited_plays(number)) as usize;

    let filled = painter.row(credited);
    let empty = vec![badges::EMPTY_STAR; number - credited];
    let label = row_label(total_plays, number, level);
    let check_box = if slot.entry().is_some_and(|game| game.satisfies(number)) {
        badges::CHECKED_BOX
    } else {
        badges::UNCHECKED_BOX
    };
    let name = match slot.entry() {
        Some(game) => game_name(game)?,
        None => String::new(),
    };

    let mut parts: Vec<&str> = Vec::with_capacity(level + 3);
    if justify_right {
        parts.extend(std::iter::repeat(badges::BLANK).take(level - number));
        parts.extend(&empty);
        parts.extend(&filled);
        parts.extend([label.as_str(), check_box, name.as_str()]);
    } else {
        parts.extend([check_box, label.as_str()]);
        parts.extend(&filled);
        parts.extend(&empty);
        parts.push(name.as_str());
    }

    Ok(parts.join(" ").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::Mode;
    use crate::config::ProfileSettings;
    use crate::export::ColorScheme;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const Y: &str = badges::YELLOW_STAR;
    const E: &str = badges::EMPTY_STAR;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
    }

    fn config(level: usize, games: Vec<GameEntry>) -> ChallengeConfig {
        let mut config = ChallengeConfig {
            games,
            ..Default::default()
        };
        config.challenge.level = level;
        config
    }

    fn render(config: &ChallengeConfig) -> Vec<String> {
        let arrangement = config.arrange().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        render_post(config, &arrangement, today(), &mut rng).unwrap()
    }

    #[test]
    fn test_header_lines() {
        let lines = render(&config(3, vec![GameEntry::new("Azul", 2)]));
        assert_eq!(lines[0], "[center]");
        assert_eq!(lines[1], "[size=24][b][u]Staircase-3[/u][/b][/size]");
        assert_eq!(lines[2], "[b] (Casual Mode)[/b]");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "[size=18][u]Progress[/u][/size]");
        assert_eq!(lines[5], "[b]Last Update:[/b] October 16");
        assert_eq!(lines[6], "[b]Plays:[/b] 2/6 (33.3%)");
        assert_eq!(lines[7], "[b]Largest Complete Staircase:[/b] 1");
        assert_eq!(lines[8], "[/center]");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_left_justified_rows() {
        let lines = render(&config(3, vec![GameEntry::new("Azul", 2).with_id(230802)]));
        let expected = format!(
            "[size=14]\n{}\n{}\n{}\n[/size]",
            format!("{} [c](1)[/c] {}", badges::UNCHECKED_BOX, E),
            format!("{} [c](2)[/c] {} {}", badges::UNCHECKED_BOX, E, E),
            format!(
                "{} [c](3)[/c] {} {} {} [thing=230802]Azul[/thing]",
                badges::UNCHECKED_BOX,
                Y,
                Y,
                E
            ),
        );
        assert_eq!(lines[9], expected);
    }

    #[test]
    fn test_right_justified_rows() {
        let mut config = config(2, vec![GameEntry::new("Azul", 1), GameEntry::new("Ra", 5)]);
        config.display.justify_right = true;
        let lines = render(&config);
        let expected = format!(
            "[size=14]\n{}\n{}\n[/size]",
            format!(
                "{} {} [c](1)[/c] {} Azul",
                badges::BLANK,
                Y,
                badges::CHECKED_BOX
            ),
            format!("{} {} [c](2)[/c] {} Ra", Y, Y, badges::CHECKED_BOX),
        );
        assert_eq!(lines[9], expected);
        assert_eq!(lines[7], "[b]Largest Complete Staircase:[/b] 2");
    }

    #[test]
    fn test_row_labels_by_level() {
        assert_eq!(row_label(4, 3, 9), "[c](3)[/c]");
        assert_eq!(row_label(4, 3, 10), "[c]( 4/ 3)[/c]");
        assert_eq!(row_label(30, 12, 100), "[c]( 30/ 12)[/c]");
    }

    #[test]
    fn test_game_names() {
        assert_eq!(
            game_name(&GameEntry::new("", 2).with_id(122298)).unwrap(),
            "[thing=122298][/thing]"
        );
        assert_eq!(
            game_name(&GameEntry::new("Dominion: Override", 5).with_id(36218)).unwrap(),
            "[thing=36218]Dominion: Override[/thing]"
        );
        assert_eq!(
            game_name(&GameEntry::new("Marvel United", 4)).unwrap(),
            "Marvel United"
        );
        assert!(matches!(
            game_name(&GameEntry::new("", 1)),
            Err(Error::Render(_))
        ));
    }

    #[test]
    fn test_unnamed_game_fails_render() {
        let config = config(2, vec![GameEntry::new("", 1)]);
        let arrangement = config.arrange().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = render_post(&config, &arrangement, today(), &mut rng).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_plays_link_default_year() {
        let mut config = config(1, vec![GameEntry::new("Azul", 0)]);
        config.profile = ProfileSettings {
            user_name: Some("Meeple Fan".to_string()),
            start_date: None,
        };
        config.challenge.mode = Mode::Hardcore;
        let lines = render(&config);
        assert_eq!(lines[2], "[b] (Hardcore Mode)[/b]");
        assert_eq!(
            lines[8],
            "[b][geekurl=geekplay.php?username=Meeple%20Fan&redirect=1&startdate=2024-01-01\
             &enddate=2024-12-31&action=bygame&subtype=boardgame]My Plays[/geekurl][/b]"
        );
        assert_eq!(lines[9], "[/center]");
    }

    #[test]
    fn test_plays_link_encodes_non_ascii() {
        let link = plays_link("Jöns_1.0~x", None, today());
        assert!(link.contains("username=J%C3%B6ns_1.0~x&"));
    }

    #[test]
    fn test_plays_link_custom_start() {
        let link = plays_link("a/b&c", NaiveDate::from_ymd_opt(2022, 6, 26), today());
        assert!(link.contains("username=a/b%26c&"));
        assert!(link.contains("startdate=2022-06-26&enddate=2022-12-31"));
    }

    #[test]
    fn test_random_scheme_is_reproducible() {
        let mut config = config(4, vec![GameEntry::new("A", 4), GameEntry::new("B", 3)]);
        config.display.color_scheme = ColorScheme::Random;
        assert_eq!(render(&config), render(&config));
    }
}
