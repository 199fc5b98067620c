//! Decoders for the raw attribute and text values found in HLTV markup.
//!
//! Every decoder is tolerant: input it cannot make sense of yields `None`
//! rather than an error.

/// Placeholder text the site substitutes for anything that looks like an
/// email address when it detects a scraper.
pub const OBFUSCATION_MARKER: &str = "[email protected]";

pub const TEAM_LOGO_PREFIX: &str = "https://static.hltv.org/images/team/logo/";
pub const EVENT_LOGO_PREFIX: &str = "https://static.hltv.org/images/eventLogos/";

/// Collapse whitespace runs to a single space and trim both ends.
///
/// Returns `None` if the text was obfuscated by the site.
pub fn cleanup_string(raw: &str) -> Option<String> {
    if raw.contains(OBFUSCATION_MARKER) {
        return None;
    }
    Some(raw.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Team id from an anchor href of the form `...?x=...&teamid=<id>`.
///
/// The id is the value after the second `=`.
pub fn decode_team_id(href: Option<&str>) -> Option<u32> {
    let href = linked(href)?;
    href.split('=').nth(2).and_then(parse_leading_int)
}

/// Team id from a logo `src` such as `https://static.hltv.org/images/team/logo/6667`.
pub fn decode_team_id_from_logo(src: Option<&str>) -> Option<u32> {
    let src = linked(src)?;
    let tail = src
        .strip_prefix(TEAM_LOGO_PREFIX)
        .unwrap_or_else(|| last_segment(src));
    parse_leading_int(tail)
}

/// Event id from an event logo `src` such as `.../images/eventLogos/4872.png`.
pub fn decode_event_id_from_logo(src: Option<&str>) -> Option<u32> {
    let src = linked(src)?;
    let tail = src
        .strip_prefix(EVENT_LOGO_PREFIX)
        .unwrap_or_else(|| last_segment(src));
    parse_leading_int(tail.strip_suffix(".png").unwrap_or(tail))
}

/// Player id from a profile link.
///
/// A `playerid=<id>` query parameter wins. Otherwise the first path segment
/// that starts with a number (`/player/1234-nick`, `/stats/players/1234/nick`)
/// is used.
pub fn decode_player_id(profile_path: &str) -> Option<u32> {
    profile_path
        .split("playerid=")
        .nth(1)
        .and_then(parse_leading_int)
        .or_else(|| {
            let path = profile_path.split(['?', '#']).next().unwrap_or_default();
            path.split('/')
                .filter_map(|segment| segment.split('-').next())
                .find_map(|head| head.parse().ok())
        })
}

/// Map name from a map image path such as `/img/static/maps/mirage.png`.
pub fn decode_map_name(src: &str) -> Option<String> {
    let name = src.split("maps/").nth(1)?.split(".png").next()?;
    (!name.is_empty()).then(|| name.to_string())
}

/// Integer from a parenthesized count such as `(1234)`.
pub fn decode_count(raw: &str) -> Option<u32> {
    parse_leading_int(&raw.replace(['(', ')'], ""))
}

/// Whether a format string names a best-of series (`bo3`, `Best of 3`)
/// rather than a single map.
pub fn is_best_of(format: &str) -> bool {
    let format = format.trim().to_ascii_lowercase();
    if format.starts_with("best of") {
        return true;
    }
    format
        .as_bytes()
        .windows(3)
        .any(|w| w[0] == b'b' && w[1] == b'o' && w[2].is_ascii_digit())
}

/// Parse the leading digits of a string, ignoring leading whitespace and
/// anything after the digits.
pub(crate) fn parse_leading_int(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

fn linked(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != "#")
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_string() {
        assert_eq!(cleanup_string("a   b\n c ").as_deref(), Some("a b c"));
        assert_eq!(cleanup_string("\n\t Mirage\n").as_deref(), Some("Mirage"));
        assert_eq!(cleanup_string("").as_deref(), Some(""));
    }

    #[test]
    fn test_cleanup_string_is_idempotent() {
        for raw in ["a   b\n c ", "  16 - 14  ", "one", "x \t\t y\n\nz"] {
            let once = cleanup_string(raw).unwrap();
            assert_eq!(cleanup_string(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_cleanup_string_obfuscated() {
        assert!(cleanup_string("contact [email protected] now").is_none());
    }

    #[test]
    fn test_decode_team_id() {
        assert_eq!(
            decode_team_id(Some("/?pageid=179&teamid=6667")),
            Some(6667)
        );
        assert_eq!(
            decode_team_id(Some("/?pageid=179&teamid=4608&x=1")),
            Some(4608)
        );
        assert_eq!(decode_team_id(Some("#")), None);
        assert_eq!(decode_team_id(None), None);
    }

    #[test]
    fn test_decode_team_id_from_logo() {
        assert_eq!(
            decode_team_id_from_logo(Some("https://static.hltv.org/images/team/logo/6667")),
            Some(6667)
        );
        assert_eq!(decode_team_id_from_logo(Some("#")), None);
        assert_eq!(decode_team_id_from_logo(None), None);
        assert_eq!(
            decode_team_id_from_logo(Some("https://static.hltv.org/images/team/logo/unknown")),
            None
        );
    }

    #[test]
    fn test_decode_event_id_from_logo() {
        assert_eq!(
            decode_event_id_from_logo(Some(
                "https://static.hltv.org/images/eventLogos/4872.png"
            )),
            Some(4872)
        );
        assert_eq!(
            decode_event_id_from_logo(Some(".../eventLogos/4872.png")),
            Some(4872)
        );
        assert_eq!(decode_event_id_from_logo(Some("#")), None);
    }

    #[test]
    fn test_decode_player_id() {
        assert_eq!(decode_player_id("/stats/players/1234/nickname"), Some(1234));
        assert_eq!(decode_player_id("/player/7998-s1mple"), Some(7998));
        assert_eq!(
            decode_player_id("/?pageid=173&playerid=5678&eventid=0"),
            Some(5678)
        );
        assert_eq!(
            decode_player_id("/stats/players/1234/nick?playerid=5678"),
            Some(5678)
        );
        assert_eq!(decode_player_id("/player/nobody"), None);
    }

    #[test]
    fn test_decode_map_name() {
        assert_eq!(
            decode_map_name("/img/static/maps/inferno.png").as_deref(),
            Some("inferno")
        );
        assert_eq!(decode_map_name("/img/static/tba.png"), None);
    }

    #[test]
    fn test_decode_count() {
        assert_eq!(decode_count("(1234)"), Some(1234));
        assert_eq!(decode_count(" (56) "), Some(56));
        assert_eq!(decode_count(""), None);
        assert_eq!(decode_count("()"), None);
    }

    #[test]
    fn test_is_best_of() {
        assert!(is_best_of("bo3"));
        assert!(is_best_of("BO5"));
        assert!(is_best_of("Best of 3"));
        assert!(!is_best_of("mrg"));
        assert!(!is_best_of("nuke"));
        assert!(!is_best_of("unknown"));
    }
}
