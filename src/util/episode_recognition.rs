// src/util/episode_recognition.rs
//
// Best-effort episode number extraction from cleaned episode names.
//
// Deterministic, ordered rules: explicit markers win over bare numbers.
// Failure to recognize is not an error; callers keep the episode with the
// unknown-number sentinel.

use regex::Regex;

pub struct EpisodeRecognition {
    /// Version/volume/season tags that would shadow the real number
    unwanted: Regex,

    /// Explicit episode markers, tried in order
    marker_patterns: Vec<Regex>,

    /// Last resort: any standalone number
    number: Regex,
}

impl Default for EpisodeRecognition {
    fn default() -> Self {
        Self {
            unwanted: Regex::new(r"(?i)\b(?:v|ver|vol|version|volume|season)\s*[0-9]+\b").unwrap(),
            marker_patterns: vec![
                // S01E12, s1 e12
                Regex::new(r"(?i)\bs[0-9]+\s*e([0-9]+(?:\.[0-9]+)?)").unwrap(),
                // Episode 12, Ep.12, EP 12, E12
                Regex::new(r"(?i)\be(?:p(?:isode)?)?[\s.]*([0-9]+(?:\.[0-9]+)?)").unwrap(),
                // - 12
                Regex::new(r"-\s*([0-9]+(?:\.[0-9]+)?)").unwrap(),
                // #12
                Regex::new(r"#([0-9]+(?:\.[0-9]+)?)").unwrap(),
            ],
            number: Regex::new(r"([0-9]+(?:\.[0-9]+)?)").unwrap(),
        }
    }
}

impl EpisodeRecognition {
    /// Parse an episode number from `episode_name`, stripping
    /// `entry_title` first so numbers in the title ("Steins;Gate 0") don't
    /// win over the actual episode marker.
    pub fn parse_episode_number(&self, entry_title: &str, episode_name: &str) -> Option<f32> {
        let name = if entry_title.is_empty() {
            episode_name.to_string()
        } else {
            episode_name.replace(entry_title, " ")
        };
        let name = self.unwanted.replace_all(&name, " ");

        for pattern in &self.marker_patterns {
            if let Some(number) = capture_number(pattern, &name) {
                return Some(number);
            }
        }
        capture_number(&self.number, &name)
    }
}

fn capture_number(pattern: &Regex, name: &str) -> Option<f32> {
    pattern
        .captures(name)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse::<f32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(title: &str, name: &str) -> Option<f32> {
        EpisodeRecognition::default().parse_episode_number(title, name)
    }

    #[test]
    fn test_dash_delimited_number() {
        assert_eq!(parse("My Show", "My Show - 01"), Some(1.0));
        assert_eq!(parse("My Show", "- 02"), Some(2.0));
    }

    #[test]
    fn test_explicit_markers_win_over_bare_numbers() {
        assert_eq!(parse("", "1080 Episode 12"), Some(12.0));
        assert_eq!(parse("", "S01E07"), Some(7.0));
        assert_eq!(parse("", "Ep. 4 (720)"), Some(4.0));
    }

    #[test]
    fn test_decimal_numbers() {
        assert_eq!(parse("", "Episode 12.5"), Some(12.5));
        assert_eq!(parse("My Show", "My Show - 05.5"), Some(5.5));
    }

    #[test]
    fn test_title_numbers_are_stripped() {
        assert_eq!(parse("Steins;Gate 0", "Steins;Gate 0 - 03"), Some(3.0));
    }

    #[test]
    fn test_version_tags_are_ignored() {
        assert_eq!(parse("", "Episode 9 v2"), Some(9.0));
        assert_eq!(parse("", "vol 3"), None);
    }

    #[test]
    fn test_bare_number_fallback() {
        assert_eq!(parse("", "07"), Some(7.0));
    }

    #[test]
    fn test_no_number() {
        assert_eq!(parse("", "Special"), None);
        assert_eq!(parse("My Show", "My Show"), None);
    }

    #[test]
    fn test_deterministic() {
        let recognition = EpisodeRecognition::default();
        let first = recognition.parse_episode_number("My Show", "My Show S02E11 v2");
        for _ in 0..50 {
            assert_eq!(
                recognition.parse_episode_number("My Show", "My Show S02E11 v2"),
                first
            );
        }
    }
}
