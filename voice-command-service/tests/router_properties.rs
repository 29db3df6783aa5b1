//! Routing properties that must hold for any transcript

use proptest::prelude::*;
use voice_command_service::{CommandRouter, Intent};

/// One trigger word per standard rule, in table order
const RULE_KEYWORDS: &[(&str, Intent)] = &[
    ("display", Intent::ShowProcedure),
    ("translate", Intent::Translate),
    ("record", Intent::Document),
    ("warning", Intent::Alert),
    ("vitals", Intent::CheckVitals),
    ("assist", Intent::Help),
];

// Letters that cannot spell any trigger word, whatever their order
const FILLER: &str = "[xyzqjk ]{0,24}";

fn router() -> CommandRouter {
    CommandRouter::standard().unwrap()
}

proptest! {
    #[test]
    fn transcripts_without_keywords_are_unrecognized(text in FILLER) {
        prop_assert_eq!(router().match_transcript(&text), Intent::Unrecognized);
    }

    #[test]
    fn single_keyword_routes_to_its_rule(
        before in FILLER,
        after in FILLER,
        index in 0..RULE_KEYWORDS.len(),
        shout in any::<bool>(),
    ) {
        let (keyword, intent) = RULE_KEYWORDS[index];
        let keyword = if shout { keyword.to_uppercase() } else { keyword.to_string() };
        let text = format!("{before} {keyword} {after}");
        prop_assert_eq!(router().match_transcript(&text), intent);
    }

    #[test]
    fn earliest_rule_wins_regardless_of_word_order(
        first in 0..RULE_KEYWORDS.len(),
        second in 0..RULE_KEYWORDS.len(),
        filler in FILLER,
    ) {
        prop_assume!(first != second);
        let (a, _) = RULE_KEYWORDS[first];
        let (b, _) = RULE_KEYWORDS[second];
        let expected = RULE_KEYWORDS[first.min(second)].1;

        let text = format!("{a}{filler} {b}");
        prop_assert_eq!(router().match_transcript(&text), expected);
    }

    #[test]
    fn matching_is_idempotent(text in ".{0,60}") {
        let router = router();
        prop_assert_eq!(router.match_transcript(&text), router.match_transcript(&text));
    }
}

#[test]
fn show_beats_help() {
    assert_eq!(router().match_transcript("please show and help"), Intent::ShowProcedure);
}
