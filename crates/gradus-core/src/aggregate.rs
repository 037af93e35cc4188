use crate::level::Level;
use crate::types::WordLevel;

/// Order entries deterministically and drop duplicates.
///
/// Sort key: level rank, then single words before phrases, then word
/// length, then the word itself. Distinct candidates can resolve to the
/// same entry (prefix variants, suggestions), so duplicates are expected.
pub fn sort_and_dedup(mut entries: Vec<WordLevel>) -> Vec<WordLevel> {
    entries.sort_by(|a, b| key(a).cmp(&key(b)));
    entries.dedup();
    entries
}

fn key(entry: &WordLevel) -> (Level, bool, usize, &str) {
    (
        entry.level,
        entry.word.contains(' '),
        entry.word.chars().count(),
        entry.word.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, level: Level) -> WordLevel {
        WordLevel {
            word: word.to_string(),
            level,
        }
    }

    #[test]
    fn sorts_by_level_then_shape_then_length_then_word() {
        let entries = vec![
            entry("go away", Level::B1),
            entry("zebra", Level::A1),
            entry("unheard", Level::Unfound),
            entry("car", Level::A1),
            entry("odd", Level::Undefined),
            entry("tar", Level::A1),
            entry("do", Level::B1),
        ];

        let sorted = sort_and_dedup(entries);
        let flat: Vec<(&str, Level)> = sorted
            .iter()
            .map(|e| (e.word.as_str(), e.level))
            .collect();

        assert_eq!(
            flat,
            [
                ("car", Level::A1),
                ("tar", Level::A1),
                ("zebra", Level::A1),
                ("do", Level::B1),
                ("go away", Level::B1),
                ("odd", Level::Undefined),
                ("unheard", Level::Unfound),
            ]
        );
    }

    #[test]
    fn single_words_come_before_phrases_of_the_same_level() {
        let sorted = sort_and_dedup(vec![
            entry("go on", Level::A2),
            entry("stupendous", Level::A2),
        ]);
        assert_eq!(sorted[0].word, "stupendous");
    }

    #[test]
    fn duplicates_collapse() {
        let sorted = sort_and_dedup(vec![
            entry("car", Level::A1),
            entry("car", Level::A1),
            entry("car", Level::B2),
        ]);
        assert_eq!(sorted.len(), 2);
    }

    #[test]
    fn order_is_stable_across_runs() {
        let entries = vec![
            entry("give up", Level::B1),
            entry("give", Level::A1),
            entry("give-or-take", Level::Unfound),
        ];
        let once = sort_and_dedup(entries.clone());
        let mut reversed = entries;
        reversed.reverse();
        let twice = sort_and_dedup(reversed);
        assert_eq!(once, twice);
    }
}
