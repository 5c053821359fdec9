use super::DimensionSplit;
use crate::assessments::traits::{MbtiLetter, MbtiPair, TraitTag, TraitTotals};

/// Four-letter code plus the per-axis split, both in pair order I/E, N/S, T/F, P/J.
pub(super) fn classify(totals: &TraitTotals<MbtiLetter>) -> (String, Vec<DimensionSplit>) {
    let mut code = String::with_capacity(4);
    let mut splits = Vec::with_capacity(4);

    for pair in MbtiPair::ordered() {
        let (a, b) = pair.letters();
        let (total_a, total_b) = (totals.get(a), totals.get(b));

        code.push_str(if total_a >= total_b { a.code() } else { b.code() });

        let denominator = f64::from((total_a + total_b).max(1));
        splits.push(DimensionSplit {
            a: a.code().to_string(),
            b: b.code().to_string(),
            name_a: a.label().to_string(),
            name_b: b.label().to_string(),
            pct_a: f64::from(total_a) / denominator * 100.0,
            pct_b: f64::from(total_b) / denominator * 100.0,
        });
    }

    (code, splits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(entries: &[(MbtiLetter, u32)]) -> TraitTotals<MbtiLetter> {
        let mut totals = TraitTotals::default();
        for (letter, value) in entries {
            totals.add(*letter, *value);
        }
        totals
    }

    #[test]
    fn ties_favor_first_letter_of_each_pair() {
        let (code, splits) = classify(&totals(&[
            (MbtiLetter::I, 12),
            (MbtiLetter::E, 12),
            (MbtiLetter::S, 9),
            (MbtiLetter::F, 20),
            (MbtiLetter::T, 3),
            (MbtiLetter::P, 7),
            (MbtiLetter::J, 7),
        ]));

        assert_eq!(code, "ISFP");
        assert_eq!(splits[0].pct_a, 50.0);
        assert_eq!(splits[1].pct_b, 100.0);
        assert_eq!(splits[1].pct_a, 0.0);
    }

    #[test]
    fn percentages_split_each_pair() {
        let (code, splits) = classify(&totals(&[
            (MbtiLetter::E, 15),
            (MbtiLetter::I, 5),
            (MbtiLetter::N, 1),
            (MbtiLetter::S, 3),
            (MbtiLetter::T, 8),
            (MbtiLetter::J, 4),
        ]));

        assert_eq!(code, "ESTJ");
        assert_eq!(splits[0].pct_a, 25.0);
        assert_eq!(splits[0].pct_b, 75.0);
        assert_eq!(splits[1].pct_b, 75.0);
        assert_eq!(splits[3].pct_a, 0.0);
        assert_eq!(splits[3].pct_b, 100.0);
        assert_eq!(splits[2].leader(), ("T", 100.0, "Thinking"));
        assert_eq!(splits[0].trailer(), ("I", "Introvert"));
    }

    #[test]
    fn empty_pairs_report_zero_on_both_sides() {
        let (code, splits) = classify(&TraitTotals::default());
        assert_eq!(code, "INTP");
        assert!(splits.iter().all(|s| s.pct_a == 0.0 && s.pct_b == 0.0));
        let names: Vec<(&str, &str)> = splits
            .iter()
            .map(|s| (s.name_a.as_str(), s.name_b.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Introvert", "Extrovert"),
                ("Intuitive", "Sensing"),
                ("Thinking", "Feeling"),
                ("Perceiving", "Judging"),
            ]
        );
    }
}
