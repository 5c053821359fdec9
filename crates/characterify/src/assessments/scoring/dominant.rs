use super::TraitShare;
use crate::assessments::traits::{TraitTag, TraitTotals};

/// Code of the highest-scoring tag; ties go to the earliest tag in canonical order.
pub(super) fn classify<T: TraitTag>(totals: &TraitTotals<T>) -> String {
    totals.dominant().code().to_string()
}

pub(super) fn shares<T: TraitTag>(totals: &TraitTotals<T>) -> Vec<TraitShare> {
    totals
        .shares()
        .into_iter()
        .map(|(tag, pct)| TraitShare {
            tag: tag.code().to_string(),
            label: tag.label().to_string(),
            pct,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::traits::{EnneagramType, TemperamentType};

    #[test]
    fn classify_uses_tag_codes() {
        let mut totals = TraitTotals::<EnneagramType>::default();
        totals.add(EnneagramType::Challenger, 18);
        totals.add(EnneagramType::Helper, 11);
        assert_eq!(classify(&totals), "8");
    }

    #[test]
    fn shares_carry_labels_in_canonical_order() {
        let mut totals = TraitTotals::<TemperamentType>::default();
        totals.add(TemperamentType::Choleric, 3);
        totals.add(TemperamentType::Melancholic, 1);

        let shares = shares(&totals);

        let tags: Vec<&str> = shares.iter().map(|s| s.tag.as_str()).collect();
        assert_eq!(tags, vec!["S", "C", "P", "M"]);
        assert_eq!(shares[1].label, "Choleric");
        assert_eq!(shares[1].pct, 75.0);
        assert_eq!(shares[3].pct, 25.0);
        assert_eq!(shares[0].pct, 0.0);
    }
}
