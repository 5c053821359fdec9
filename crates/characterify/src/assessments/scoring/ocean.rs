use crate::assessments::traits::{OceanTrait, TraitTag, TraitTotals};

/// Raw-sum gap above which the leading dimension stands alone. Calibrated for eight
/// items per dimension on the 5-point scale.
pub(crate) const COMBINE_GAP: u32 = 5;

/// Single dominant letter, or the top two joined alphabetically (`"C_O"`) when close.
pub(super) fn classify(totals: &TraitTotals<OceanTrait>) -> String {
    let ranked = totals.ranked();
    let (first, first_total) = ranked[0];
    let (second, second_total) = ranked[1];

    if first_total - second_total > COMBINE_GAP {
        return first.code().to_string();
    }

    combined_key(first, second)
}

/// Alphabetical `X_Y` key for a pair of dimensions.
pub(crate) fn combined_key(left: OceanTrait, right: OceanTrait) -> String {
    let (low, high) = if left.code() <= right.code() {
        (left.code(), right.code())
    } else {
        (right.code(), left.code())
    };
    format!("{low}_{high}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(values: [u32; 5]) -> TraitTotals<OceanTrait> {
        let mut totals = TraitTotals::default();
        for (dimension, value) in OceanTrait::ALL.iter().zip(values) {
            totals.add(*dimension, value);
        }
        totals
    }

    #[test]
    fn close_leaders_combine_alphabetically() {
        assert_eq!(classify(&totals([40, 38, 10, 8, 4])), "C_O");
        assert_eq!(classify(&totals([10, 12, 30, 34, 8])), "A_E");
        assert_eq!(classify(&totals([30, 12, 10, 8, 35])), "N_O");
    }

    #[test]
    fn gap_must_exceed_threshold_to_stand_alone() {
        assert_eq!(classify(&totals([26, 20, 10, 8, 4])), "O");
        assert_eq!(classify(&totals([25, 20, 10, 8, 4])), "C_O");
        assert_eq!(classify(&totals([5, 10, 40, 12, 3])), "E");
    }

    #[test]
    fn equal_totals_keep_canonical_order() {
        assert_eq!(classify(&TraitTotals::default()), "C_O");
        assert_eq!(classify(&totals([0, 0, 9, 9, 9])), "A_E");
    }

    #[test]
    fn combined_key_is_order_independent() {
        assert_eq!(
            combined_key(OceanTrait::Openness, OceanTrait::Agreeableness),
            "A_O"
        );
        assert_eq!(
            combined_key(OceanTrait::Agreeableness, OceanTrait::Openness),
            "A_O"
        );
        assert_eq!(
            combined_key(OceanTrait::Neuroticism, OceanTrait::Extraversion),
            "E_N"
        );
    }
}
