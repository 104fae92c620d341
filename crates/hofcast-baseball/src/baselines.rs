// Hall-of-Fame positional averages (WAR), by baseline category.

use hofcast_core::comparison::PositionalBaseline;

use crate::positions::BaseballPosition;

const CATCHER: PositionalBaseline = PositionalBaseline::new(53.7, 34.8, 44.3);
const FIRST_BASE: PositionalBaseline = PositionalBaseline::new(65.9, 42.4, 54.2);
const SECOND_BASE: PositionalBaseline = PositionalBaseline::new(69.4, 44.4, 56.9);
const THIRD_BASE: PositionalBaseline = PositionalBaseline::new(68.4, 43.0, 55.7);
const SHORT_STOP: PositionalBaseline = PositionalBaseline::new(66.7, 42.8, 54.7);
const LEFT_FIELD: PositionalBaseline = PositionalBaseline::new(65.2, 41.5, 53.3);
const CENTER_FIELD: PositionalBaseline = PositionalBaseline::new(71.1, 44.1, 57.6);
const RIGHT_FIELD: PositionalBaseline = PositionalBaseline::new(71.1, 42.9, 57.0);
const STARTING_PITCHER: PositionalBaseline = PositionalBaseline::new(73.0, 50.1, 61.6);
const RELIEF_PITCHER: PositionalBaseline = PositionalBaseline::new(40.6, 28.2, 34.4);

/// Baseline for a category. Positions without an entry of their own resolve
/// through `BaseballPosition::category` first.
pub fn baseline_for(category: BaseballPosition) -> Option<PositionalBaseline> {
    match category {
        BaseballPosition::Catcher => Some(CATCHER),
        BaseballPosition::FirstBase => Some(FIRST_BASE),
        BaseballPosition::SecondBase => Some(SECOND_BASE),
        BaseballPosition::ThirdBase => Some(THIRD_BASE),
        BaseballPosition::ShortStop => Some(SHORT_STOP),
        BaseballPosition::LeftField => Some(LEFT_FIELD),
        BaseballPosition::CenterField => Some(CENTER_FIELD),
        BaseballPosition::RightField => Some(RIGHT_FIELD),
        BaseballPosition::StartingPitcher => Some(STARTING_PITCHER),
        BaseballPosition::ReliefPitcher => Some(RELIEF_PITCHER),
        BaseballPosition::DesignatedHitter | BaseballPosition::Pitcher => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_baseline_position_has_positive_values() {
        for pos in BaseballPosition::BASELINE {
            let b = baseline_for(pos).unwrap();
            assert!(b.validate(pos.display_str()).is_ok(), "{pos}");
            assert!(b.peak_value < b.career_value, "{pos}");
        }
    }

    #[test]
    fn non_category_positions_have_no_entry() {
        assert!(baseline_for(BaseballPosition::DesignatedHitter).is_none());
        assert!(baseline_for(BaseballPosition::DesignatedHitter.category()).is_some());
        assert!(baseline_for(BaseballPosition::Pitcher.category()).is_some());
    }
}
