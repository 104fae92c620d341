// Hall-of-Fame positional averages (point shares).

use hofcast_core::comparison::PositionalBaseline;

use crate::positions::HockeyPosition;

pub fn baseline_for(position: HockeyPosition) -> PositionalBaseline {
    match position {
        HockeyPosition::Center => PositionalBaseline::new(120.0, 70.0, 95.0),
        HockeyPosition::LeftWing => PositionalBaseline::new(105.0, 62.0, 83.5),
        HockeyPosition::RightWing => PositionalBaseline::new(110.0, 64.0, 87.0),
        HockeyPosition::Defense => PositionalBaseline::new(105.0, 60.0, 82.5),
        HockeyPosition::Goalie => PositionalBaseline::new(115.0, 72.0, 93.5),
    }
}
