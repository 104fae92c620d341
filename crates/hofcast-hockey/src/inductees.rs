// Confirmed inductees (player category), keyed by exact player id.
//
// Hockey inductees are chosen by a selection committee, not an open ballot.

use hofcast_core::sport::{Induction, InductionPath};

const INDUCTEES: &[(&str, i32)] = &[
    ("richamo01", 1961),
    ("howego01", 1972),
    ("beliveje01", 1972),
    ("plantja01", 1978),
    ("orrbo01", 1979),
    ("richahe01", 1979),
    ("drydeke01", 1983),
    ("lemiema01", 1997),
    ("trottbr01", 1997),
    ("potvide01", 1991),
    ("bossymi01", 1991),
    ("robinla01", 1995),
    ("gretzwa01", 1999),
    ("coffepa01", 2004),
    ("bourqra01", 2004),
    ("roypa01", 2006),
    ("messima01", 2007),
    ("francro01", 2007),
    ("yzermst01", 2009),
    ("hullbr01", 2009),
    ("leetcbr01", 2009),
    ("sakicjo01", 2012),
    ("sundima01", 2012),
    ("chelich01", 2013),
    ("hasekdo01", 2014),
    ("forsbpe01", 2014),
    ("modanmi01", 2014),
    ("lidstni01", 2015),
    ("prongch01", 2015),
    ("fedorse01", 2015),
    ("lindrer01", 2016),
    ("selante01", 2017),
    ("kariypa01", 2017),
    ("recchma01", 2017),
    ("brodema01", 2018),
    ("stlouma01", 2018),
    ("iginlja01", 2020),
    ("hossama01", 2020),
    ("luongro01", 2022),
    ("alfreda01", 2022),
    ("sedinda01", 2022),
    ("sedinhe01", 2022),
    ("lundqhe01", 2023),
    ("thornjo01", 2024),
    ("marlepa01", 2024),
    ("niedesc01", 2024),
];

pub fn inductee(player_id: &str) -> Option<Induction> {
    INDUCTEES
        .iter()
        .find(|(id, _)| *id == player_id)
        .map(|&(_, year)| Induction {
            year,
            path: InductionPath::Committee,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact() {
        assert_eq!(inductee("gretzwa01").map(|i| i.year), Some(1999));
        assert_eq!(inductee("gretzwa02"), None);
        assert_eq!(inductee("ovechal01"), None);
    }

    #[test]
    fn roster_ids_are_unique() {
        let mut ids: Vec<&str> = INDUCTEES.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), INDUCTEES.len());
    }
}
