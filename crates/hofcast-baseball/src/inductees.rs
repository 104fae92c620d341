// Confirmed inductees, keyed by exact player id.

use hofcast_core::sport::InductionPath::{Ballot, Committee};
use hofcast_core::sport::{Induction, InductionPath};

const INDUCTEES: &[(&str, i32, InductionPath)] = &[
    ("cobbty01", 1936, Ballot),
    ("ruthba01", 1936, Ballot),
    ("youngcy01", 1937, Ballot),
    ("willite01", 1966, Ballot),
    ("musiast01", 1969, Ballot),
    ("koufasa01", 1972, Ballot),
    ("mantlmi01", 1974, Ballot),
    ("mayswi01", 1979, Ballot),
    ("aaronha01", 1982, Ballot),
    ("benchjo01", 1989, Ballot),
    ("morgajo02", 1990, Ballot),
    ("seaveto01", 1992, Ballot),
    ("schmimi01", 1995, Ballot),
    ("bunniji01", 1996, Committee),
    ("ryanno01", 1999, Ballot),
    ("ripkeca01", 2007, Ballot),
    ("gwynnto01", 2007, Ballot),
    ("henderi01", 2009, Ballot),
    ("santoro01", 2012, Committee),
    ("maddugr01", 2014, Ballot),
    ("glavito02", 2014, Ballot),
    ("johnsra05", 2015, Ballot),
    ("martipe02", 2015, Ballot),
    ("smoltjo01", 2015, Ballot),
    ("biggicr01", 2015, Ballot),
    ("griffke02", 2016, Ballot),
    ("piazzmi01", 2016, Ballot),
    ("bagweje01", 2017, Ballot),
    ("raineti01", 2017, Ballot),
    ("rodriiv01", 2017, Ballot),
    ("jonesch06", 2018, Ballot),
    ("thomeji01", 2018, Ballot),
    ("guerrvl01", 2018, Ballot),
    ("hoffmtr01", 2018, Ballot),
    ("morrija02", 2018, Committee),
    ("trammal01", 2018, Committee),
    ("riverma01", 2019, Ballot),
    ("hallaro01", 2019, Ballot),
    ("martied01", 2019, Ballot),
    ("mussimi01", 2019, Ballot),
    ("baineha01", 2019, Committee),
    ("smithle02", 2019, Committee),
    ("jeterde01", 2020, Ballot),
    ("walkela01", 2020, Ballot),
    ("simmote01", 2020, Committee),
    ("ortizda01", 2022, Ballot),
    ("hodgegi01", 2022, Committee),
    ("minnimi01", 2022, Committee),
    ("olivato01", 2022, Committee),
    ("kaatji01", 2022, Committee),
    ("rolensc01", 2023, Ballot),
    ("mcgrifr01", 2023, Committee),
    ("beltrad01", 2024, Ballot),
    ("heltoto01", 2024, Ballot),
    ("mauerjo01", 2024, Ballot),
    ("suzukic01", 2025, Ballot),
    ("sabatcc01", 2025, Ballot),
    ("wagnebi02", 2025, Ballot),
    ("parkeda01", 2025, Committee),
    ("allendi01", 2025, Committee),
];

pub fn inductee(player_id: &str) -> Option<Induction> {
    INDUCTEES
        .iter()
        .find(|(id, _, _)| *id == player_id)
        .map(|&(_, year, path)| Induction { year, path })
}
