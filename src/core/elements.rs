use crate::domain::model::{Element, ElementTally, Pillars};

/// Tally of the stems of the four pillars. Branches are not counted.
pub fn analyze_five_elements(pillars: &Pillars) -> (ElementTally, Element) {
    let mut tally = ElementTally::default();
    for stem in pillars.stems() {
        tally.add(stem.element());
    }
    let missing = tally.missing();
    (tally, missing)
}
