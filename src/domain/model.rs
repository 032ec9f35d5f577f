use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Heavenly stems in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    pub const SYMBOLS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

    /// Stem at `index` taken modulo 10, so negative indices wrap as well.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(10) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        Self::SYMBOLS[self.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Stem::Jia => "Jia",
            Stem::Yi => "Yi",
            Stem::Bing => "Bing",
            Stem::Ding => "Ding",
            Stem::Wu => "Wu",
            Stem::Ji => "Ji",
            Stem::Geng => "Geng",
            Stem::Xin => "Xin",
            Stem::Ren => "Ren",
            Stem::Gui => "Gui",
        }
    }

    /// Two consecutive stems per element.
    pub fn element(self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Earthly branches in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    pub const SYMBOLS: [char; 12] = [
        '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
    ];

    /// Branch at `index` taken modulo 12.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        Self::SYMBOLS[self.index()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Branch::Zi => "Zi",
            Branch::Chou => "Chou",
            Branch::Yin => "Yin",
            Branch::Mao => "Mao",
            Branch::Chen => "Chen",
            Branch::Si => "Si",
            Branch::Wu => "Wu",
            Branch::Wei => "Wei",
            Branch::Shen => "Shen",
            Branch::You => "You",
            Branch::Xu => "Xu",
            Branch::Hai => "Hai",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The five elements. Declaration order is also the tie-break order when
/// picking the missing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    pub fn from_indices(stem_index: i64, branch_index: i64) -> Self {
        Self::new(Stem::from_index(stem_index), Branch::from_index(branch_index))
    }

    /// Romanised form, e.g. "Jia-Zi".
    pub fn romanized(&self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Stem counts per element. Only the four stems of a chart are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    pub fn add(&mut self, element: Element) {
        let slot = &mut self.counts[element as usize];
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, element: Element) -> u8 {
        self.counts[element as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        Element::ALL.into_iter().map(move |e| (e, self.count(e)))
    }

    /// Lowest count; the earliest element in declaration order wins ties.
    pub fn missing(&self) -> Element {
        let mut missing = Element::Wood;
        for (element, count) in self.iter() {
            if count < self.count(missing) {
                missing = element;
            }
        }
        missing
    }
}

impl Serialize for ElementTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Element::ALL.len()))?;
        for (element, count) in self.iter() {
            map.serialize_entry(element.name(), &count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Pillars {
    pub fn stems(&self) -> [Stem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }
}

/// A complete chart. Serialises to the response body of the calculate endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub pillars: Pillars,
    pub day_master: Stem,
    pub day_master_element: Element,
    pub five_elements: ElementTally,
    pub missing_element: Element,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<i64>,
}

impl BirthInput {
    pub fn new(year: i64, month: i64, day: i64, hour: Option<i64>) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_element_map_is_two_to_one() {
        for element in Element::ALL {
            let n = Stem::ALL.iter().filter(|s| s.element() == element).count();
            assert_eq!(n, 2, "{element} should own two stems");
        }
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn test_index_wraps() {
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Branch::from_index(-1), Branch::Hai);
        assert_eq!(Branch::from_index(i64::MIN).index(), i64::MIN.rem_euclid(12) as usize);
        for (i, stem) in Stem::ALL.iter().enumerate() {
            assert_eq!(stem.index(), i);
        }
    }

    #[test]
    fn test_pillar_display() {
        let pillar = Pillar::new(Stem::Jia, Branch::Zi);
        assert_eq!(pillar.to_string(), "甲子");
        assert_eq!(pillar.to_string().chars().count(), 2);
        assert_eq!(pillar.romanized(), "Jia-Zi");
        assert_eq!(serde_json::to_string(&pillar).unwrap(), "\"甲子\"");
    }

    #[test]
    fn test_tally_missing_tie_break() {
        let mut tally = ElementTally::default();
        assert_eq!(tally.missing(), Element::Wood);

        tally.add(Element::Wood);
        tally.add(Element::Fire);
        tally.add(Element::Metal);
        tally.add(Element::Metal);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.missing(), Element::Earth);
    }

    #[test]
    fn test_tally_add_saturates() {
        let mut tally = ElementTally::default();
        for _ in 0..300 {
            tally.add(Element::Fire);
        }
        assert_eq!(tally.count(Element::Fire), u8::MAX);
        assert_eq!(tally.missing(), Element::Wood);
    }

    #[test]
    fn test_tally_serializes_all_elements_in_order() {
        let mut tally = ElementTally::default();
        tally.add(Element::Water);
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(
            json,
            r#"{"Wood":0,"Fire":0,"Earth":0,"Metal":0,"Water":1}"#
        );
    }
}
