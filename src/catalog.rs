use std::collections::HashMap;
use lazy_static::lazy_static;

/// Conversion factor between the marketplace's fixed-point nano-TON
/// prices and whole TON.
pub const NANO_TO_TON: f64 = 1_000_000_000.0;

lazy_static! {
    /// Tracked collectibles: short slot id -> marketplace collection name
    pub static ref GIFT_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("pepe", "Plush Pepe");
        m.insert("moon", "Heart Locket");
        m.insert("cap", "Durov's Cap");
        m.insert("plum", "Precious Peach");
        m.insert("spartan", "Heroic Helmet");
        m.insert("gold", "Mighty Arm");
        m
    };

    /// Reverse lookup: marketplace collection name -> slot id
    pub static ref GIFT_ID_MAP: HashMap<&'static str, &'static str> = {
        GIFT_NAMES.iter().map(|(id, name)| (*name, *id)).collect()
    };
}

/// Catalog order used for fetching and rendering. HashMap iteration order
/// is unstable, so the dashboard rows go through this list.
pub const GIFT_IDS: [&str; 6] = ["pepe", "moon", "cap", "plum", "spartan", "gold"];

pub const MONTH_NAMES: [&str; 12] = [
    "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY", "JUNE",
    "JULY", "AUGUST", "SEPTEMBER", "OCTOBER", "NOVEMBER", "DECEMBER",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_round_trip() {
        for id in GIFT_IDS {
            let name = GIFT_NAMES.get(id).expect("every slot id has a name");
            assert_eq!(GIFT_ID_MAP.get(name), Some(&id));
        }
        assert_eq!(GIFT_NAMES.len(), GIFT_IDS.len());
    }

    #[test]
    fn test_month_names_cover_the_year() {
        assert_eq!(MONTH_NAMES.len(), 12);
        assert_eq!(MONTH_NAMES[0], "JANUARY");
        assert_eq!(MONTH_NAMES[11], "DECEMBER");
    }
}
