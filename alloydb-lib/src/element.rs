use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlloyDbError;

/// Chemical elements recognized in alloy compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Cu,
    Zn,
    Pb,
    Fe,
    Al,
    Ni,
    Sn,
    Ti,
    Si,
    C,
    Mn,
    Cr,
    Mg,
    Ag,
    Au,
}

/// The full supported vocabulary, in the order used by the default parser.
pub const ELEMENTS: &[Element] = &[
    Element::Cu,
    Element::Zn,
    Element::Pb,
    Element::Fe,
    Element::Al,
    Element::Ni,
    Element::Sn,
    Element::Ti,
    Element::Si,
    Element::C,
    Element::Mn,
    Element::Cr,
    Element::Mg,
    Element::Ag,
    Element::Au,
];

impl Element {
    /// Exact, case-sensitive symbol lookup. `"CU"` and `"cu"` are not `Cu`.
    pub fn from_symbol(sym: &str) -> Option<Self> {
        ELEMENTS.iter().copied().find(|e| e.symbol() == sym)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Cu => "Cu",
            Self::Zn => "Zn",
            Self::Pb => "Pb",
            Self::Fe => "Fe",
            Self::Al => "Al",
            Self::Ni => "Ni",
            Self::Sn => "Sn",
            Self::Ti => "Ti",
            Self::Si => "Si",
            Self::C => "C",
            Self::Mn => "Mn",
            Self::Cr => "Cr",
            Self::Mg => "Mg",
            Self::Ag => "Ag",
            Self::Au => "Au",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cu => "copper",
            Self::Zn => "zinc",
            Self::Pb => "lead",
            Self::Fe => "iron",
            Self::Al => "aluminum",
            Self::Ni => "nickel",
            Self::Sn => "tin",
            Self::Ti => "titanium",
            Self::Si => "silicon",
            Self::C => "carbon",
            Self::Mn => "manganese",
            Self::Cr => "chromium",
            Self::Mg => "magnesium",
            Self::Ag => "silver",
            Self::Au => "gold",
        }
    }

    /// What the element typically contributes to an alloy.
    pub fn role(self) -> &'static str {
        match self {
            Self::Cu => "alloy base, provides electrical conductivity and ductility",
            Self::Zn => "improves castability and lowers cost",
            Self::Pb => "improves machinability",
            Self::Fe => "adds strength and hardness",
            Self::Al => "adds strength and oxidation resistance",
            Self::Ni => "adds strength and corrosion resistance",
            Self::Sn => "improves wear and corrosion resistance",
            Self::Ti => "adds strength at low density",
            Self::Si => "improves fluidity and castability",
            Self::C => "raises hardness of steel",
            Self::Mn => "deoxidizes and adds toughness",
            Self::Cr => "provides stainless corrosion resistance",
            Self::Mg => "lowers density and adds strength",
            Self::Ag => "raises conductivity and tarnish resistance",
            Self::Au => "provides chemical inertness",
        }
    }

    /// Plain-language character of an alloy based on this element, if it is
    /// a common base metal.
    pub fn base_properties(self) -> Option<&'static str> {
        match self {
            Self::Cu => Some("good electrical conductivity and corrosion resistance"),
            Self::Al => Some("light and strong"),
            Self::Ti => Some("strong and corrosion resistant"),
            Self::Fe => Some("strong and dependable"),
            Self::Ni => Some("corrosion resistant and heat resistant"),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = AlloyDbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| AlloyDbError::UnknownElement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup_is_case_sensitive() {
        assert_eq!(Element::from_symbol("Cu"), Some(Element::Cu));
        assert_eq!(Element::from_symbol("cu"), None);
        assert_eq!(Element::from_symbol("CU"), None);
        assert_eq!(Element::from_symbol("Xx"), None);
    }

    #[test]
    fn test_symbols_round_trip() {
        for &e in ELEMENTS {
            assert_eq!(e.symbol().parse::<Element>().unwrap(), e);
        }
    }

    #[test]
    fn test_unknown_symbol_is_error() {
        assert!(matches!(
            "Co".parse::<Element>(),
            Err(AlloyDbError::UnknownElement(_))
        ));
    }
}
