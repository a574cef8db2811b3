use std::fmt;

use serde::{Deserialize, Serialize};

use crate::composition::Composition;
use crate::element::Element;

/// Maximum number of application domains reported.
pub const MAX_APPLICATIONS: usize = 4;

/// Deviation of the percentage total from 100 tolerated before a
/// recommendation flags the data.
pub const TOTAL_TOLERANCE: f64 = 5.0;

const GENERIC_APPLICATIONS: &[&str] = &["general engineering"];

/// Application domains associated with alloys containing each element.
const APPLICATIONS: &[(Element, &[&str])] = &[
    (
        Element::Cu,
        &["electrical engineering", "plumbing", "heat exchangers"],
    ),
    (Element::Zn, &["fittings and hardware", "decorative items"]),
    (Element::Ni, &["jewelry", "coins", "chemical equipment", "marine hardware"]),
    (Element::Sn, &["bearings", "bushings"]),
    (Element::Pb, &["machined parts", "bearings"]),
    (Element::Al, &["aerospace", "automotive", "packaging"]),
    (Element::Fe, &["construction", "machine building"]),
    (Element::Cr, &["stainless equipment", "tooling"]),
    (Element::Ti, &["aerospace", "medical implants"]),
    (Element::Mg, &["lightweight structures"]),
    (Element::Si, &["castings"]),
    (Element::C, &["tool steels"]),
    (Element::Ag, &["jewelry", "electrical contacts"]),
    (Element::Au, &["jewelry", "electronics"]),
];

/// Broad alloy class derived from the dominant element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlloyClass {
    CopperBased,
    AluminumBased,
    IronBased,
    MultiComponent,
}

impl AlloyClass {
    pub fn description(self) -> &'static str {
        match self {
            Self::CopperBased => "copper-based alloy (brass, bronze or copper-nickel)",
            Self::AluminumBased => "aluminum-based alloy",
            Self::IronBased => "iron-based alloy (steel or cast iron)",
            Self::MultiComponent => "multi-component alloy",
        }
    }
}

impl fmt::Display for AlloyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Advisory notes on the quality of the submitted data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Recommendation {
    NoComposition,
    IncompleteTotal { total: f64 },
    ExcessTotal { total: f64 },
    TotalConsistent { total: f64 },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoComposition => write!(f, "no composition found; check the input format"),
            Self::IncompleteTotal { total } => write!(
                f,
                "elements sum to {total:.2}%, some elements may be missing"
            ),
            Self::ExcessTotal { total } => write!(
                f,
                "elements sum to {total:.2}%, above 100%; check the values"
            ),
            Self::TotalConsistent { total } => {
                write!(f, "elements sum to {total:.2}%, data look consistent")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dominant {
    pub element: Element,
    pub percent: f64,
}

/// One composition row with its element's typical role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementNote {
    pub element: Element,
    pub percent: f64,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub dominant: Option<Dominant>,
    pub class: AlloyClass,
    pub description: String,
    /// Plain-language character of the dominant base metal, if known.
    pub summary: Option<&'static str>,
    pub applications: Vec<&'static str>,
    pub recommendations: Vec<Recommendation>,
    pub elements: Vec<ElementNote>,
}

/// Derive descriptive attributes of a composition. Never fails; an empty
/// composition yields no dominant element and a generic description.
pub fn analyze(composition: &Composition) -> Analysis {
    let dominant = composition
        .dominant()
        .map(|(element, percent)| Dominant { element, percent });
    let class = classify(composition, dominant);

    let description = match dominant {
        Some(d) => format!(
            "{} with {:.2}% {} ({}) as the main element",
            capitalize(class.description()),
            d.percent,
            d.element.name(),
            d.element
        ),
        None => capitalize(class.description()),
    };

    Analysis {
        dominant,
        class,
        description,
        summary: dominant.and_then(|d| d.element.base_properties()),
        applications: applications(composition),
        recommendations: recommendations(composition),
        elements: element_notes(composition),
    }
}

fn classify(composition: &Composition, dominant: Option<Dominant>) -> AlloyClass {
    let share = |e: Element| composition.get(e).unwrap_or(0.0);
    if dominant.is_some_and(|d| d.element == Element::Cu) && share(Element::Cu) > 50.0 {
        AlloyClass::CopperBased
    } else if share(Element::Al) > 50.0 {
        AlloyClass::AluminumBased
    } else if share(Element::Fe) > 50.0 {
        AlloyClass::IronBased
    } else {
        AlloyClass::MultiComponent
    }
}

/// Union of the application lists of every element present, in order of
/// first appearance, capped at [`MAX_APPLICATIONS`].
pub fn applications(composition: &Composition) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for element in composition.elements() {
        let Some((_, apps)) = APPLICATIONS.iter().find(|(e, _)| *e == element) else {
            continue;
        };
        for &app in *apps {
            if !out.contains(&app) {
                out.push(app);
            }
        }
    }
    if out.is_empty() {
        return GENERIC_APPLICATIONS.to_vec();
    }
    out.truncate(MAX_APPLICATIONS);
    out
}

pub fn recommendations(composition: &Composition) -> Vec<Recommendation> {
    if composition.is_empty() {
        return vec![Recommendation::NoComposition];
    }
    let total = composition.total();
    let r = if total < 100.0 - TOTAL_TOLERANCE {
        Recommendation::IncompleteTotal { total }
    } else if total > 100.0 + TOTAL_TOLERANCE {
        Recommendation::ExcessTotal { total }
    } else {
        Recommendation::TotalConsistent { total }
    };
    vec![r]
}

pub fn element_notes(composition: &Composition) -> Vec<ElementNote> {
    composition
        .iter()
        .map(|(element, percent)| ElementNote {
            element,
            percent,
            name: element.name(),
            role: element.role(),
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
