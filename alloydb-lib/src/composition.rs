use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Element to weight-percent mapping.
///
/// Keys are unique. Iteration follows insertion order; re-inserting an
/// element replaces its value but keeps its original position. Percentages
/// are not required to sum to 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    entries: Vec<(Element, f64)>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an element, returning the previous value.
    pub fn insert(&mut self, element: Element, percent: f64) -> Option<f64> {
        match self.entries.iter_mut().find(|(e, _)| *e == element) {
            Some((_, value)) => Some(std::mem::replace(value, percent)),
            None => {
                self.entries.push((element, percent));
                None
            }
        }
    }

    pub fn get(&self, element: Element) -> Option<f64> {
        self.entries
            .iter()
            .find(|(e, _)| *e == element)
            .map(|&(_, p)| p)
    }

    pub fn contains(&self, element: Element) -> bool {
        self.get(element).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.entries.iter().map(|&(e, _)| e)
    }

    /// Sum of all percentages.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, p)| p).sum()
    }

    /// Element with the largest percentage. Ties go to the element inserted
    /// first; `None` for an empty composition.
    pub fn dominant(&self) -> Option<(Element, f64)> {
        let mut best: Option<(Element, f64)> = None;
        for &(e, p) in &self.entries {
            match best {
                Some((_, bp)) if p <= bp => {}
                _ => best = Some((e, p)),
            }
        }
        best
    }
}

impl FromIterator<(Element, f64)> for Composition {
    fn from_iter<I: IntoIterator<Item = (Element, f64)>>(iter: I) -> Self {
        let mut c = Composition::new();
        for (e, p) in iter {
            c.insert(e, p);
        }
        c
    }
}

impl<const N: usize> From<[(Element, f64); N]> for Composition {
    fn from(pairs: [(Element, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut c = Composition::new();
        c.insert(Element::Cu, 60.0);
        c.insert(Element::Zn, 30.0);
        assert_eq!(c.insert(Element::Cu, 65.0), Some(60.0));
        let order: Vec<_> = c.elements().collect();
        assert_eq!(order, vec![Element::Cu, Element::Zn]);
        assert_eq!(c.get(Element::Cu), Some(65.0));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_dominant_tie_goes_to_first() {
        let c = Composition::from([(Element::Zn, 40.0), (Element::Cu, 40.0), (Element::Pb, 20.0)]);
        assert_eq!(c.dominant(), Some((Element::Zn, 40.0)));
    }

    #[test]
    fn test_dominant_empty() {
        assert_eq!(Composition::new().dominant(), None);
    }

    #[test]
    fn test_total() {
        let c = Composition::from([(Element::Cu, 62.5), (Element::Zn, 37.5)]);
        assert_eq!(c.total(), 100.0);
    }
}
