use tracing::debug;

use crate::composition::Composition;
use crate::element::{ELEMENTS, Element};

/// Extracts element/percentage pairs from free-form text such as
/// `"Cu 75.45%, Ni 12.50%, Zn 9.76%"` or OCR output.
///
/// Parsing never fails: text without recognizable pairs yields an empty
/// [`Composition`].
#[derive(Debug, Clone)]
pub struct Parser {
    vocabulary: Vec<Element>,
}

impl Parser {
    /// Parser recognizing every supported element.
    pub fn new() -> Self {
        Self::with_vocabulary(ELEMENTS)
    }

    /// Parser recognizing only the given elements. Symbols of other
    /// elements are skipped like any unknown word.
    pub fn with_vocabulary(vocabulary: &[Element]) -> Self {
        let mut v = Vec::with_capacity(vocabulary.len());
        for &e in vocabulary {
            if !v.contains(&e) {
                v.push(e);
            }
        }
        Parser { vocabulary: v }
    }

    pub fn vocabulary(&self) -> &[Element] {
        &self.vocabulary
    }

    fn lookup(&self, token: &str) -> Option<Element> {
        self.vocabulary
            .iter()
            .copied()
            .find(|e| e.symbol() == token)
    }

    /// Parse text into a composition.
    ///
    /// A vocabulary symbol takes the following token as its value. When
    /// that token is not a valid percentage the symbol is dropped and
    /// scanning resumes at the token right after the symbol. A repeated
    /// symbol overwrites the earlier value.
    ///
    /// # Examples
    /// ```
    /// use alloydb::{Element, Parser};
    ///
    /// let c = Parser::new().parse("Cu: 62.59, Zn: 33.41");
    /// assert_eq!(c.get(Element::Cu), Some(62.59));
    /// assert_eq!(c.get(Element::Zn), Some(33.41));
    /// ```
    pub fn parse(&self, text: &str) -> Composition {
        let tokens: Vec<&str> = tokenize(text).collect();
        let mut composition = Composition::new();

        let mut i = 0;
        while i < tokens.len() {
            let Some(element) = self.lookup(tokens[i]) else {
                i += 1;
                continue;
            };
            match tokens.get(i + 1).and_then(|t| parse_percent(t)) {
                Some(percent) => {
                    if let Some(previous) = composition.insert(element, percent) {
                        debug!(%element, previous, percent, "duplicate element, keeping later value");
                    }
                    i += 2;
                }
                None => {
                    debug!(%element, value = tokens.get(i + 1).copied(), "discarding element without valid value");
                    i += 1;
                }
            }
        }

        composition
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse text with the full element vocabulary.
pub fn parse(text: &str) -> Composition {
    Parser::new().parse(text)
}

// `%` is treated as a separator rather than removed, so "75%Ni" still splits.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | ':' | ';' | '%'))
        .filter(|t| !t.is_empty())
}

fn parse_percent(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        // "-0" parses as -0.0
        .map(|p| p + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_signs_and_commas() {
        let c = parse("Cu 75.45%, Ni 12.50%, Zn 9.76%");
        assert_eq!(
            c,
            Composition::from([(Element::Cu, 75.45), (Element::Ni, 12.5), (Element::Zn, 9.76)])
        );
    }

    #[test]
    fn test_colons() {
        let c = parse("Cu: 62.59, Zn: 33.41");
        assert_eq!(c, Composition::from([(Element::Cu, 62.59), (Element::Zn, 33.41)]));
    }

    #[test]
    fn test_malformed_value_is_dropped() {
        let c = parse("Cu 62.59 Zn 33.41 Pb abc");
        assert_eq!(c, Composition::from([(Element::Cu, 62.59), (Element::Zn, 33.41)]));
    }

    #[test]
    fn test_symbol_after_failed_symbol_is_used() {
        let c = parse("Pb Zn 30");
        assert_eq!(c, Composition::from([(Element::Zn, 30.0)]));
    }

    #[test]
    fn test_last_write_wins() {
        let c = parse("Cu 60 Zn 40 Cu 58");
        assert_eq!(c.get(Element::Cu), Some(58.0));
        assert_eq!(c.elements().collect::<Vec<_>>(), vec![Element::Cu, Element::Zn]);
    }

    #[test]
    fn test_no_elements() {
        assert!(parse("").is_empty());
        assert!(parse("hello world 42 %%% ;;").is_empty());
        assert!(parse("copper brass bronze").is_empty());
    }

    #[test]
    fn test_case_sensitive_symbols() {
        assert!(parse("cu 60 ZN 40").is_empty());
    }

    #[test]
    fn test_element_name_without_value_has_no_fallback() {
        assert!(parse("Cu").is_empty());
        assert!(parse("analysis: Cu, Zn").is_empty());
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(parse("Cu -5 Zn NaN Pb inf").is_empty());
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let c = parse("Zn -0 Cu -0.0");
        let zn = c.get(Element::Zn).unwrap();
        assert_eq!(zn, 0.0);
        assert!(zn.is_sign_positive());
        assert!(c.get(Element::Cu).unwrap().is_sign_positive());
        assert_eq!(format!("{zn}"), "0");
    }

    #[test]
    fn test_multiline_ocr_text() {
        let text = "Element  Wt%\nCu\t62.10\nZn\t35.90\nPb\t1.80\nFe 0.2 ppm";
        let c = parse(text);
        assert_eq!(c.len(), 4);
        assert_eq!(c.get(Element::Fe), Some(0.2));
    }

    #[test]
    fn test_restricted_vocabulary() {
        let parser = Parser::with_vocabulary(&[Element::Cu, Element::Zn, Element::Cu]);
        assert_eq!(parser.vocabulary(), &[Element::Cu, Element::Zn]);
        let c = parser.parse("Cu 60 Ni 10 Zn 30");
        assert_eq!(c, Composition::from([(Element::Cu, 60.0), (Element::Zn, 30.0)]));
    }
}
