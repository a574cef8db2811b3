use crate::analyzer::{Analysis, analyze};
use crate::catalog::Catalog;
use crate::composition::Composition;
use crate::matcher::{Match, MatchOptions, find_matches};
use crate::parser::Parser;

/// The main interface to the alloy engine.
///
/// Owns its parser, reference catalog and match settings; nothing is
/// shared globally, so independent instances can use different catalogs.
#[derive(Debug, Clone)]
pub struct AlloyDb {
    parser: Parser,
    catalog: Catalog,
    options: MatchOptions,
}

/// Everything derived from one submitted text.
#[derive(Debug, Clone, PartialEq)]
pub struct Identification<'a> {
    pub composition: Composition,
    pub analysis: Analysis,
    pub matches: Vec<Match<'a>>,
}

impl Identification<'_> {
    /// No element/value pairs were found in the text.
    pub fn is_empty(&self) -> bool {
        self.composition.is_empty()
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

impl AlloyDb {
    /// Engine over the embedded catalog with default settings.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        AlloyDb {
            parser: Parser::new(),
            catalog,
            options: MatchOptions::default(),
        }
    }

    pub fn parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }

    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn match_options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn parse(&self, text: &str) -> Composition {
        self.parser.parse(text)
    }

    pub fn analyze(&self, composition: &Composition) -> Analysis {
        analyze(composition)
    }

    pub fn find_matches(&self, composition: &Composition) -> Vec<Match<'_>> {
        find_matches(composition, &self.catalog, &self.options)
    }

    /// Parse, analyze and match in one step.
    pub fn identify(&self, text: &str) -> Identification<'_> {
        let composition = self.parse(text);
        let analysis = self.analyze(&composition);
        let matches = self.find_matches(&composition);
        Identification {
            composition,
            analysis,
            matches,
        }
    }
}

impl Default for AlloyDb {
    fn default() -> Self {
        Self::new()
    }
}
