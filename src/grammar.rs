//! Grammar registry: which tokenizer definitions are loaded for this process.
//!
//! The registry is an explicit value owned by the server loop and passed to
//! the tool by `&mut`, so tests can swap in a registry that reports chosen
//! languages as present or absent.

use std::collections::{HashMap, HashSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

pub const FALLBACK_LANGUAGE: &str = "javascript";
const FALLBACK_SYNTAX_NAME: &str = "JavaScript";

pub trait GrammarRegistry {
    fn has_grammar(&self, language: &str) -> bool;

    /// Register the grammar for `language`. Returns `false` when no
    /// definition is available; never fails otherwise.
    fn try_load(&mut self, language: &str) -> bool;

    fn get(&self, language: &str) -> Option<&SyntaxReference>;

    /// Grammar used when the requested language is unavailable.
    fn fallback(&self) -> &SyntaxReference;

    /// Definition set the grammars belong to; the tokenizer resolves
    /// embedded syntaxes through it.
    fn syntax_set(&self) -> &SyntaxSet;
}

/// Grammar chosen for one tokenization.
#[derive(Debug, Clone, Copy)]
pub struct SelectedGrammar<'a> {
    pub syntax: &'a SyntaxReference,
    pub fallback: bool,
}

/// Make a best-effort attempt to have `language` registered.
pub fn ensure_loaded<R: GrammarRegistry + ?Sized>(registry: &mut R, language: &str) -> bool {
    if registry.has_grammar(language) {
        return true;
    }
    registry.try_load(language)
}

/// Registered grammar for `language`, else the fallback.
pub fn select<'a, R: GrammarRegistry + ?Sized>(
    registry: &'a R,
    language: &str,
) -> SelectedGrammar<'a> {
    match registry.get(language) {
        Some(syntax) => SelectedGrammar {
            syntax,
            fallback: false,
        },
        None => SelectedGrammar {
            syntax: registry.fallback(),
            fallback: true,
        },
    }
}

/// Registry backed by syntect's bundled syntax definitions.
///
/// Loaded ids map to the syntax name they resolved to. Ids that failed to
/// resolve are remembered so the lookup happens once per id.
pub struct SyntaxRegistry {
    catalog: SyntaxSet,
    loaded: HashMap<String, String>,
    missing: HashSet<String>,
}

impl SyntaxRegistry {
    pub fn new() -> Self {
        Self::with_catalog(SyntaxSet::load_defaults_newlines())
    }

    pub fn with_catalog(catalog: SyntaxSet) -> Self {
        let mut registry = Self {
            catalog,
            loaded: HashMap::new(),
            missing: HashSet::new(),
        };
        registry.try_load(FALLBACK_LANGUAGE);
        registry
    }

    pub fn loaded_languages(&self) -> impl Iterator<Item = &str> {
        self.loaded.keys().map(String::as_str)
    }
}

impl Default for SyntaxRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRegistry for SyntaxRegistry {
    fn has_grammar(&self, language: &str) -> bool {
        self.loaded.contains_key(language)
    }

    fn try_load(&mut self, language: &str) -> bool {
        if self.loaded.contains_key(language) {
            return true;
        }
        if self.missing.contains(language) {
            return false;
        }

        match self.catalog.find_syntax_by_token(language) {
            Some(syntax) => {
                tracing::debug!(language, syntax = %syntax.name, "grammar loaded");
                self.loaded.insert(language.to_string(), syntax.name.clone());
                true
            }
            None => {
                tracing::debug!(language, "no grammar available; using fallback");
                self.missing.insert(language.to_string());
                false
            }
        }
    }

    fn get(&self, language: &str) -> Option<&SyntaxReference> {
        let name = self.loaded.get(language)?;
        self.catalog.find_syntax_by_name(name)
    }

    fn fallback(&self) -> &SyntaxReference {
        self.catalog
            .find_syntax_by_name(FALLBACK_SYNTAX_NAME)
            .unwrap_or_else(|| self.catalog.find_syntax_plain_text())
    }

    fn syntax_set(&self) -> &SyntaxSet {
        &self.catalog
    }
}
