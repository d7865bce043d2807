//! Domain synonym substitution.
//!
//! The rule table is plain data: each row lists the whole-word alternatives
//! and the literal text that replaces them. Rows run in order against the
//! accumulating string, so a later row sees the output of earlier ones.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

struct RuleSpec {
    alternatives: &'static [&'static str],
    replacement: &'static str,
}

static RULE_TABLE: &[RuleSpec] = &[
    // units
    RuleSpec { alternatives: &["1l", "1litro", "1000ml"], replacement: "1L" },
    RuleSpec { alternatives: &["500g", "500gramas"], replacement: "500g" },
    RuleSpec { alternatives: &["5kg", "5quilos"], replacement: "5kg" },
    RuleSpec { alternatives: &["900ml"], replacement: "900ml" },
    RuleSpec { alternatives: &["1kg", "1quilo", "1000g"], replacement: "1kg" },
    // product attributes
    RuleSpec { alternatives: &["zero lactose", "sem lactose"], replacement: "Zero Lactose" },
    RuleSpec { alternatives: &["tipo 1"], replacement: "Tipo 1" },
    RuleSpec { alternatives: &["fresco", "congelado"], replacement: "" },
    RuleSpec { alternatives: &["patinho"], replacement: "Patinho" },
];

static DEFAULT_RULES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    RULE_TABLE
        .iter()
        .map(|spec| {
            SubstitutionRule::new(spec.alternatives, spec.replacement)
                .expect("built-in substitution pattern must compile")
        })
        .collect()
});

/// One rewrite: any listed word (ASCII case-insensitive, ASCII word
/// boundaries) becomes `replacement`, taken literally. Alternatives must be
/// ASCII; anything else fails to compile.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pattern: Regex,
    replacement: String,
}

impl SubstitutionRule {
    pub fn new(alternatives: &[&str], replacement: impl Into<String>) -> Result<Self, regex::Error> {
        let body = alternatives
            .iter()
            .map(|alt| regex::escape(alt))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i-u)\b(?:{})\b", body))?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned()
    }
}

/// Ordered list of substitution rules.
#[derive(Debug, Clone)]
pub struct Standardizer {
    rules: Vec<SubstitutionRule>,
}

impl Default for Standardizer {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

impl Standardizer {
    pub fn with_rules(rules: Vec<SubstitutionRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    pub fn standardize(&self, text: &str) -> String {
        apply_all(&self.rules, text)
    }
}

/// Standardized key of `text` under the built-in rules.
///
/// Safe on arbitrary text; the result is a comparison key and is never
/// normalized again, so removed words may leave extra spaces behind.
pub fn standardize(text: &str) -> String {
    apply_all(&DEFAULT_RULES, text)
}

fn apply_all(rules: &[SubstitutionRule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
