//! Literal → Rust identifier conversion for generated enum variants.

use proptype_core::FxHashSet;

/// UpperCamelCase identifier for a modifier name.
///
/// Non-alphanumeric characters split words; each word keeps its first
/// character upper-cased and the rest lower-cased, so `"HP Regen Min"`
/// becomes `HpRegenMin` and `"Experience (Muscle)"` becomes
/// `ExperienceMuscle`.
pub fn variant_ident(literal: &str) -> String {
    let mut ident = String::with_capacity(literal.len());
    for word in literal
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            ident.push(first.to_ascii_uppercase());
            ident.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    if ident.is_empty() {
        ident.push_str("Unnamed");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, 'N');
    }
    if ident == "Self" {
        ident.push_str("Value");
    }
    ident
}

/// Hands out unique variant identifiers within one enum.
#[derive(Debug, Default)]
pub struct IdentAllocator {
    taken: FxHashSet<String>,
}

impl IdentAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier for `literal`, suffixed with `2`, `3`, ... on collision.
    pub fn allocate(&mut self, literal: &str) -> String {
        let base = variant_ident(literal);
        let mut candidate = base.clone();
        let mut suffix = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}{suffix}");
            suffix += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}
