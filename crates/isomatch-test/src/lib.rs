//! isomatch - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `isomatch_test::` paths.

pub use isomatch_app as app;
pub use isomatch_core as shared;
pub use isomatch_grammar as grammar;

/// Characters that are meaningful to the grammar, used to mutate samples.
pub const MUTATION_CHARS: &[char] = &[
    '-', ':', '.', 'T', 'W', 'Z', '+', '\u{2212}', '0', '7', '8', ' ',
];

/// Every single-character deletion, duplication and substitution of `input`.
#[must_use]
pub fn mutations(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::new();

    for i in 0..chars.len() {
        let mut deleted = chars.clone();
        deleted.remove(i);
        out.push(deleted.into_iter().collect());

        let mut duplicated = chars.clone();
        duplicated.insert(i, chars[i]);
        out.push(duplicated.into_iter().collect());

        for &replacement in MUTATION_CHARS {
            if replacement != chars[i] {
                let mut replaced = chars.clone();
                replaced[i] = replacement;
                out.push(replaced.into_iter().collect());
            }
        }
    }

    out
}
