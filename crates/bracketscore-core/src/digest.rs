//! Bracket fingerprints.
//!
//! Standings are only meaningful against the exact results they were
//! computed from. The digest is a SHA-256 over the breadth-first node
//! sequence, so two brackets share a digest iff they have the same shape,
//! labels, winners and scores.

use bracketscore_types::{Winner, constants::BRACKET_DIGEST_DOMAIN};
use sha2::{Digest, Sha256};

use crate::{Bracket, Entrant};

fn update_label(hasher: &mut Sha256, label: &str) {
    hasher.update((label.len() as u64).to_le_bytes());
    hasher.update(label.as_bytes());
}

fn update_entrant(hasher: &mut Sha256, entrant: &Entrant) {
    match entrant {
        // Nested matches are identified by their position in the walk.
        Entrant::Match(_) => hasher.update([0u8]),
        Entrant::Participant(p) => {
            hasher.update([1u8]);
            update_label(hasher, p.as_str());
        }
    }
}

/// Compute the digest of a bracket.
#[must_use]
pub fn compute_bracket_digest(bracket: &Bracket) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(BRACKET_DIGEST_DOMAIN);
    hasher.update((bracket.match_count() as u64).to_le_bytes());

    for id in bracket.levels().into_iter().flatten() {
        let m = bracket.node(id);
        update_entrant(&mut hasher, m.left());
        update_entrant(&mut hasher, m.right());
        match m.winner() {
            Winner::Unknown => hasher.update([0u8]),
            Winner::Decided(p) => {
                hasher.update([1u8]);
                update_label(&mut hasher, p.as_str());
            }
        }
        update_label(&mut hasher, &m.left_score().normalize().to_string());
        update_label(&mut hasher, &m.right_score().normalize().to_string());
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Recompute the digest and compare it with `expected`.
#[must_use]
pub fn verify_bracket_digest(bracket: &Bracket, expected: &[u8; 32]) -> bool {
    compute_bracket_digest(bracket) == *expected
}

/// Hex form used in exported files.
#[must_use]
pub fn bracket_digest_hex(bracket: &Bracket) -> String {
    hex::encode(compute_bracket_digest(bracket))
}
