//! Keccak256 Merkle allowlist verification.
//!
//! An allowlist is committed on-chain as a single 32-byte root. Leaves are
//! `keccak256(lowercased member)`; internal nodes hash the byte-wise sorted
//! concatenation of their children, so a verifier only needs the sibling
//! values, never left/right positions.
//!
//! [`verify`] is pure and stateless. It applies no "empty allowlist" policy:
//! interpreting an all-zero root as "anyone may buy" belongs to the caller.
//! [`AllowlistTree`] builds roots and proofs off-chain (tooling and tests);
//! contracts only ever need [`leaf_hash`] and [`verify`].

use sha3::{Digest, Keccak256};

/// A keccak256 digest.
pub type Hash32 = [u8; 32];

/// The all-zero sentinel. Never produced by [`AllowlistTree`]; callers use it
/// to mean "no allowlist configured".
pub const EMPTY_ROOT: Hash32 = [0u8; 32];

/// Leaf digest for a member: keccak256 of the ASCII-lowercased string.
pub fn leaf_hash(member: &str) -> Hash32 {
    keccak(member.to_ascii_lowercase().as_bytes())
}

/// Parent digest of a node pair: keccak256 of the sorted concatenation.
pub fn combine(a: &Hash32, b: &Hash32) -> Hash32 {
    let mut hasher = Keccak256::new();
    if a <= b {
        hasher.update(a);
        hasher.update(b);
    } else {
        hasher.update(b);
        hasher.update(a);
    }
    hasher.finalize().into()
}

/// Fold `proof` over `leaf` and compare the result to `root`.
///
/// An empty proof verifies iff `leaf == root` (single-member allowlist).
pub fn verify(root: &Hash32, leaf: Hash32, proof: &[Hash32]) -> bool {
    let computed = proof.iter().fold(leaf, |acc, sibling| combine(&acc, sibling));
    computed == *root
}

fn keccak(bytes: &[u8]) -> Hash32 {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Merkle tree over an allowlist, built off-chain.
///
/// Level layout: adjacent nodes pair up; an unpaired trailing node is promoted
/// unhashed to the next level. Leaves keep insertion order.
#[derive(Debug, Clone)]
pub struct AllowlistTree {
    layers: Vec<Vec<Hash32>>,
}

impl AllowlistTree {
    /// Build a tree from member strings. Returns `None` for an empty set,
    /// which has no meaningful root (the on-chain sentinel covers that case).
    pub fn from_members<I, S>(members: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let leaves: Vec<Hash32> = members.into_iter().map(|m| leaf_hash(m.as_ref())).collect();
        if leaves.is_empty() {
            return None;
        }

        let mut layers = vec![leaves];
        while layers.last().map(Vec::len).unwrap_or(0) > 1 {
            let prev = layers.last().expect("non-empty by construction");
            let mut next = Vec::with_capacity(prev.len().div_ceil(2));
            for pair in prev.chunks(2) {
                match pair {
                    [a, b] => next.push(combine(a, b)),
                    [a] => next.push(*a),
                    _ => unreachable!(),
                }
            }
            layers.push(next);
        }
        Some(Self { layers })
    }

    /// The committed root.
    pub fn root(&self) -> Hash32 {
        self.layers.last().expect("tree has at least one layer")[0]
    }

    /// Sibling path for `member`, or `None` if it is not in the set.
    pub fn proof_of(&self, member: &str) -> Option<Vec<Hash32>> {
        let leaf = leaf_hash(member);
        let mut index = self.layers[0].iter().position(|l| *l == leaf)?;

        let mut proof = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = index ^ 1;
            if let Some(hash) = layer.get(sibling) {
                proof.push(*hash);
            }
            index /= 2;
        }
        Some(proof)
    }
}
