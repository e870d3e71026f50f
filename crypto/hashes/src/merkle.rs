//! CryptoNote Merkle tree hashing.
//!
//! Unlike a Bitcoin-style tree the last node is never duplicated: the leaves that do not
//! fit in the largest power of two below the count are paired first, the rest are carried
//! up unchanged.

use crate::{hasher::HashWriter, Hash, HASH_BITS};

#[inline]
fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut writer = HashWriter::new();
    writer.update(left.as_bytes()).update(right.as_bytes());
    writer.finalize()
}

/// Floor of `log2(count)`; zero for a count of zero or one.
pub fn tree_depth(count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (usize::BITS - 1 - count.leading_zeros()) as usize
}

/// Computes the Merkle root of `hashes`. Returns `None` for an empty list.
pub fn tree_hash(hashes: &[Hash]) -> Option<Hash> {
    let count = hashes.len();
    match count {
        0 => None,
        1 => Some(hashes[0]),
        2 => Some(hash_pair(&hashes[0], &hashes[1])),
        _ => {
            // largest power of two strictly below count
            let mut cnt = 1usize << tree_depth(count - 1);
            let carried = 2 * cnt - count;
            let mut ints: Vec<Hash> = Vec::with_capacity(cnt);
            ints.extend_from_slice(&hashes[..carried]);
            for pair in hashes[carried..].chunks_exact(2) {
                ints.push(hash_pair(&pair[0], &pair[1]));
            }
            debug_assert_eq!(ints.len(), cnt);

            while cnt > 2 {
                cnt >>= 1;
                for j in 0..cnt {
                    ints[j] = hash_pair(&ints[2 * j], &ints[2 * j + 1]);
                }
            }
            Some(hash_pair(&ints[0], &ints[1]))
        }
    }
}

/// Rebuilds a Merkle root from `leaf` and its authentication `branch`.
///
/// `branch[0]` is the sibling closest to the root. Bit `depth` of `path` selects the side of
/// the running hash at that level: set means the running hash is the right child. A missing
/// path places the running hash on the left at every level.
pub fn tree_hash_from_branch(branch: &[Hash], leaf: Hash, path: Option<&Hash>) -> Hash {
    let mut current = leaf;
    for depth in (0..branch.len()).rev() {
        let on_right = path.map_or(false, |p| depth < HASH_BITS && p.bit(depth));
        current = if on_right {
            hash_pair(&branch[depth], &current)
        } else {
            hash_pair(&current, &branch[depth])
        };
    }
    current
}
