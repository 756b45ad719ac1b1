//! Storage for compressed key suffixes (tails).
//!
//! A tail is the suffix a key leaves behind once its trie path becomes a
//! single-child chain; the trie stores it as one string instead of a chain
//! of nodes. Tails live either as a plain string table or folded into a
//! shared dictionary: a secondary trie over the reversed tails plus a
//! bit-packed vector of fixed-width identifiers into it.

use std::borrow::Cow;

use crate::bitvec::BitVector;
use crate::trie::Trie;

const EMPTY: &[u8] = &[];

/// Tail storage in one of its two modes.
pub(crate) enum TailStore {
    /// One owned byte string per tail; the tail id indexes directly.
    Plain(Vec<Vec<u8>>),
    /// Shared dictionary: every distinct reversed tail lives in `trie`
    /// (itself plain-mode), and `ids` packs one `id_bits`-wide entry per
    /// original tail, low bit first.
    Dict {
        trie: Box<Trie>,
        ids: BitVector,
        id_bits: u64,
    },
}

impl TailStore {
    /// Resolve a tail id to its bytes.
    ///
    /// Borrows in plain mode; decodes and re-reverses (allocating) in
    /// shared mode. Unresolvable ids degrade to the empty string so that
    /// queries over adversarial parsed input stay total.
    pub(crate) fn get(&self, tail_id: u64) -> Cow<'_, [u8]> {
        match self {
            TailStore::Plain(tails) => tails
                .get(tail_id as usize)
                .map_or(Cow::Borrowed(EMPTY), |tail| Cow::Borrowed(tail.as_slice())),
            TailStore::Dict { trie, ids, id_bits } => {
                let offset = (id_bits * tail_id) as usize;
                let Some(id) = ids.get_bits(offset, *id_bits as usize) else {
                    return Cow::Borrowed(EMPTY);
                };
                match trie.decode_key(id) {
                    Some(mut reversed) => {
                        reversed.reverse();
                        Cow::Owned(reversed)
                    }
                    None => Cow::Borrowed(EMPTY),
                }
            }
        }
    }

    /// Approximate heap memory usage in bytes.
    pub(crate) fn heap_bytes(&self) -> usize {
        match self {
            TailStore::Plain(tails) => {
                tails.capacity() * std::mem::size_of::<Vec<u8>>()
                    + tails.iter().map(|t| t.capacity()).sum::<usize>()
            }
            TailStore::Dict { trie, ids, .. } => trie.heap_bytes() + ids.heap_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitvec::BitVectorBuilder;

    #[test]
    fn test_plain_lookup() {
        let store = TailStore::Plain(vec![b"bc".to_vec(), b"an".to_vec()]);
        assert_eq!(store.get(0).as_ref(), b"bc");
        assert_eq!(store.get(1).as_ref(), b"an");
        assert_eq!(store.get(2).as_ref(), EMPTY);
    }

    #[test]
    fn test_dict_lookup_reverses() {
        // Dictionary of reversed tails {"cb", "na"}; entries map tail 0 -> "bc"
        // and tail 1 -> "an".
        let trie = Trie::from_keys(&[b"cb".as_slice(), b"na".as_slice()], false).unwrap();
        let id0 = trie.exact_match_search(b"cb").unwrap();
        let id1 = trie.exact_match_search(b"na").unwrap();
        let mut ids = BitVectorBuilder::new();
        ids.push_bits(id0, 2);
        ids.push_bits(id1, 2);
        let store = TailStore::Dict {
            trie: Box::new(trie),
            ids: ids.build(false, false),
            id_bits: 2,
        };
        assert_eq!(store.get(0).as_ref(), b"bc");
        assert_eq!(store.get(1).as_ref(), b"an");
        assert_eq!(store.get(9).as_ref(), EMPTY);
    }
}
