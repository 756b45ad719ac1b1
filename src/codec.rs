//! Binary serialization of the trie.
//!
//! The layout is strictly sequential little-endian with no padding: the
//! key count (u64), then u32-length-prefixed blobs for the tree, terminal
//! and tail vectors and the label array, then a u32 marker selecting the
//! tail-table mode. Marker 1 is followed by the recursive secondary-trie
//! blob, the id width (u64) and the packed id-vector blob; marker 0 by a
//! u32 tail count and one u32-length-prefixed string per tail.
//!
//! Parsing never reads past the buffer: every truncation fails with
//! [`Error::InvalidFormat`], declared counts are validated against the
//! remaining input before anything is reserved, and the tail table must
//! agree with the tail vector's population.

use crate::bitvec::BitVector;
use crate::error::{Error, Result};
use crate::tail::TailStore;
use crate::trie::Trie;

impl Trie {
    /// Serialize to a self-describing byte buffer.
    ///
    /// The encoding is deterministic given the trie state; an equal trie
    /// always serializes to equal bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.num_keys.to_le_bytes());
        write_blob(&mut out, &self.louds.to_bytes());
        write_blob(&mut out, &self.terminal.to_bytes());
        write_blob(&mut out, &self.tail.to_bytes());
        write_blob(&mut out, &self.edges);
        match &self.tails {
            TailStore::Dict { trie, ids, id_bits } => {
                out.extend_from_slice(&1u32.to_le_bytes());
                write_blob(&mut out, &trie.to_bytes());
                out.extend_from_slice(&id_bits.to_le_bytes());
                write_blob(&mut out, &ids.to_bytes());
            }
            TailStore::Plain(tails) => {
                out.extend_from_slice(&0u32.to_le_bytes());
                out.extend_from_slice(&(tails.len() as u32).to_le_bytes());
                for tail in tails {
                    write_blob(&mut out, tail);
                }
            }
        }
        out
    }

    /// Parse a buffer produced by [`Trie::to_bytes`].
    ///
    /// A failed parse constructs nothing; the error reports the first
    /// inconsistency found.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = 0usize;
        let trie = parse_trie(bytes, &mut cursor, true)?;
        if cursor != bytes.len() {
            return Err(Error::InvalidFormat(
                "trailing bytes after the trie".to_string(),
            ));
        }
        Ok(trie)
    }
}

fn write_blob(out: &mut Vec<u8>, blob: &[u8]) {
    out.extend_from_slice(&(blob.len() as u32).to_le_bytes());
    out.extend_from_slice(blob);
}

fn eof() -> Error {
    Error::InvalidFormat("unexpected end of input".to_string())
}

fn take<'a>(bytes: &'a [u8], cursor: &mut usize, n: usize) -> Result<&'a [u8]> {
    let end = cursor.checked_add(n).ok_or_else(eof)?;
    if end > bytes.len() {
        return Err(eof());
    }
    let slice = &bytes[*cursor..end];
    *cursor = end;
    Ok(slice)
}

fn take_u32(bytes: &[u8], cursor: &mut usize) -> Result<u32> {
    Ok(u32::from_le_bytes(take(bytes, cursor, 4)?.try_into().unwrap()))
}

fn take_u64(bytes: &[u8], cursor: &mut usize) -> Result<u64> {
    Ok(u64::from_le_bytes(take(bytes, cursor, 8)?.try_into().unwrap()))
}

fn take_blob<'a>(bytes: &'a [u8], cursor: &mut usize) -> Result<&'a [u8]> {
    let len = take_u32(bytes, cursor)? as usize;
    take(bytes, cursor, len)
}

/// `allow_shared` is true only at the outermost level: the embedded
/// secondary trie always stores its tails unshared, which also bounds the
/// recursion.
fn parse_trie(bytes: &[u8], cursor: &mut usize, allow_shared: bool) -> Result<Trie> {
    let num_keys = take_u64(bytes, cursor)?;
    let louds = BitVector::from_bytes(take_blob(bytes, cursor)?)?;
    let terminal = BitVector::from_bytes(take_blob(bytes, cursor)?)?;
    let tail = BitVector::from_bytes(take_blob(bytes, cursor)?)?;
    let edges = take_blob(bytes, cursor)?.to_vec();
    if num_keys != terminal.num_ones() as u64 {
        return Err(Error::InvalidFormat(
            "key count does not match the terminal vector".to_string(),
        ));
    }
    if edges.len() + 1 != louds.rank0(louds.len()) {
        return Err(Error::InvalidFormat(
            "label array does not match the tree vector".to_string(),
        ));
    }
    let num_tails = tail.num_ones() as u64;

    let tails = match take_u32(bytes, cursor)? {
        1 => {
            if !allow_shared {
                return Err(Error::InvalidFormat(
                    "tail trie must store its tails unshared".to_string(),
                ));
            }
            let sub = take_blob(bytes, cursor)?;
            let mut sub_cursor = 0usize;
            let tail_trie = parse_trie(sub, &mut sub_cursor, false)?;
            if sub_cursor != sub.len() {
                return Err(Error::InvalidFormat(
                    "trailing bytes after the tail trie".to_string(),
                ));
            }
            let id_bits = take_u64(bytes, cursor)?;
            if id_bits > 64 {
                return Err(Error::InvalidFormat(
                    "tail id width exceeds 64 bits".to_string(),
                ));
            }
            let ids = BitVector::from_bytes(take_blob(bytes, cursor)?)?;
            if ids.len() as u64 != id_bits * num_tails {
                return Err(Error::InvalidFormat(
                    "tail id vector does not cover every tail".to_string(),
                ));
            }
            TailStore::Dict {
                trie: Box::new(tail_trie),
                ids,
                id_bits,
            }
        }
        0 => {
            let count = take_u32(bytes, cursor)? as usize;
            // Each tail needs at least its length prefix; reject counts the
            // input cannot possibly hold before reserving anything.
            if count.saturating_mul(4) > bytes.len() - *cursor {
                return Err(Error::InvalidFormat(
                    "tail count exceeds remaining input".to_string(),
                ));
            }
            let mut tails = Vec::with_capacity(count);
            for _ in 0..count {
                tails.push(take_blob(bytes, cursor)?.to_vec());
            }
            if tails.len() as u64 != num_tails {
                return Err(Error::InvalidFormat(
                    "tail table does not cover every tail".to_string(),
                ));
            }
            TailStore::Plain(tails)
        }
        _ => {
            return Err(Error::InvalidFormat(
                "tail table marker must be 0 or 1".to_string(),
            ))
        }
    };

    Ok(Trie {
        louds,
        terminal,
        tail,
        edges,
        tails,
        num_keys,
    })
}
