#![no_main]
use libfuzzer_sys::fuzz_target;
use sdict::Trie;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either fail to parse or produce a trie whose
    // queries stay total.
    if let Ok(trie) = Trie::from_bytes(data) {
        let probe = &data[..data.len().min(8)];
        let _ = trie.num_keys();
        let _ = trie.exact_match_search(probe);
        let _ = trie.common_prefix_search(probe, 4);
        let _ = trie.predictive_search(probe, 4);
        let _ = trie.decode_key(0);
    }
});
