#![no_main]
use libfuzzer_sys::fuzz_target;
use sdict::Trie;

fuzz_target!(|keys: Vec<Vec<u8>>| {
    let plain = Trie::from_keys(&keys, false).unwrap();
    let shared = Trie::from_keys(&keys, true).unwrap();
    assert_eq!(plain.num_keys(), shared.num_keys());

    for key in &keys {
        let id = plain
            .exact_match_search(key)
            .expect("built key must resolve");
        assert_eq!(plain.decode_key(id).as_deref(), Some(key.as_slice()));
        assert_eq!(shared.exact_match_search(key), Some(id));
        assert_eq!(shared.decode_key(id).as_deref(), Some(key.as_slice()));
    }

    let bytes = shared.to_bytes();
    let reparsed = Trie::from_bytes(&bytes).unwrap();
    assert_eq!(reparsed.num_keys(), shared.num_keys());
    assert_eq!(reparsed.to_bytes(), bytes);
});
