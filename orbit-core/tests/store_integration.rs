//! Integration tests for the persisted custom-chain store.
//!
//! These exercise the store against both backends, including the
//! defensive re-validation of persisted data and the documented
//! last-write-wins behavior of full-rewrite persistence.

use orbit_core::chain::{ids, ChainDefinition, ChainId, CustomChainEntry};
use orbit_core::store::{CustomChainStore, FileStore, KeyValueStore, MemoryStore, CUSTOM_CHAINS_KEY};

fn entry(chain_id: ChainId, name: &str) -> CustomChainEntry {
    CustomChainEntry {
        definition: ChainDefinition {
            chain_id,
            parent_chain_id: Some(ids::ARBITRUM_ONE),
            child_chain_ids: vec![],
            block_time_seconds: 0.25,
            confirm_period_blocks: Some(45_818),
            explorer_url: format!("https://explorer.{}.example", name),
            name: name.to_string(),
            is_custom: true,
        },
        rpc_url: format!("https://rpc.{}.example", name),
        slug: Some(name.to_string()),
    }
}

#[test]
fn test_add_list_round_trip() {
    let mut store = CustomChainStore::new(MemoryStore::new());
    store.add(entry(660_279, "xai")).unwrap();
    store.add(entry(4078, "muster")).unwrap();

    let listed = store.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].definition.name, "xai");
    assert_eq!(listed[0].rpc_url, "https://rpc.xai.example");
    assert_eq!(listed[1].chain_id(), 4078);
}

#[test]
fn test_repeated_add_is_idempotent() {
    let mut store = CustomChainStore::new(MemoryStore::new());
    for _ in 0..3 {
        store.add(entry(660_279, "xai")).unwrap();
    }
    let occurrences = store
        .list()
        .iter()
        .filter(|e| e.chain_id() == 660_279)
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn test_add_remove_list() {
    let mut store = CustomChainStore::new(MemoryStore::new());
    store.add(entry(660_279, "xai")).unwrap();
    store.remove(660_279).unwrap();
    assert!(store.list().is_empty());
}

/// A record claiming a reserved parent-chain ID never surfaces from
/// `list()`, even when injected straight into the persisted payload.
#[test]
fn test_injected_reserved_id_is_filtered() {
    let mut kv = MemoryStore::new();
    let payload = format!(
        r#"[{{"chain_id": {}, "name": "fake sepolia", "rpc_url": "https://evil.example"}},
            {{"chain_id": 660279, "name": "xai"}}]"#,
        ids::SEPOLIA
    );
    kv.set(CUSTOM_CHAINS_KEY, &payload).unwrap();

    let store = CustomChainStore::new(kv);
    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].chain_id(), 660_279);
    assert_eq!(store.find_by_id(ids::SEPOLIA), None);
}

/// Chain IDs that round-tripped through a text format come back as
/// canonical numbers.
#[test]
fn test_stringly_chain_ids_are_coerced() {
    let mut kv = MemoryStore::new();
    kv.set(
        CUSTOM_CHAINS_KEY,
        r#"[{"chain_id": "660279", "name": "xai", "parent_chain_id": 42161}]"#,
    )
    .unwrap();

    let store = CustomChainStore::new(kv);
    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].chain_id(), 660_279);
    assert!(listed[0].definition.is_rollup());
}

/// Reads re-derive from the persisted store, so external mutation is
/// observed on the next call.
#[test]
fn test_external_mutation_observed_on_next_read() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CustomChainStore::new(FileStore::new(dir.path()));
    store.add(entry(660_279, "xai")).unwrap();

    // Another process rewrites the same backing file.
    let mut other = CustomChainStore::new(FileStore::new(dir.path()));
    other.add(entry(4078, "muster")).unwrap();

    let listed = store.list();
    assert_eq!(listed.len(), 2);
}

/// Interleaved writers clobber each other: each `add` rewrites the
/// full array from the view it last read. Last write wins, by design.
#[test]
fn test_interleaved_writers_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer_a = CustomChainStore::new(FileStore::new(dir.path()));
    let mut writer_b = CustomChainStore::new(FileStore::new(dir.path()));

    // Writer A persists, then a stale writer replays the empty view it
    // read earlier, wiping A's update before B writes.
    writer_a.add(entry(660_279, "xai")).unwrap();
    let mut stale_writer = FileStore::new(dir.path());
    stale_writer.set(CUSTOM_CHAINS_KEY, "[]").unwrap();
    writer_b.add(entry(4078, "muster")).unwrap();

    let listed = writer_a.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].chain_id(), 4078);
}

#[test]
fn test_missing_file_is_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = CustomChainStore::new(FileStore::new(dir.path().join("never-written")));
    assert!(store.list().is_empty());
}

#[test]
fn test_corrupted_payload_degrades_to_empty() {
    let mut kv = MemoryStore::new();
    kv.set(CUSTOM_CHAINS_KEY, "{not valid json").unwrap();
    let store = CustomChainStore::new(kv);
    assert!(store.list().is_empty());
}
