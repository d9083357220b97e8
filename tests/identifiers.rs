//! Identifier generation tests: RFC 4122 v4 textual layout and practical
//! uniqueness.

use std::collections::HashSet;

use valgraph::generate_id;

#[test]
fn test_id_canonical_layout() {
    let id = generate_id();
    assert_eq!(id.len(), 36);

    let bytes = id.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => assert_eq!(b, b'-', "hyphen expected at {}", i),
            _ => assert!(
                b.is_ascii_hexdigit() && !b.is_ascii_uppercase(),
                "lowercase hex expected at {}, got {:?}",
                i,
                b as char
            ),
        }
    }

    // Fixed version nibble and RFC 4122 variant nibble
    assert_eq!(bytes[14], b'4');
    assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b'));
}

#[test]
fn test_ids_are_practically_unique() {
    let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_id_usable_as_vertex_key() {
    use valgraph::{Region, ValueGraph};

    let a = generate_id();
    let b = generate_id();
    let graph = ValueGraph::new()
        .add_vertex(a.clone(), Region::new("Alpha", "A-town", 10))
        .add_vertex(b.clone(), Region::new("Beta", "B-town", 20))
        .add_edge(&a, &b);

    assert!(graph.vertex_exists(&a));
    assert_eq!(graph.neighbors(&a), Some(&[b.clone()][..]));
}
