//! Two ways to build the same graph: declaratively from parts, and
//! imperatively one insertion at a time.

use valgraph::{Region, ValueGraph};

fn regions() -> Vec<(String, Region)> {
    vec![
        ("ACT".into(), Region::new("Australian Capital Territory", "Canberra", 2_280)),
        ("NSW".into(), Region::new("New South Wales", "Sydney", 800_628)),
        ("NT".into(), Region::new("Northern Territory", "Darwin", 1_335_742)),
        ("QLD".into(), Region::new("Queensland", "Brisbane", 1_723_936)),
        ("SA".into(), Region::new("South Australia", "Adelaide", 978_810)),
        ("TAS".into(), Region::new("Tasmania", "Hobart", 64_519)),
        ("VIC".into(), Region::new("Victoria", "Melbourne", 227_010)),
        ("WA".into(), Region::new("Western Australia", "Perth", 2_526_786)),
    ]
}

fn main() {
    // Declarative: supply both maps as-is (caller keeps them consistent)
    let adjacency: Vec<(String, Vec<String>)> = vec![
        ("ACT".into(), vec!["NSW".into()]),
        ("NSW".into(), vec!["ACT".into(), "VIC".into(), "SA".into(), "QLD".into()]),
        ("NT".into(), vec!["QLD".into(), "SA".into(), "WA".into()]),
        ("QLD".into(), vec!["NSW".into(), "SA".into(), "NT".into()]),
        ("SA".into(), vec!["VIC".into(), "NSW".into(), "QLD".into(), "NT".into(), "WA".into()]),
        ("TAS".into(), vec![]),
        ("VIC".into(), vec!["NSW".into(), "SA".into()]),
        ("WA".into(), vec!["SA".into(), "NT".into()]),
    ];
    let graph = ValueGraph::from_parts(adjacency, regions());
    println!(
        "declarative graph: {} vertices, {} adjacency entries",
        graph.vertex_count(),
        graph.edge_count()
    );

    // Imperative: every insertion returns a fresh graph value
    let mut imperative = ValueGraph::new();
    for (id, region) in regions() {
        imperative = imperative.add_vertex(id, region);
    }
    for (a, b) in [
        ("ACT", "NSW"),
        ("VIC", "NSW"),
        ("VIC", "SA"),
        ("NSW", "SA"),
        ("QLD", "NSW"),
        ("QLD", "SA"),
        ("QLD", "NT"),
        ("SA", "NT"),
        ("SA", "WA"),
        ("NT", "WA"),
    ] {
        imperative = imperative.add_edge(a, b);
    }

    println!("imperative graph:");
    println!("\tIDs: {:?}", imperative.ids());
    for id in imperative.ids() {
        if let Some(region) = imperative.data(&id) {
            println!("\t{}: {}", id, region);
        }
        if let Some(neighbors) = imperative.neighbors(&id) {
            println!("\t  -> {:?}", neighbors);
        }
    }
}
