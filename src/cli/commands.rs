//! CLI command implementations.

use crate::graph::{GraphBuilder, ValueGraph};
use crate::ident::generate_id;
use crate::types::Region;

/// Build the sample graph: Australian regions and their land borders.
fn regions_graph() -> ValueGraph<Region> {
    GraphBuilder::new()
        .vertex("ACT", Region::new("Australian Capital Territory", "Canberra", 2_280))
        .vertex("NSW", Region::new("New South Wales", "Sydney", 800_628))
        .vertex("NT", Region::new("Northern Territory", "Darwin", 1_335_742))
        .vertex("QLD", Region::new("Queensland", "Brisbane", 1_723_936))
        .vertex("SA", Region::new("South Australia", "Adelaide", 978_810))
        .vertex("TAS", Region::new("Tasmania", "Hobart", 64_519))
        .vertex("VIC", Region::new("Victoria", "Melbourne", 227_010))
        .vertex("WA", Region::new("Western Australia", "Perth", 2_526_786))
        .edge("ACT", "NSW")
        .edge("VIC", "NSW")
        .edge("VIC", "SA")
        .edge("NSW", "SA")
        .edge("QLD", "NSW")
        .edge("QLD", "SA")
        .edge("QLD", "NT")
        .edge("SA", "NT")
        .edge("SA", "WA")
        .edge("NT", "WA")
        .build()
}

/// Build and dump the sample regions graph.
pub fn cmd_demo(json: bool) {
    let graph = regions_graph();

    if json {
        let dump = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "ids": graph.ids(),
            "adjacency": graph.adjacency(),
            "vertex_data": graph.vertex_data(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&dump).unwrap_or_default()
        );
    } else {
        println!(
            "Regions graph: {} vertices, {} adjacency entries",
            graph.vertex_count(),
            graph.edge_count()
        );
        for id in graph.ids() {
            // Both lookups always succeed for ids the graph itself reported
            let region = graph.data(&id).map(|r| r.to_string()).unwrap_or_default();
            let neighbors = graph.neighbors(&id).unwrap_or(&[]);
            println!("  {}: {}", id, region);
            println!("    borders: {}", neighbors.join(", "));
        }
    }
}

/// Mint one or more random vertex identifiers.
pub fn cmd_id(count: usize, json: bool) {
    let ids: Vec<String> = (0..count).map(|_| generate_id()).collect();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "ids": ids }))
                .unwrap_or_default()
        );
    } else {
        for id in ids {
            println!("{}", id);
        }
    }
}
