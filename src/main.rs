use anyhow::{Context, Result};
use attrgraph::graph::{attributes, AttrValue, DisplayMap, GraphStore};
use attrgraph::{persistence, Config};

fn main() -> Result<()> {
    let config = match std::env::var_os("ATTRGRAPH_CONFIG") {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::default(),
    };

    // Initialize tracing
    let level = config.logging.level().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    println!("Attribute Graph v{}", attrgraph::version());
    println!("==========================================");
    println!();

    let graph = build_demo_graph()?;

    let path = &config.storage.path;
    persistence::save_as(
        &graph,
        path,
        config.storage.format,
        config.storage.compression(),
    )
    .with_context(|| format!("saving graph to {}", path.display()))?;
    println!("\n✓ Saved graph to {}", path.display());

    let reloaded = persistence::load_as(path, config.storage.format, config.storage.compression())
        .with_context(|| format!("reloading graph from {}", path.display()))?;
    println!(
        "✓ Reloaded {} nodes and {} edges (identical: {})",
        reloaded.node_count(),
        reloaded.edge_count(),
        reloaded == graph
    );
    println!(
        "  Render request: layout={}, with_labels={}, font_weight={:?}",
        config.render.layout,
        config.render.options.with_labels,
        config.render.font_weight()
    );

    Ok(())
}

fn build_demo_graph() -> Result<GraphStore> {
    let mut graph = GraphStore::new();

    graph.add_node_with_attributes(
        "node1",
        attributes([
            ("nom", AttrValue::from("Mourad")),
            ("age", AttrValue::from(200)),
            ("sexe", AttrValue::from("Apache d'helicoptere")),
            ("annee", AttrValue::from("MA2")),
        ]),
    );
    graph.add_node_with_attributes(
        "node2",
        attributes([
            ("nom", AttrValue::from("Mounir")),
            ("age", AttrValue::from(459)),
            ("sexe", AttrValue::from("femelle")),
            ("annee", AttrValue::from("BA4")),
            ("est_homosexuel", AttrValue::from(true)),
        ]),
    );
    graph.add_node_with_attributes(
        "node3",
        attributes([
            ("nom", AttrValue::from("Trumps")),
            ("age", AttrValue::from(1e300)),
            ("sexe", AttrValue::from("femelle")),
            ("annee", AttrValue::from("PhD")),
            ("est_homosexuel", AttrValue::from(false)),
        ]),
    );

    graph.add_edge("node1", "node2");
    let pair = ("node1", "node3");
    graph.add_edge(pair.0, pair.1);

    graph.add_nodes_from(["node4", "node5", "node6"]);
    graph.add_edges_from([
        ("node4", "node5", attributes([("attribut1", "jaune")])),
        ("node3", "node6", attributes([("attribut1", "gold")])),
    ]);

    // One node per character
    graph.add_nodes_from("spam".chars());

    println!("degree(node1) = {}", graph.degree("node1")?);
    let batch = graph.degree_batch(["node1", "node2"])?;
    let batch: Vec<String> = batch.iter().map(|(k, d)| format!("({}, {})", k, d)).collect();
    println!("degree([node1, node2]) = [{}]", batch.join(", "));

    let adjacent = graph.adjacent("node1")?;
    let adjacent: Vec<String> = adjacent
        .iter()
        .map(|(k, attrs)| format!("'{}': {}", k, DisplayMap(*attrs)))
        .collect();
    println!("adj(node1) = {{{}}}", adjacent.join(", "));

    graph.remove_node("node5")?;
    graph.remove_edge("node3", "node6")?;

    graph.set_edge_attribute("node1", "node2", "propiete_du_edge", 42)?;
    if let Some(value) = graph.edge_attribute("node1", "node2", "propiete_du_edge")? {
        println!("propiete_du_edge = {}", value);
    }

    graph.add_weighted_edges_from([("node1", "node3", 666), ("node3", "s", 9999)])?;
    println!("\nEdges carrying a weight:");
    for (u, v, weight) in graph.edges_with_attribute("weight") {
        if let Some(w) = weight.as_number() {
            println!("    ({}, {}, {:.3})", u, v, w);
        }
    }

    let edges: Vec<String> = graph
        .all_edges()
        .iter()
        .map(|(u, v)| format!("({}, {})", u, v))
        .collect();
    println!("edges = [{}]", edges.join(", "));
    let nodes: Vec<String> = graph.all_nodes().iter().map(|k| k.to_string()).collect();
    println!("nodes = [{}]", nodes.join(", "));

    graph.set_graph_attribute("name", "Carte du bourg-palette - Pokémon Rubis");
    println!("graph = {}", DisplayMap(graph.graph_attributes()));

    Ok(graph)
}
