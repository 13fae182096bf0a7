use graph_pathfinding::prelude::*;
use graph_pathfinding::{Cost, Edge};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// g - h - i
//         |
// d - e - f
// |       |
// a - b - c
fn fixture() -> GraphSpec {
    GraphSpec::new()
        .vertex("a", (0, 2), [("b", 1)])
        .vertex("b", (1, 2), [("e", 2)])
        .vertex("c", (2, 2), [("f", 1)])
        .vertex("d", (0, 1), [("b", 1), ("f", 15), ("g", 2)])
        .vertex("e", (1, 1), [("d", 1)])
        .vertex("f", (2, 1), [("e", 1), ("c", 3)])
        .vertex("g", (0, 0), [("h", 1)])
        .vertex("h", (1, 0), [("i", 1)])
        .vertex("i", (2, 0), [("f", 1), ("c", 2), ("e", 7)])
}

fn ids(graph: &Graph, start: &str, goal: &str) -> (NodeID, NodeID) {
    (graph.node_id(start).unwrap(), graph.node_id(goal).unwrap())
}

fn step(graph: &Graph, from: NodeID, to: NodeID) -> Edge {
    *graph
        .segments(from)
        .iter()
        .find(|e| e.end() == to)
        .expect("consecutive Nodes of a Path are connected")
}

fn walk_cost(graph: &Graph, path: &[NodeID]) -> Cost {
    path.windows(2).map(|w| step(graph, w[0], w[1]).cost()).sum()
}

#[test]
fn breadth_first() {
    init();
    let graph = fixture().build().unwrap();
    let (b, f) = ids(&graph, "b", "f");

    let path = breadth_first_search(&graph, b, f).unwrap();
    assert_eq!(graph.names(&path), vec!["b", "e", "d", "f"]);
}

#[test]
fn uniform_cost() {
    init();
    let graph = fixture().build().unwrap();
    let (b, f) = ids(&graph, "b", "f");

    let path = uniform_cost_search(&graph, b, f).unwrap();
    #[rustfmt::skip]
    assert_eq!(
        graph.names(&path),
        vec!["b", "e", "d", "g", "h", "i", "f"],
    );
    assert_eq!(path.cost(), 8);
    assert_eq!(walk_cost(&graph, &path), 8);
}

#[test]
fn a_star() {
    init();
    let graph = fixture().build().unwrap();
    let (b, f) = ids(&graph, "b", "f");

    let path = a_star_search(&graph, b, f).unwrap();
    #[rustfmt::skip]
    assert_eq!(
        graph.names(&path),
        vec!["b", "e", "d", "g", "h", "i", "f"],
    );
    assert_eq!(path.cost(), 8);
}

#[test]
fn unreachable_goal() {
    init();
    let graph = fixture().build().unwrap();
    // nothing leads into `a`
    let (b, a) = ids(&graph, "b", "a");

    assert_eq!(breadth_first_search(&graph, b, a), None);
    assert_eq!(uniform_cost_search(&graph, b, a), None);
    assert_eq!(a_star_search(&graph, b, a), None);
}

#[test]
fn start_without_outgoing_edges() {
    init();
    let mut spec = fixture();
    for vertex in spec.vertices.iter_mut().filter(|v| v.name == "b") {
        vertex.neighbors.clear();
    }
    let graph = spec.build().unwrap();
    let (b, f) = ids(&graph, "b", "f");

    assert_eq!(breadth_first_search(&graph, b, f), None);
    assert_eq!(uniform_cost_search(&graph, b, f), None);
    assert_eq!(a_star_search(&graph, b, f), None);
}

#[test]
fn start_is_goal() {
    let graph = fixture().build().unwrap();
    let d = graph.node_id("d").unwrap();

    assert_eq!(breadth_first_search(&graph, d, d), Some(vec![d]));
    assert_eq!(uniform_cost_search(&graph, d, d), Some(Path::new(vec![d], 0)));
    assert_eq!(a_star_search(&graph, d, d), Some(Path::new(vec![d], 0)));
}

#[test]
fn repeated_searches_agree() {
    let graph = fixture().build().unwrap();
    let (b, f) = ids(&graph, "b", "f");

    assert_eq!(
        breadth_first_search(&graph, b, f),
        breadth_first_search(&graph, b, f)
    );
    assert_eq!(
        uniform_cost_search(&graph, b, f),
        uniform_cost_search(&graph, b, f)
    );
    assert_eq!(a_star_search(&graph, b, f), a_star_search(&graph, b, f));
}

#[test]
fn every_pair() {
    init();
    let graph = fixture().build().unwrap();

    for (start, _) in graph.nodes() {
        for (goal, _) in graph.nodes() {
            let hops = breadth_first_search(&graph, start, goal);
            let cheapest = uniform_cost_search(&graph, start, goal);
            let guided = a_star_search(&graph, start, goal);

            assert_eq!(hops.is_some(), cheapest.is_some());
            assert_eq!(hops.is_some(), guided.is_some());

            if let (Some(hops), Some(cheapest), Some(guided)) = (hops, cheapest, guided) {
                for path in [&hops[..], &cheapest[..], &guided[..]] {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&goal));
                }
                assert!(hops.len() <= cheapest.len());
                assert_eq!(walk_cost(&graph, &cheapest), cheapest.cost());
                assert_eq!(walk_cost(&graph, &guided), guided.cost());
                // d->b is cheaper than the distance between them, so A* may lose here
                assert!(guided.cost() >= cheapest.cost());
            }
        }
    }
}

#[test]
fn searches_share_one_graph_across_threads() {
    let graph = fixture().build().unwrap();
    let (b, f) = ids(&graph, "b", "f");
    let expected = uniform_cost_search(&graph, b, f);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| uniform_cost_search(&graph, b, f)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn lookups() {
    let graph = fixture().build().unwrap();

    assert_eq!(graph.node("i").unwrap().pos(), (2, 0));
    assert_eq!(graph.edge("i", "e").unwrap().cost(), 7);
    assert!(graph.edge("e", "i").is_err());
    assert!(graph.node("z").is_err());
    assert_eq!(graph.edges().count(), 14);
}

#[test]
fn display() {
    let graph = fixture().build().unwrap();

    assert_eq!(
        graph.to_string(),
        "Graph:\n\
         > Nodes :[a, b, c, d, e, f, g, h, i]\n\
         > Edges :[a->b(1), b->e(2), c->f(1), d->b(1), d->f(15), d->g(2), e->d(1), \
         f->e(1), f->c(3), g->h(1), h->i(1), i->f(1), i->c(2), i->e(7)]"
    );
}
