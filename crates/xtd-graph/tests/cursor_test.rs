use xtd_graph::{Cursor, DirectedWeightedGraph, Edge};

type Graph = DirectedWeightedGraph<i32, i32>;

fn sample() -> Graph {
    let mut g = Graph::from([1, 2, 3]);
    for (from, to, weight) in [
        (3, 2, 10),
        (3, 2, 4),
        (1, 3, 3),
        (1, 1, 10),
        (3, 3, 4),
        (2, 3, 3),
        (1, 2, 10),
        (1, 3, 10),
    ] {
        assert!(g.insert_edge(&from, &to, weight).unwrap());
    }
    g
}

const SAMPLE_ORDER: [(i32, i32, i32); 8] = [
    (1, 1, 10),
    (1, 2, 10),
    (1, 3, 3),
    (1, 3, 10),
    (2, 3, 3),
    (3, 2, 4),
    (3, 2, 10),
    (3, 3, 4),
];

fn triples(g: &Graph) -> Vec<(i32, i32, i32)> {
    g.iter().map(|e| (*e.from, *e.to, *e.weight)).collect()
}

#[test]
fn begin_equals_end_without_edges() {
    let g = Graph::new();
    assert_eq!(g.begin(), g.end());

    let g = Graph::from([1, 2, 3]);
    assert_eq!(g.begin(), g.end());
    assert_eq!(g.iter().count(), 0);
}

#[test]
fn begin_and_prev_of_end_with_a_single_edge() {
    let mut g = Graph::from([1, 2, 3]);
    g.insert_edge(&1, &2, 1).unwrap();

    let first = g.get(&g.begin()).unwrap();
    assert_eq!((*first.from, *first.to, *first.weight), (1, 2, 1));

    let last = g.prev(&g.end());
    assert_eq!(last, g.begin());
    assert_eq!(last.into_edge(), Some(Edge::new(1, 2, 1)));
}

#[test]
fn find_existing_edges() {
    let mut g = Graph::from([1, 2, 3, 4, 5]);
    g.insert_edge(&1, &5, 1230).unwrap();
    g.insert_edge(&1, &1, -100).unwrap();
    g.insert_edge(&1, &5, 130).unwrap();

    let cursor = g.find(&1, &5, &1230);
    assert_ne!(cursor, g.end());
    assert_eq!(cursor.source(), Some(&1));
    assert_eq!(cursor.target(), Some(&5));
    assert_eq!(cursor.weight(), Some(&1230));

    let edge = g.get(&g.find(&1, &1, &-100)).unwrap();
    assert_eq!(edge, Edge::new(1, 1, -100));
}

#[test]
fn find_missing_edges_yields_end() {
    let mut g = Graph::from([1, 2, 3, 4, 5]);
    g.insert_edge(&1, &5, 1230).unwrap();
    g.insert_edge(&1, &1, -100).unwrap();
    g.insert_edge(&1, &5, 130).unwrap();

    assert_eq!(g.find(&1, &5, &1231), g.end());
    assert_eq!(g.find(&1, &2, &-100), g.end());
    assert_eq!(g.find(&5, &1, &130), g.end());
    assert_eq!(g.find(&9, &1, &130), g.end());
    assert!(g.get(&g.end()).is_none());
}

#[test]
fn iteration_orders_edges_of_one_node() {
    let mut g = Graph::from([1, 2, 3]);
    g.insert_edge(&1, &2, 1).unwrap();
    g.insert_edge(&1, &3, 3).unwrap();
    g.insert_edge(&1, &1, 10).unwrap();

    let edges: Vec<_> = g.iter().map(|e| e.to_owned_edge()).collect();
    assert_eq!(
        edges,
        vec![Edge::new(1, 1, 10), Edge::new(1, 2, 1), Edge::new(1, 3, 3)]
    );
    assert_eq!(edges[0].to_string(), "1: (1, 10)");
}

#[test]
fn iteration_is_lexicographically_ordered() {
    let g = sample();
    assert_eq!(triples(&g), SAMPLE_ORDER);

    let mut cursor = g.begin();
    for (from, to, weight) in SAMPLE_ORDER {
        assert_eq!(cursor, g.find(&from, &to, &weight));
        cursor = g.next(&cursor);
    }
    assert_eq!(cursor, g.end());
    assert_eq!(g.next(&cursor), g.end());
}

#[test]
fn reverse_iteration_mirrors_forward_order() {
    let g = sample();
    let backwards: Vec<_> = g.iter().rev().map(|e| (*e.from, *e.to, *e.weight)).collect();
    let mut expected = SAMPLE_ORDER.to_vec();
    expected.reverse();
    assert_eq!(backwards, expected);

    let mut cursor = g.end();
    for (from, to, weight) in expected {
        cursor = g.prev(&cursor);
        assert_eq!(cursor, g.find(&from, &to, &weight));
    }
    assert_eq!(g.prev(&cursor), g.end());
}

#[test]
fn iteration_skips_nodes_without_edges() {
    let mut g = Graph::from([1, 2, 3, 4, 5]);
    g.insert_edge(&2, &4, 1).unwrap();
    g.insert_edge(&4, &2, 1).unwrap();

    assert_eq!(triples(&g), vec![(2, 4, 1), (4, 2, 1)]);
    assert_eq!(g.next(&g.begin()), g.find(&4, &2, &1));
    assert_eq!(g.prev(&g.find(&4, &2, &1)), g.find(&2, &4, &1));
}

#[test]
fn iterating_from_both_ends_meets_in_the_middle() {
    let g = sample();
    let mut edges = g.iter();
    assert_eq!(edges.len(), 8);

    let front = edges.next().unwrap();
    let back = edges.next_back().unwrap();
    assert_eq!(front, Edge::new(1, 1, 10));
    assert_eq!(back, Edge::new(3, 3, 4));
    assert_eq!(edges.len(), 6);

    let rest: Vec<_> = edges.by_ref().map(|e| e.to_owned_edge()).collect();
    assert_eq!(rest.len(), 6);
    assert_eq!(rest.first(), Some(&Edge::new(1, 2, 10)));
    assert_eq!(rest.last(), Some(&Edge::new(3, 2, 10)));
    assert!(edges.next().is_none());
    assert!(edges.next_back().is_none());
}

#[test]
fn into_iterator_for_reference() {
    let g = sample();
    let mut count = 0;
    for edge in &g {
        assert!(g.is_node(edge.from));
        assert!(g.is_node(edge.to));
        count += 1;
    }
    assert_eq!(count, g.edge_count());
}

#[test]
fn erase_edge_at_returns_the_following_edge() {
    let mut g = Graph::from([1, 2, 3]);
    g.insert_edge(&1, &1, 10).unwrap();
    g.insert_edge(&1, &2, 10).unwrap();
    g.insert_edge(&1, &3, 10).unwrap();

    let c1 = g.find(&1, &1, &10);
    let c2 = g.find(&1, &2, &10);
    let c3 = g.find(&1, &3, &10);

    assert_eq!(g.erase_edge_at(c1), c2);
    assert_eq!(g.find(&1, &1, &10), g.end());
    assert_eq!(g.erase_edge_at(c2), c3);
    assert_eq!(g.find(&1, &2, &10), g.end());
    assert_eq!(g.erase_edge_at(c3), g.end());
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn erase_edge_at_moves_across_nodes() {
    let mut g = sample();
    let next = g.erase_edge_at(g.find(&1, &3, &10));
    assert_eq!(next, g.find(&2, &3, &3));
    assert_eq!(g.edge_count(), 7);
}

#[test]
fn erase_edge_at_end_is_a_no_op() {
    let mut g = Graph::from([1, 2, 3]);
    for (from, to) in [(1, 1), (1, 2), (1, 3)] {
        let cursor = g.find(&from, &to, &10);
        assert_eq!(g.erase_edge_at(cursor), g.end());
    }
    assert_eq!(g.len(), 3);
}

#[test]
fn cursor_survives_removal_of_its_edge() {
    let mut g = sample();
    let cursor = g.find(&2, &3, &3);
    assert!(g.erase_edge(&2, &3, &3).unwrap());

    assert!(g.get(&cursor).is_none());
    assert_eq!(g.next(&cursor), g.find(&3, &2, &4));
    assert_eq!(g.prev(&cursor), g.find(&1, &3, &10));
}

#[test]
fn erase_edge_range_removes_half_open_range() {
    let mut g = sample();
    let first = g.find(&1, &3, &3);
    let last = g.find(&3, &2, &10);

    assert_eq!(g.erase_edge_range(first, last.clone()), last);
    assert_eq!(
        triples(&g),
        vec![(1, 1, 10), (1, 2, 10), (3, 2, 10), (3, 3, 4)]
    );
}

#[test]
fn erase_edge_range_from_end_erases_nothing() {
    let mut g = sample();
    let first = g.find(&1, &3, &0);
    let last = g.find(&3, &3, &4);

    assert_eq!(g.erase_edge_range(first, last), g.end());
    assert_eq!(triples(&g), SAMPLE_ORDER);
}

#[test]
fn erase_edge_range_to_missing_edge_erases_to_the_end() {
    let mut g = sample();
    let first = g.find(&1, &3, &3);
    let last = g.find(&4, &5, &10);

    assert_eq!(g.erase_edge_range(first, last), g.end());
    assert_eq!(triples(&g), vec![(1, 1, 10), (1, 2, 10)]);
}

#[test]
fn erase_whole_range() {
    let mut g = sample();
    let end = g.erase_edge_range(g.begin(), g.end());
    assert_eq!(end, Cursor::end());
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.len(), 3);
}
