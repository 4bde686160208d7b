//! Tests for the walkers and the event-driven search.

use super::*;
use crate::direction::Undirected;
use crate::graph::CsrGraph;
use crate::visit::Walker;

/// A -> B, A -> C, B -> D, C -> D
fn diamond() -> CsrGraph {
    CsrGraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]])
}

fn position(order: &[usize], n: usize) -> usize {
    order.iter().position(|&x| x == n).unwrap()
}

// ---------------------------------------------------------------------------
// Bfs
// ---------------------------------------------------------------------------

#[test]
fn test_bfs_diamond_emits_each_node_once() {
    let g = diamond();
    let order: Vec<_> = Bfs::new(&g, 0).iter(&g).collect();
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_bfs_absent_start_is_empty() {
    let g = diamond();
    let mut bfs = Bfs::new(&g, 42);
    assert_eq!(bfs.next(&g), None);
    assert!(bfs.stack.is_empty());
}

#[test]
fn test_bfs_multiple_starts_share_layer_zero() {
    // 0 -> 2, 1 -> 3, 2 -> 4
    let g = CsrGraph::from_adjacency(&[vec![2], vec![3], vec![4], vec![], vec![]]);
    let order: Vec<_> = Bfs::with_starts(&g, [0, 1, 0]).iter(&g).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_bfs_undirected_walks_both_ways() {
    let g: CsrGraph<(), (), Undirected> =
        CsrGraph::from_edges(vec![(); 4], vec![(1, 0, ()), (2, 1, ()), (3, 3, ())]);
    let order: Vec<_> = Bfs::new(&g, 2).iter(&g).collect();
    assert_eq!(order, vec![2, 1, 0]);
}

#[test]
fn test_walker_through_mut_ref_is_resumable() {
    let g = diamond();
    let mut bfs = Bfs::new(&g, 0);
    let head: Vec<_> = (&mut bfs).iter(&g).take(2).collect();
    assert_eq!(head, vec![0, 1]);
    assert_eq!(bfs.next(&g), Some(2));
    assert_eq!(bfs.next(&g), Some(3));
    assert_eq!(bfs.next(&g), None);
}

// ---------------------------------------------------------------------------
// Dfs
// ---------------------------------------------------------------------------

#[test]
fn test_dfs_explores_last_pushed_neighbor_first() {
    let g = diamond();
    let order: Vec<_> = Dfs::new(&g, 0).iter(&g).collect();
    assert_eq!(order, vec![0, 2, 3, 1]);
}

#[test]
fn test_dfs_absent_start_is_empty() {
    let g = diamond();
    assert_eq!(Dfs::new(&g, 9).iter(&g).count(), 0);
}

#[test]
fn test_dfs_move_to_keeps_visited() {
    // 0 -> 1, 2 -> 1, 2 -> 3
    let g = CsrGraph::from_adjacency(&[vec![1], vec![], vec![1, 3], vec![]]);
    let mut dfs = Dfs::new(&g, 0);
    let first: Vec<_> = (&mut dfs).iter(&g).collect();
    assert_eq!(first, vec![0, 1]);

    dfs.move_to(2);
    let second: Vec<_> = (&mut dfs).iter(&g).collect();
    assert_eq!(second, vec![2, 3]);

    dfs.reset(&g);
    dfs.move_to(2);
    let again: Vec<_> = dfs.iter(&g).collect();
    assert_eq!(again, vec![2, 3, 1]);
}

#[test]
fn test_dfs_empty_walks_nothing_until_seeded() {
    let g = diamond();
    let mut dfs = Dfs::empty(&g);
    assert_eq!(dfs.next(&g), None);
    dfs.move_to(3);
    assert_eq!(dfs.next(&g), Some(3));
    assert_eq!(dfs.next(&g), None);
}

#[test]
fn test_dfs_from_parts() {
    let g = diamond();
    let mut seen = crate::visit::VisitedBits::new(4);
    seen.set(2);
    let order: Vec<_> = Dfs::from_parts(vec![0], seen).iter(&g).collect();
    assert_eq!(order, vec![0, 1, 3]);
}

// ---------------------------------------------------------------------------
// DfsPostOrder
// ---------------------------------------------------------------------------

#[test]
fn test_postorder_diamond() {
    let g = diamond();
    let order: Vec<_> = DfsPostOrder::new(&g, 0).iter(&g).collect();
    assert_eq!(order, vec![3, 2, 1, 0]);
}

#[test]
fn test_postorder_cycle_terminates() {
    // 0 -> 1 -> 2 -> 0
    let g = CsrGraph::from_adjacency(&[vec![1], vec![2], vec![0]]);
    let order: Vec<_> = DfsPostOrder::new(&g, 0).iter(&g).collect();
    assert_eq!(order, vec![2, 1, 0]);
}

#[test]
fn test_postorder_descendants_come_first() {
    // 0 -> 1, 0 -> 2, 1 -> 3, 3 -> 4, 2 -> 4
    let g = CsrGraph::from_adjacency(&[vec![1, 2], vec![3], vec![4], vec![4], vec![]]);
    let order: Vec<_> = DfsPostOrder::new(&g, 0).iter(&g).collect();
    assert_eq!(order.len(), 5);
    for (u, v) in [(0, 1), (0, 2), (1, 3), (3, 4), (2, 4)] {
        assert!(position(&order, v) < position(&order, u), "{v} should precede {u}");
    }
}

#[test]
fn test_postorder_move_to_continues_forest() {
    // 0 -> 1, 2 -> 1
    let g = CsrGraph::from_adjacency(&[vec![1], vec![], vec![1]]);
    let mut post = DfsPostOrder::new(&g, 0);
    let mut order: Vec<_> = (&mut post).iter(&g).collect();
    post.move_to(2);
    order.extend((&mut post).iter(&g));
    assert_eq!(order, vec![1, 0, 2]);

    post.reset(&g);
    post.move_to(2);
    assert_eq!(post.iter(&g).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_postorder_absent_start_is_empty() {
    let g = diamond();
    assert_eq!(DfsPostOrder::new(&g, 4).iter(&g).count(), 0);
}

// ---------------------------------------------------------------------------
// Topo
// ---------------------------------------------------------------------------

#[test]
fn test_topo_diamond() {
    let g = diamond();
    let order: Vec<_> = Topo::new(&g).iter(&g).collect();
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_topo_skips_cycles_and_their_descendants() {
    // 0 -> 1, 1 -> 2, 2 -> 1, 2 -> 5, 0 -> 4, 3 isolated
    let g = CsrGraph::from_adjacency(&[vec![1, 4], vec![2], vec![1, 5], vec![], vec![], vec![]]);
    let order: Vec<_> = Topo::new(&g).iter(&g).collect();
    assert_eq!(order, vec![0, 3, 4]);
}

#[test]
fn test_topo_self_loop_never_ready() {
    let g = CsrGraph::from_adjacency(&[vec![0, 1], vec![]]);
    let order: Vec<_> = Topo::new(&g).iter(&g).collect();
    assert_eq!(order, Vec::<usize>::new());

    let g = CsrGraph::from_adjacency(&[vec![0], vec![]]);
    let order: Vec<_> = Topo::new(&g).iter(&g).collect();
    assert_eq!(order, vec![1]);
}

#[test]
fn test_topo_parallel_edges_emit_once() {
    let g = CsrGraph::from_adjacency(&[vec![1, 1], vec![2], vec![]]);
    let order: Vec<_> = Topo::new(&g).iter(&g).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_topo_reset_replays() {
    let g = diamond();
    let mut topo = Topo::new(&g);
    let first: Vec<_> = (&mut topo).iter(&g).collect();
    assert_eq!(topo.next(&g), None);
    topo.reset(&g);
    let second: Vec<_> = topo.iter(&g).collect();
    assert_eq!(first, second);
}

#[test]
fn test_topo_undirected_emits_isolated_only() {
    let g: CsrGraph<(), (), Undirected> =
        CsrGraph::from_edges(vec![(); 3], vec![(0, 1, ())]);
    let order: Vec<_> = Topo::new(&g).iter(&g).collect();
    assert_eq!(order, vec![2]);
}

// ---------------------------------------------------------------------------
// depth_first_search
// ---------------------------------------------------------------------------

fn record<G>(graph: G, starts: &[usize]) -> Vec<DfsEvent<usize>>
where
    G: crate::visit::IntoNeighbors<NodeId = usize> + crate::visit::Visitable,
{
    let mut events = Vec::new();
    depth_first_search(graph, starts.iter().copied(), |e| events.push(e));
    events
}

#[test]
fn test_search_diamond_events() {
    use DfsEvent::*;
    let g = diamond();
    let events = record(&g, &[0]);
    assert_eq!(
        events,
        vec![
            Discover(0, Time(0)),
            TreeEdge(0, 1),
            Discover(1, Time(1)),
            TreeEdge(1, 3),
            Discover(3, Time(2)),
            Finish(3, Time(3)),
            Finish(1, Time(4)),
            TreeEdge(0, 2),
            Discover(2, Time(5)),
            CrossForwardEdge(2, 3),
            Finish(2, Time(6)),
            Finish(0, Time(7)),
        ]
    );
}

#[test]
fn test_search_back_edge_on_cycle() {
    use DfsEvent::*;
    let g = CsrGraph::from_adjacency(&[vec![1], vec![0]]);
    let events = record(&g, &[0]);
    assert_eq!(
        events,
        vec![
            Discover(0, Time(0)),
            TreeEdge(0, 1),
            Discover(1, Time(1)),
            BackEdge(1, 0),
            Finish(1, Time(2)),
            Finish(0, Time(3)),
        ]
    );
}

#[test]
fn test_search_self_loop_is_back_edge() {
    let g = CsrGraph::from_adjacency(&[vec![0]]);
    let events = record(&g, &[0]);
    assert!(events.contains(&DfsEvent::BackEdge(0, 0)));
}

#[test]
fn test_search_later_starts_skip_discovered() {
    use DfsEvent::*;
    let g = diamond();
    let events = record(&g, &[3, 0, 3]);
    assert_eq!(events[..2], [Discover(3, Time(0)), Finish(3, Time(1))]);
    assert!(events.contains(&CrossForwardEdge(1, 3)));
    let discovers = events.iter().filter(|e| matches!(e, Discover(..))).count();
    assert_eq!(discovers, 4);
    assert_eq!(events.last(), Some(&Finish(0, Time(7))));
}

#[test]
fn test_search_absent_start_reports_nothing() {
    let g = diamond();
    assert!(record(&g, &[17]).is_empty());
}

#[test]
fn test_search_times_are_strictly_increasing() {
    let g = CsrGraph::from_adjacency(&[vec![1, 2], vec![2, 3], vec![3], vec![0], vec![]]);
    let times: Vec<usize> = record(&g, &[0, 4])
        .into_iter()
        .filter_map(|e| match e {
            DfsEvent::Discover(_, t) | DfsEvent::Finish(_, t) => Some(t.0),
            _ => None,
        })
        .collect();
    assert_eq!(times, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_search_break_stops_immediately() {
    let g = diamond();
    let mut events = Vec::new();
    let ret = depth_first_search(&g, Some(0), |e| {
        events.push(e);
        if let DfsEvent::Discover(3, t) = e {
            return Control::Break(t);
        }
        Control::Continue
    });
    assert_eq!(ret, Control::Break(Time(2)));
    assert_eq!(events.last(), Some(&DfsEvent::Discover(3, Time(2))));
    assert_eq!(events.len(), 5);
}

#[test]
fn test_search_break_on_edge_event() {
    let g = CsrGraph::from_adjacency(&[vec![1], vec![0]]);
    let ret = depth_first_search(&g, Some(0), |e| match e {
        DfsEvent::BackEdge(u, v) => Control::Break((u, v)),
        _ => Control::Continue,
    });
    assert_eq!(ret.break_value(), Some((1, 0)));
}

#[test]
fn test_search_break_on_finish_skips_later_starts() {
    let g = CsrGraph::from_adjacency(&[vec![], vec![]]);
    let mut events = Vec::new();
    let ret = depth_first_search(&g, [0, 1], |e| {
        events.push(e);
        match e {
            DfsEvent::Finish(..) => Control::breaking(),
            _ => Control::Continue,
        }
    });
    assert_eq!(ret, Control::Break(()));
    assert_eq!(events.len(), 2);
}

#[test]
fn test_search_prune_on_discover_still_finishes() {
    use DfsEvent::*;
    let g = diamond();
    let mut events = Vec::new();
    let ret: Control<()> = depth_first_search(&g, Some(0), |e| {
        events.push(e);
        match e {
            Discover(1, _) => Control::Prune,
            _ => Control::Continue,
        }
    });
    assert_eq!(ret, Control::Continue);
    assert_eq!(
        events,
        vec![
            Discover(0, Time(0)),
            TreeEdge(0, 1),
            Discover(1, Time(1)),
            Finish(1, Time(2)),
            TreeEdge(0, 2),
            Discover(2, Time(3)),
            TreeEdge(2, 3),
            Discover(3, Time(4)),
            Finish(3, Time(5)),
            Finish(2, Time(6)),
            Finish(0, Time(7)),
        ]
    );
}

#[test]
fn test_search_prune_on_tree_edge_leaves_target_undiscovered() {
    use DfsEvent::*;
    let g = diamond();
    let mut events = Vec::new();
    depth_first_search(&g, Some(0), |e| {
        events.push(e);
        match e {
            TreeEdge(0, 1) => Control::<()>::Prune,
            _ => Control::Continue,
        }
    });
    assert!(!events.iter().any(|e| matches!(e, Discover(1, _) | Finish(1, _))));
    assert_eq!(events.last(), Some(&Finish(0, Time(5))));
}

#[test]
fn test_search_prune_elsewhere_is_continue() {
    let g = diamond();
    let plain = record(&g, &[0]);
    let mut events = Vec::new();
    depth_first_search(&g, Some(0), |e| {
        events.push(e);
        match e {
            DfsEvent::CrossForwardEdge(..) | DfsEvent::Finish(..) => Control::<()>::Prune,
            _ => Control::Continue,
        }
    });
    assert_eq!(events, plain);
}

#[test]
fn test_search_result_control_flow() {
    let acyclic = diamond();
    let cyclic = CsrGraph::from_adjacency(&[vec![1], vec![2], vec![0]]);

    let check = |e: DfsEvent<usize>| match e {
        DfsEvent::BackEdge(u, v) => Err((u, v)),
        _ => Ok(()),
    };
    assert_eq!(depth_first_search(&acyclic, Some(0), check), Ok(()));
    assert_eq!(depth_first_search(&cyclic, Some(0), check), Err((2, 0)));
}

#[test]
fn test_search_deep_chain_does_not_overflow() {
    let n = 200_000;
    let adjacency: Vec<Vec<usize>> = (0..n).map(|i| if i + 1 < n { vec![i + 1] } else { vec![] }).collect();
    let g = CsrGraph::from_adjacency(&adjacency);
    let mut finished = 0;
    depth_first_search(&g, Some(0), |e| {
        if let DfsEvent::Finish(..) = e {
            finished += 1;
        }
    });
    assert_eq!(finished, n);
}

#[test]
fn test_control_helpers() {
    assert_eq!(Control::<u8>::default(), Control::Continue);
    assert_eq!(Control::Break(3).break_value(), Some(3));
    assert_eq!(Control::<u8>::Prune.break_value(), None);
    assert!(Control::breaking().should_break());
    assert!(Control::<()>::Prune.should_prune());
    assert!(!<() as ControlFlow>::continuing().should_break());
}

#[test]
fn test_events_serialize() {
    let event = DfsEvent::Discover(1usize, Time(4));
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"Discover":[1,4]}"#);
    let back: DfsEvent<usize> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);

    assert_eq!(serde_json::to_string(&Control::<u32>::Break(5)).unwrap(), r#"{"Break":5}"#);
    assert_eq!(serde_json::to_string(&Control::<u32>::Prune).unwrap(), r#""Prune""#);
}
