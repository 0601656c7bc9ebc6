use super::*;

fn id(i: usize) -> TimelineId {
    TimelineId::from_index(i)
}

fn replacing_chain(n: usize, looped: bool) -> BeginGraph {
    let mut g = BeginGraph::new(n);
    g.start_at_load(id(0)).unwrap();
    if looped {
        g.start_after(id(0), id(n - 1), 0.0).unwrap();
    }
    for i in 1..n {
        g.start_after(id(i), id(i - 1), 0.0).unwrap();
    }
    g
}

#[test]
fn expressions_serialize_to_runtime_syntax() {
    let g = replacing_chain(3, true);
    assert_eq!(g.expression(id(0)).unwrap().to_string(), "0s;d2.end");
    assert_eq!(g.expression(id(1)).unwrap().to_string(), "d0.end");
    assert_eq!(g.expression(id(2)).unwrap().to_string(), "d1.end");
}

#[test]
fn delay_suffix_only_when_positive() {
    let expr = BeginExpr::after_end(id(4), 250.0);
    assert_eq!(expr.to_string(), "d4.end+250ms");
    assert_eq!(BeginExpr::after_end(id(4), 0.0).to_string(), "d4.end");
    assert_eq!(BeginExpr::at_load().to_string(), "0s");
}

#[test]
fn serializes_as_string() {
    let g = replacing_chain(2, true);
    let json = serde_json::to_string(&g.expression(id(0)).unwrap()).unwrap();
    assert_eq!(json, "\"0s;d1.end\"");
}

#[test]
fn unknown_ids_are_rejected() {
    let mut g = BeginGraph::new(2);
    assert!(g.start_at_load(id(2)).is_err());
    assert!(g.start_after(id(0), id(5), 0.0).is_err());
    assert!(g.expression(id(9)).is_err());
}

#[test]
fn unreachable_timeline_fails_validation() {
    let mut g = BeginGraph::new(2);
    g.start_after(id(0), id(1), 0.0).unwrap();
    g.start_after(id(1), id(0), 0.0).unwrap();
    let err = g.validate().unwrap_err();
    assert!(err.to_string().contains("never starts"));
}

#[test]
fn first_cycle_starts_follow_the_chain() {
    let g = replacing_chain(3, true);
    let starts = g.first_cycle_start_ms(&[100.0, 200.0, 300.0]).unwrap();
    assert_eq!(starts, vec![0.0, 100.0, 300.0]);
}

#[test]
fn first_cycle_starts_include_delays() {
    let mut g = BeginGraph::new(2);
    g.start_at_load(id(0)).unwrap();
    g.start_after(id(1), id(0), 50.0).unwrap();
    let starts = g.first_cycle_start_ms(&[100.0, 10.0]).unwrap();
    assert_eq!(starts, vec![0.0, 150.0]);
    assert!(g.first_cycle_start_ms(&[1.0]).is_err());
}
