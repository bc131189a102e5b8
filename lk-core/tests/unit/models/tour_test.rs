use super::*;
use crate::helpers::models::{create_square_problem, create_tour};

#[test]
fn can_query_neighbors() {
    let tour = create_tour(&[0, 1, 2, 3, 4]);

    assert_eq!(tour.successor(4), 0);
    assert_eq!(tour.predecessor(0), 4);
    assert_eq!(tour.successor(1), 2);
    assert_eq!(tour.neighbors(2), [1, 3]);
}

#[test]
fn can_check_edge_membership() {
    let tour = create_tour(&[0, 1, 2, 3, 4]);

    assert!(tour.contains_edge(0, 1));
    assert!(tour.contains_edge(1, 0));
    assert!(tour.contains_edge(4, 0));
    assert!(!tour.contains_edge(0, 2));
}

#[test]
fn cannot_create_invalid_tour() {
    assert!(Tour::new(vec![0, 1]).is_err());
    assert!(Tour::new(vec![0, 1, 1]).is_err());
    assert!(Tour::new(vec![0, 1, 5]).is_err());
}

#[test]
fn can_apply_two_opt_exchange() {
    let problem = create_square_problem();
    let mut tour = create_tour(&[0, 2, 1, 3]);

    // remove {0,2} and {3,1}, add {2,3} and {1,0}
    let walk = AlternatingWalk::from(vec![0, 2, 3, 1, 0]);

    assert!(tour.is_tour_after_exchange(&walk));

    tour.exchange(&walk);

    assert_eq!(problem.tour_length(&tour), 4);
    assert!(tour.contains_edge(0, 1));
    assert!(tour.contains_edge(1, 2));
    assert!(tour.contains_edge(2, 3));
    assert!(tour.contains_edge(3, 0));
}

#[test]
fn can_reject_exchange_which_splits_the_tour() {
    let tour = create_tour(&[0, 1, 2, 3, 4, 5]);

    // removing {0,1} and {3,4} while adding {1,3} and {4,0} yields two triangles
    let walk = AlternatingWalk::from(vec![0, 1, 3, 4, 0]);

    assert!(!tour.is_tour_after_exchange(&walk));
}

#[test]
fn can_accept_exchange_which_relinks_the_tour() {
    let tour = create_tour(&[0, 1, 2, 3, 4, 5]);

    // the other way to reconnect the same removed edges keeps a single cycle
    let walk = AlternatingWalk::from(vec![1, 0, 3, 4, 1]);

    assert!(tour.is_tour_after_exchange(&walk));
}

#[test]
fn can_reject_exchange_with_missing_out_edge() {
    let tour = create_tour(&[0, 1, 2, 3, 4, 5]);

    let walk = AlternatingWalk::from(vec![0, 2, 3, 1, 0]);

    assert!(!tour.is_tour_after_exchange(&walk));
}
