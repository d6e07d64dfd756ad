use beerZoom::{Collection, Ingredient, Move, Record, Session, Transition};

fn record(id: u32) -> Record {
    Record {
        id,
        name: format!("Beer {}", id),
        tagline: String::new(),
        description: String::new(),
        image_ref: format!("https://img/{}.png", id),
        bitterness: 20.0,
        ingredients: vec![Ingredient::new("Pale", 1.0, "kilograms")],
    }
}

fn session(n: u32) -> Session {
    Session::new(Collection::new((1..=n).map(record).collect()).unwrap()).unwrap()
}

#[test]
fn next_from_unpositioned_walks_and_saturates() {
    let mut s = session(3);
    assert_eq!(s.cursor().raw_index(), -1);
    s.navigate(Move::Next);
    assert_eq!(s.cursor().index(), Some(0));
    s.navigate(Move::Next);
    s.navigate(Move::Next);
    assert_eq!(s.cursor().index(), Some(2));
    assert_eq!(s.navigate(Move::Next), Transition::Unchanged);
    assert_eq!(s.cursor().index(), Some(2));
}

#[test]
fn home_end_and_previous() {
    let mut s = session(10);
    s.navigate(Move::Last);
    assert_eq!(s.current().map(|r| r.id), Some(10));
    assert_eq!(s.navigate(Move::Last), Transition::Unchanged);
    s.navigate(Move::Previous);
    s.navigate(Move::Previous);
    assert_eq!(s.cursor().index(), Some(7));
    assert_eq!(s.navigate(Move::First), Transition::Changed);
    assert_eq!(s.navigate(Move::Previous), Transition::Unchanged);
    assert_eq!(s.current().map(|r| r.id), Some(1));
}

#[test]
fn empty_collection_never_starts() {
    let err = Collection::new(Vec::new()).unwrap_err();
    assert!(matches!(err, beerZoom::BrowseError::EmptyCollection));
}
