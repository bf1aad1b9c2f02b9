use sealforge::extensive_sealed;

#[extensive_sealed(model(ty = std::collections::BTreeMap<String, u32>, name = "counts"))]
#[derive(Debug, Default)]
enum Tally {
    Done(sealforge::Extensive),
    #[default]
    Pending,
}

fn main() {
    let mut counts = std::collections::BTreeMap::new();
    counts.insert("a".to_string(), 1);
    let tally = CountsTally::Done(counts);
    assert!(matches!(tally, CountsTally::Done(ref map) if map.len() == 1));
    assert!(matches!(CountsTally::default(), CountsTally::Pending));
    let _ = Tally::Pending;
}
