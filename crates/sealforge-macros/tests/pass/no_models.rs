use sealforge::{extensive_sealed, Extensive};

#[extensive_sealed()]
#[allow(dead_code)]
enum Untouched {
    Only(Extensive),
}

fn main() {
    let _ = Untouched::Only(Extensive);
}
