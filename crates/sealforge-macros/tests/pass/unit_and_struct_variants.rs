use sealforge::{extensive_sealed, Extensive};

#[extensive_sealed(model(ty = String), model(ty = f64, name = "score"))]
#[derive(Debug, Clone, PartialEq)]
enum Reading {
    Value { current: Extensive, previous: Option<u8> },
    Unavailable,
}

fn main() {
    let text = StringReading::Value {
        current: "ok".to_string(),
        previous: None,
    };
    let score = ScoreReading::Value {
        current: 0.5,
        previous: Some(1),
    };
    assert_ne!(text, StringReading::Unavailable);
    assert_ne!(score, ScoreReading::Unavailable);
    let _ = Reading::Unavailable;
}
