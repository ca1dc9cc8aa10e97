// Prototype: new objects are copies of a configured prototype.

use std::fmt;

use crate::console::{say, Console};

#[derive(Debug, Clone, PartialEq)]
pub struct TeslaCar {
    pub model: String,
    pub price: u32,
    pub interior: String,
    pub autopilot: bool,
}

impl TeslaCar {
    pub fn new(model: &str, price: u32, interior: &str, autopilot: bool) -> Self {
        Self {
            model: model.to_string(),
            price,
            interior: interior.to_string(),
            autopilot,
        }
    }

    /// Produces an independent copy of this car.
    pub fn produce(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for TeslaCar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Tesla {}, {}, {} interior, autopilot: {}",
            self.model, self.price, self.interior, self.autopilot
        )
    }
}

pub fn demo(out: &mut dyn Console) {
    let prototype = TeslaCar::new("S", 80_000, "black", false);

    let mut car1 = prototype.produce();
    car1.interior = "white".to_string();
    car1.autopilot = true;

    let car2 = prototype.produce();

    say!(out, "prototype: {prototype}");
    say!(out, "car1: {car1}");
    say!(out, "car2: {car2}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_copies_are_independent() {
        let prototype = TeslaCar::new("X", 90_000, "black", false);
        let mut copy = prototype.produce();
        copy.price = 1;
        assert_eq!(prototype.price, 90_000);
        assert_eq!(prototype.produce(), prototype);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "prototype: Tesla S, 80000, black interior, autopilot: false",
                "car1: Tesla S, 80000, white interior, autopilot: true",
                "car2: Tesla S, 80000, black interior, autopilot: false",
            ]
        );
    }
}
