// Factory Method: one creation method decides which concrete product to build.

use crate::console::{say, Console};

#[derive(Debug, Clone, PartialEq)]
pub struct Bmw {
    pub model: String,
    pub price: u32,
    pub max_speed: u32,
}

impl Bmw {
    fn new(model: &str, price: u32, max_speed: u32) -> Self {
        Self {
            model: model.to_string(),
            price,
            max_speed,
        }
    }
}

pub struct BmwFactory;

impl BmwFactory {
    pub fn create(&self, model: &str) -> Option<Bmw> {
        match model {
            "X5" => Some(Bmw::new(model, 108_000, 300)),
            "X6" => Some(Bmw::new(model, 111_000, 320)),
            _ => None,
        }
    }
}

pub fn demo(out: &mut dyn Console) {
    let factory = BmwFactory;
    for model in ["X5", "X6", "X7"] {
        match factory.create(model) {
            Some(car) => say!(
                out,
                "{}: price {}, max speed {}",
                car.model,
                car.price,
                car.max_speed
            ),
            None => say!(out, "{model}: not produced by this factory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_known_models() {
        let x6 = BmwFactory.create("X6").unwrap();
        assert_eq!(x6, Bmw::new("X6", 111_000, 320));
    }

    #[test]
    fn test_unknown_model() {
        assert!(BmwFactory.create("i8").is_none());
        assert!(BmwFactory.create("x5").is_none());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "X5: price 108000, max speed 300",
                "X6: price 111000, max speed 320",
                "X7: not produced by this factory",
            ]
        );
    }
}
