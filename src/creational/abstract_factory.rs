// Abstract Factory: a family of related products behind one factory trait.

use crate::console::{say, Console};

pub trait Car {
    fn model(&self) -> &str;
}

pub struct Z4;
impl Car for Z4 {
    fn model(&self) -> &str {
        "BMW Z4"
    }
}

pub struct I3;
impl Car for I3 {
    fn model(&self) -> &str {
        "BMW i3"
    }
}

pub trait CarFactory {
    fn produce(&self) -> Box<dyn Car>;
    fn label(&self) -> &str;
}

pub struct SportCarFactory;
impl CarFactory for SportCarFactory {
    fn produce(&self) -> Box<dyn Car> {
        Box::new(Z4)
    }

    fn label(&self) -> &str {
        "Sport"
    }
}

pub struct FamilyCarFactory;
impl CarFactory for FamilyCarFactory {
    fn produce(&self) -> Box<dyn Car> {
        Box::new(I3)
    }

    fn label(&self) -> &str {
        "Family"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarKind {
    Sport,
    Family,
}

// Client code only ever sees `dyn CarFactory`.
pub fn bmw_producer(kind: CarKind) -> Box<dyn CarFactory> {
    match kind {
        CarKind::Sport => Box::new(SportCarFactory),
        CarKind::Family => Box::new(FamilyCarFactory),
    }
}

pub fn demo(out: &mut dyn Console) {
    for kind in [CarKind::Sport, CarKind::Family] {
        let factory = bmw_producer(kind);
        let car = factory.produce();
        say!(out, "{} factory produced: {}", factory.label(), car.model());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_producer_picks_family() {
        assert_eq!(bmw_producer(CarKind::Sport).produce().model(), "BMW Z4");
        assert_eq!(bmw_producer(CarKind::Family).produce().model(), "BMW i3");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Sport factory produced: BMW Z4",
                "Family factory produced: BMW i3",
            ]
        );
    }
}
