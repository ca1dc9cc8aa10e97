// Visitor: add operations over a family of types without changing those types.

use crate::console::{say, Console};

pub trait AutoVisitor {
    fn visit_tesla(&mut self, auto: &Tesla);
    fn visit_bmw(&mut self, auto: &Bmw);
    fn visit_audi(&mut self, auto: &Audi);
}

pub trait Auto {
    fn accept(&self, visitor: &mut dyn AutoVisitor);
}

pub struct Tesla;
pub struct Bmw;
pub struct Audi;

impl Tesla {
    pub fn info(&self) -> &str {
        "It is a Tesla car!"
    }
}

impl Bmw {
    pub fn info(&self) -> &str {
        "It is a BMW car!"
    }
}

impl Audi {
    pub fn info(&self) -> &str {
        "It is an Audi car!"
    }
}

impl Auto for Tesla {
    fn accept(&self, visitor: &mut dyn AutoVisitor) {
        visitor.visit_tesla(self);
    }
}

impl Auto for Bmw {
    fn accept(&self, visitor: &mut dyn AutoVisitor) {
        visitor.visit_bmw(self);
    }
}

impl Auto for Audi {
    fn accept(&self, visitor: &mut dyn AutoVisitor) {
        visitor.visit_audi(self);
    }
}

/// Collects one export line per visited car.
#[derive(Debug, Default)]
pub struct ExportVisitor {
    pub exported: Vec<String>,
}

impl ExportVisitor {
    fn export(&mut self, info: &str) {
        self.exported.push(format!("Exported data: {info}"));
    }
}

impl AutoVisitor for ExportVisitor {
    fn visit_tesla(&mut self, auto: &Tesla) {
        self.export(auto.info());
    }

    fn visit_bmw(&mut self, auto: &Bmw) {
        self.export(auto.info());
    }

    fn visit_audi(&mut self, auto: &Audi) {
        self.export(auto.info());
    }
}

pub fn demo(out: &mut dyn Console) {
    let autos: Vec<Box<dyn Auto>> = vec![Box::new(Tesla), Box::new(Bmw), Box::new(Audi)];

    let mut visitor = ExportVisitor::default();
    for auto in &autos {
        auto.accept(&mut visitor);
    }

    for line in &visitor.exported {
        say!(out, "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[derive(Default)]
    struct Counter {
        teslas: usize,
        others: usize,
    }

    impl AutoVisitor for Counter {
        fn visit_tesla(&mut self, _: &Tesla) {
            self.teslas += 1;
        }
        fn visit_bmw(&mut self, _: &Bmw) {
            self.others += 1;
        }
        fn visit_audi(&mut self, _: &Audi) {
            self.others += 1;
        }
    }

    #[test]
    fn test_second_visitor_without_touching_cars() {
        let autos: Vec<Box<dyn Auto>> = vec![Box::new(Tesla), Box::new(Audi), Box::new(Tesla)];
        let mut counter = Counter::default();
        autos.iter().for_each(|a| a.accept(&mut counter));
        assert_eq!((counter.teslas, counter.others), (2, 1));
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Exported data: It is a Tesla car!",
                "Exported data: It is a BMW car!",
                "Exported data: It is an Audi car!",
            ]
        );
    }
}
