// Composite: treat single parts and groups of parts the same way.

use crate::console::{say, Console};

pub trait Equipment {
    fn name(&self) -> &str;
    fn price(&self) -> u32;
}

pub struct Part {
    name: String,
    price: u32,
}

impl Part {
    pub fn new(name: &str, price: u32) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }

    pub fn engine() -> Self {
        Self::new("Engine", 800)
    }

    pub fn body() -> Self {
        Self::new("Body", 3000)
    }

    pub fn tools() -> Self {
        Self::new("Tools", 4000)
    }
}

impl Equipment for Part {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> u32 {
        self.price
    }
}

pub struct Assembly {
    name: String,
    equipments: Vec<Box<dyn Equipment>>,
}

impl Assembly {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            equipments: Vec::new(),
        }
    }

    pub fn add(&mut self, equipment: impl Equipment + 'static) {
        self.equipments.push(Box::new(equipment));
    }

    pub fn parts(&self) -> &[Box<dyn Equipment>] {
        &self.equipments
    }
}

impl Equipment for Assembly {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> u32 {
        self.equipments.iter().map(|e| e.price()).sum()
    }
}

pub fn demo(out: &mut dyn Console) {
    let mut car = Assembly::new("Audi");
    car.add(Part::engine());
    car.add(Part::body());
    car.add(Part::tools());

    for part in car.parts() {
        say!(out, "{}: {}$", part.name(), part.price());
    }
    say!(out, "{} price is {}$", car.name(), car.price());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_empty_assembly_costs_nothing() {
        assert_eq!(Assembly::new("Frame").price(), 0);
    }

    #[test]
    fn test_nested_assemblies_sum() {
        let mut kit = Assembly::new("Spare kit");
        kit.add(Part::new("Wheel", 500));
        kit.add(Part::tools());

        let mut car = Assembly::new("Audi");
        car.add(Part::engine());
        car.add(kit);

        assert_eq!(car.price(), 5300);
        assert_eq!(car.parts().len(), 2);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Engine: 800$",
                "Body: 3000$",
                "Tools: 4000$",
                "Audi price is 7800$",
            ]
        );
    }
}
