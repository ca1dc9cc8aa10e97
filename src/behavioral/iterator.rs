// Iterator: walk a collection without exposing how it is stored.

use crate::console::{say, Console};

#[derive(Debug, Clone, PartialEq)]
pub struct Auto {
    pub model: String,
    pub color: String,
    pub price: u32,
}

impl Auto {
    pub fn new(model: &str, color: &str, price: u32) -> Self {
        Self {
            model: model.to_string(),
            color: color.to_string(),
            price,
        }
    }
}

#[derive(Debug, Default)]
pub struct Showroom {
    autos: Vec<Auto>,
}

impl Showroom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, auto: Auto) {
        self.autos.push(auto);
    }

    pub fn iter(&self) -> CarIterator<'_> {
        CarIterator {
            autos: &self.autos,
            index: 0,
        }
    }
}

pub struct CarIterator<'a> {
    autos: &'a [Auto],
    index: usize,
}

impl CarIterator<'_> {
    pub fn has_next(&self) -> bool {
        self.index < self.autos.len()
    }
}

impl<'a> Iterator for CarIterator<'a> {
    type Item = &'a Auto;

    fn next(&mut self) -> Option<Self::Item> {
        let auto = self.autos.get(self.index)?;
        self.index += 1;
        Some(auto)
    }
}

impl<'a> IntoIterator for &'a Showroom {
    type Item = &'a Auto;
    type IntoIter = CarIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn demo(out: &mut dyn Console) {
    let mut showroom = Showroom::new();
    showroom.add(Auto::new("Audi", "black", 20_000));
    showroom.add(Auto::new("BMW", "white", 30_000));
    showroom.add(Auto::new("Tesla", "gray", 40_000));

    let mut collection = showroom.iter();
    while collection.has_next() {
        if let Some(auto) = collection.next() {
            say!(out, "{}: {}, {}", auto.model, auto.color, auto.price);
        }
    }
}
