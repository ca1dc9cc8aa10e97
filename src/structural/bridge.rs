// Bridge: models and colors vary independently, joined by composition.

use crate::console::{say, Console};

pub trait Color {
    fn name(&self) -> &str;
}

pub struct BlackColor;
impl Color for BlackColor {
    fn name(&self) -> &str {
        "dark-black"
    }
}

pub struct SilverColor;
impl Color for SilverColor {
    fn name(&self) -> &str {
        "Silbermetallic"
    }
}

pub trait Model {
    fn paint(&self) -> String;
}

pub struct Audi {
    color: Box<dyn Color>,
}

impl Audi {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Model for Audi {
    fn paint(&self) -> String {
        format!("Auto: Audi, Color: {}", self.color.name())
    }
}

pub struct Bmw {
    color: Box<dyn Color>,
}

impl Bmw {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Model for Bmw {
    fn paint(&self) -> String {
        format!("Auto: Bmw, Color: {}", self.color.name())
    }
}

pub fn demo(out: &mut dyn Console) {
    let cars: Vec<Box<dyn Model>> = vec![
        Box::new(Bmw::new(Box::new(BlackColor))),
        Box::new(Audi::new(Box::new(SilverColor))),
    ];

    for car in &cars {
        say!(out, "{}", car.paint());
    }
}
