// Decorator: wrap an object to add behaviour while keeping its interface.

use crate::console::{say, Console};

pub trait Car {
    fn price(&self) -> u32;
    fn description(&self) -> String;
}

pub struct Tesla;
impl Car for Tesla {
    fn price(&self) -> u32 {
        25_000
    }

    fn description(&self) -> String {
        "Tesla".to_string()
    }
}

pub struct Autopilot<C> {
    car: C,
}

impl<C: Car> Autopilot<C> {
    pub fn new(car: C) -> Self {
        Self { car }
    }
}

impl<C: Car> Car for Autopilot<C> {
    fn price(&self) -> u32 {
        self.car.price() + 5_000
    }

    fn description(&self) -> String {
        format!("{} with autopilot", self.car.description())
    }
}

pub struct Parktronic<C> {
    car: C,
}

impl<C: Car> Parktronic<C> {
    pub fn new(car: C) -> Self {
        Self { car }
    }
}

impl<C: Car> Car for Parktronic<C> {
    fn price(&self) -> u32 {
        self.car.price() + 3_000
    }

    fn description(&self) -> String {
        format!("{} with parktronic", self.car.description())
    }
}

// Decorators wrap trait objects just as well as concrete types.
impl Car for Box<dyn Car> {
    fn price(&self) -> u32 {
        (**self).price()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

pub fn demo(out: &mut dyn Console) {
    let tesla = Parktronic::new(Autopilot::new(Tesla));
    say!(out, "{} {}", tesla.price(), tesla.description());

    let tesla2: Box<dyn Car> = Box::new(Autopilot::new(Tesla));
    say!(out, "{} {}", tesla2.price(), tesla2.description());
}
