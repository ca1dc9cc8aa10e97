// Builder: chain optional settings, then finalize with build().

use crate::console::{say, Console};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Car {
    pub auto_pilot: bool,
    pub parktronic: bool,
    pub signaling: bool,
    pub engine: Option<String>,
}

#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_pilot(mut self, enabled: bool) -> Self {
        self.car.auto_pilot = enabled;
        self
    }

    pub fn parktronic(mut self, enabled: bool) -> Self {
        self.car.parktronic = enabled;
        self
    }

    pub fn signaling(mut self, enabled: bool) -> Self {
        self.car.signaling = enabled;
        self
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.car.engine = Some(engine.into());
        self
    }

    pub fn build(self) -> Car {
        self.car
    }
}

pub fn demo(out: &mut dyn Console) {
    let car = CarBuilder::new()
        .auto_pilot(true)
        .parktronic(true)
        .engine("V8")
        .build();

    say!(out, "autopilot: {}", car.auto_pilot);
    say!(out, "parktronic: {}", car.parktronic);
    say!(out, "signaling: {}", car.signaling);
    say!(out, "engine: {}", car.engine.as_deref().unwrap_or("none"));
}
