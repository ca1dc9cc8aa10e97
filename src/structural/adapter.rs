// Adapter: wrap an incompatible interface so existing code can use it.

use crate::console::{say, Console};

// Interface the car expects
pub trait SimpleEngine {
    fn simple_interface(&self, out: &mut dyn Console);
}

pub struct Engine2;
impl SimpleEngine for Engine2 {
    fn simple_interface(&self, out: &mut dyn Console) {
        say!(out, "Engine 2.0 - tr-tr-tr");
    }
}

// Different interface, cannot be handed to the car directly
pub struct EngineV8;
impl EngineV8 {
    pub fn complicated_interface(&self, out: &mut dyn Console) {
        say!(out, "Engine V8! - wroom wroom!");
    }
}

pub struct EngineV8Adapter {
    engine: EngineV8,
}

impl EngineV8Adapter {
    pub fn new(engine: EngineV8) -> Self {
        Self { engine }
    }
}

impl SimpleEngine for EngineV8Adapter {
    fn simple_interface(&self, out: &mut dyn Console) {
        self.engine.complicated_interface(out);
    }
}

pub struct Auto;
impl Auto {
    pub fn start_engine(&self, engine: &dyn SimpleEngine, out: &mut dyn Console) {
        engine.simple_interface(out);
    }
}

pub fn demo(out: &mut dyn Console) {
    let car = Auto;

    let old_engine = Engine2;
    car.start_engine(&old_engine, out);

    let new_engine = EngineV8Adapter::new(EngineV8);
    car.start_engine(&new_engine, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_adapter_forwards() {
        let mut out = Transcript::new();
        EngineV8Adapter::new(EngineV8).simple_interface(&mut out);
        assert_eq!(out.lines(), ["Engine V8! - wroom wroom!"]);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            ["Engine 2.0 - tr-tr-tr", "Engine V8! - wroom wroom!"]
        );
    }
}
