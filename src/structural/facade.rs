// Facade: one simple entry point in front of a multi-step subsystem.

use crate::console::{say, Console};

pub struct Conveyor;

impl Conveyor {
    pub fn set_body(&self, out: &mut dyn Console) {
        say!(out, "Body set!");
    }

    pub fn get_engine(&self, out: &mut dyn Console) {
        say!(out, "Dismantle Engine!");
    }

    pub fn set_engine(&self, out: &mut dyn Console) {
        say!(out, "Engine set!");
    }

    pub fn set_interior(&self, out: &mut dyn Console) {
        say!(out, "Added interior!");
    }

    pub fn set_exterior(&self, out: &mut dyn Console) {
        say!(out, "Added exterior!");
    }

    pub fn set_wheels(&self, out: &mut dyn Console) {
        say!(out, "Wheels!");
    }

    pub fn add_electronics(&self, out: &mut dyn Console) {
        say!(out, "Added electronics!");
    }

    pub fn paint(&self, out: &mut dyn Console) {
        say!(out, "Car painted!");
    }
}

pub struct ConveyorFacade {
    car: Conveyor,
}

impl ConveyorFacade {
    pub fn new(car: Conveyor) -> Self {
        Self { car }
    }

    // Fixed order; callers never sequence the steps themselves.
    pub fn assemble_car(&self, out: &mut dyn Console) {
        self.car.set_body(out);
        self.car.set_engine(out);
        self.car.set_interior(out);
        self.car.set_exterior(out);
        self.car.set_wheels(out);
        self.car.add_electronics(out);
        self.car.paint(out);
    }

    pub fn change_engine(&self, out: &mut dyn Console) {
        self.car.get_engine(out);
        self.car.set_engine(out);
    }
}

pub fn demo(out: &mut dyn Console) {
    let conveyor = ConveyorFacade::new(Conveyor);
    conveyor.assemble_car(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_change_engine() {
        let mut out = Transcript::new();
        ConveyorFacade::new(Conveyor).change_engine(&mut out);
        assert_eq!(out.lines(), ["Dismantle Engine!", "Engine set!"]);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Body set!",
                "Engine set!",
                "Added interior!",
                "Added exterior!",
                "Wheels!",
                "Added electronics!",
                "Car painted!",
            ]
        );
    }
}
