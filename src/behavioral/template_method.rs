// Template Method: the trait fixes the order of steps, implementors fill them in.

use crate::console::{say, Console};

pub trait CarBuilder {
    fn add_engine(&self, out: &mut dyn Console);
    fn install_chassis(&self, out: &mut dyn Console);
    fn add_electronic(&self, out: &mut dyn Console);
    fn collect_accessories(&self, out: &mut dyn Console) {
        say!(out, "Collect accessories");
    }

    fn build(&self, out: &mut dyn Console) {
        self.add_engine(out);
        self.install_chassis(out);
        self.add_electronic(out);
        self.collect_accessories(out);
    }
}

pub struct TeslaBuilder;
impl CarBuilder for TeslaBuilder {
    fn add_engine(&self, out: &mut dyn Console) {
        say!(out, "Add electric engine");
    }

    fn install_chassis(&self, out: &mut dyn Console) {
        say!(out, "Install Tesla chassis");
    }

    fn add_electronic(&self, out: &mut dyn Console) {
        say!(out, "Add special electronic");
    }
}

pub struct BmwBuilder;
impl CarBuilder for BmwBuilder {
    fn add_engine(&self, out: &mut dyn Console) {
        say!(out, "Add BMW engine");
    }

    fn install_chassis(&self, out: &mut dyn Console) {
        say!(out, "Install BMW chassis");
    }

    fn add_electronic(&self, out: &mut dyn Console) {
        say!(out, "Add electronic");
    }
}

pub fn demo(out: &mut dyn Console) {
    let builders: [&dyn CarBuilder; 2] = [&TeslaBuilder, &BmwBuilder];
    for builder in builders {
        builder.build(out);
    }
}
