// Flyweight: share one instance per distinct model instead of duplicating it.

use std::collections::HashMap;
use std::rc::Rc;

use itertools::Itertools;

use crate::console::{say, Console};

#[derive(Debug, PartialEq)]
pub struct Auto {
    pub model: String,
}

#[derive(Default)]
pub struct AutoFactory {
    models: HashMap<String, Rc<Auto>>,
}

impl AutoFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared model and whether it was created by this call.
    pub fn create(&mut self, name: &str) -> (Rc<Auto>, bool) {
        if let Some(model) = self.models.get(name) {
            return (Rc::clone(model), false);
        }

        let model = Rc::new(Auto {
            model: name.to_string(),
        });
        self.models.insert(name.to_string(), Rc::clone(&model));
        (model, true)
    }

    pub fn models(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).sorted().collect()
    }
}

pub fn demo(out: &mut dyn Console) {
    let mut factory = AutoFactory::new();
    let mut requested = Vec::new();

    for name in ["BMW", "Audi", "Tesla", "Tesla"] {
        let (auto, created) = factory.create(name);
        let verb = if created { "created" } else { "reused" };
        say!(out, "{verb}: {}", auto.model);
        requested.push(auto);
    }

    say!(out, "models in factory: {}", factory.models().join(", "));
    say!(
        out,
        "both Tesla requests share one model: {}",
        Rc::ptr_eq(&requested[2], &requested[3])
    );
}
