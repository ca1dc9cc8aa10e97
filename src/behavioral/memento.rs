// Memento: capture state so it can be restored later, without exposing internals.

use crate::console::{say, Console};

#[derive(Debug, Clone, PartialEq)]
pub struct Memento {
    value: String,
}

pub struct Creator;

impl Creator {
    pub fn save(&self, value: &str) -> Memento {
        Memento {
            value: value.to_string(),
        }
    }

    pub fn restore<'a>(&self, memento: &'a Memento) -> &'a str {
        &memento.value
    }
}

#[derive(Debug, Default)]
pub struct Caretaker {
    values: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_memento(&mut self, memento: Memento) {
        self.values.push(memento);
    }

    pub fn get_memento(&self, index: usize) -> Option<&Memento> {
        self.values.get(index)
    }
}

pub fn demo(out: &mut dyn Console) {
    let creator = Creator;
    let mut care_taker = Caretaker::new();

    care_taker.add_memento(creator.save("hello"));
    care_taker.add_memento(creator.save("hello world"));
    care_taker.add_memento(creator.save("hello world !!!"));

    for index in [1, 0, 5] {
        match care_taker.get_memento(index) {
            Some(memento) => say!(out, "restored {index}: {}", creator.restore(memento)),
            None => say!(out, "nothing saved at {index}"),
        }
    }
}
