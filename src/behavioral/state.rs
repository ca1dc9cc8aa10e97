// State: behaviour changes with internal state; each state picks its successor.

use crate::console::{say, Console};

pub trait LightState {
    fn name(&self) -> &'static str;
    fn sign(&self) -> &'static str;
    fn next(self: Box<Self>) -> Box<dyn LightState>;
}

pub struct Red;
pub struct Yellow;
pub struct Green;

impl LightState for Red {
    fn name(&self) -> &'static str {
        "Red"
    }

    fn sign(&self) -> &'static str {
        "stop"
    }

    fn next(self: Box<Self>) -> Box<dyn LightState> {
        Box::new(Yellow)
    }
}

impl LightState for Yellow {
    fn name(&self) -> &'static str {
        "Yellow"
    }

    fn sign(&self) -> &'static str {
        "get ready"
    }

    fn next(self: Box<Self>) -> Box<dyn LightState> {
        Box::new(Green)
    }
}

impl LightState for Green {
    fn name(&self) -> &'static str {
        "Green"
    }

    fn sign(&self) -> &'static str {
        "go"
    }

    fn next(self: Box<Self>) -> Box<dyn LightState> {
        Box::new(Red)
    }
}

pub struct TrafficLight {
    state: Option<Box<dyn LightState>>,
}

impl TrafficLight {
    pub fn new() -> Self {
        Self {
            state: Some(Box::new(Red)),
        }
    }

    pub fn color(&self) -> &'static str {
        self.state.as_ref().map_or("", |s| s.name())
    }

    pub fn sign(&self) -> &'static str {
        self.state.as_ref().map_or("", |s| s.sign())
    }

    pub fn change(&mut self) {
        if let Some(state) = self.state.take() {
            self.state = Some(state.next());
        }
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo(out: &mut dyn Console) {
    let mut light = TrafficLight::new();
    for _ in 0..4 {
        say!(out, "{}: {}", light.color(), light.sign());
        light.change();
    }
}
