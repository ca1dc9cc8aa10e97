// Command: wrap a request in an object so the invoker does not know the receiver.

use std::cell::RefCell;
use std::rc::Rc;

use crate::console::{say, Console};

#[derive(Debug, Default)]
pub struct Engine {
    state: bool,
}

impl Engine {
    pub fn on(&mut self) {
        self.state = true;
    }

    pub fn off(&mut self) {
        self.state = false;
    }

    pub fn is_running(&self) -> bool {
        self.state
    }
}

pub trait Command {
    fn execute(&self);
}

pub struct OnStartCommand {
    engine: Rc<RefCell<Engine>>,
}

impl OnStartCommand {
    pub fn new(engine: Rc<RefCell<Engine>>) -> Self {
        Self { engine }
    }
}

impl Command for OnStartCommand {
    fn execute(&self) {
        self.engine.borrow_mut().on();
    }
}

pub struct OnSwitchOffCommand {
    engine: Rc<RefCell<Engine>>,
}

impl OnSwitchOffCommand {
    pub fn new(engine: Rc<RefCell<Engine>>) -> Self {
        Self { engine }
    }
}

impl Command for OnSwitchOffCommand {
    fn execute(&self) {
        self.engine.borrow_mut().off();
    }
}

pub struct Driver {
    command: Box<dyn Command>,
}

impl Driver {
    pub fn new(command: Box<dyn Command>) -> Self {
        Self { command }
    }

    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = command;
    }

    pub fn execute(&self) {
        self.command.execute();
    }
}

pub fn demo(out: &mut dyn Console) {
    let engine = Rc::new(RefCell::new(Engine::default()));
    say!(out, "{:?}", engine.borrow());

    let mut driver = Driver::new(Box::new(OnStartCommand::new(engine.clone())));
    driver.execute();
    say!(out, "{:?}", engine.borrow());

    driver.set_command(Box::new(OnSwitchOffCommand::new(engine.clone())));
    driver.execute();
    say!(out, "{:?}", engine.borrow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_commands_toggle_engine() {
        let engine = Rc::new(RefCell::new(Engine::default()));
        OnStartCommand::new(engine.clone()).execute();
        assert!(engine.borrow().is_running());

        OnSwitchOffCommand::new(engine.clone()).execute();
        assert!(!engine.borrow().is_running());
    }

    #[test]
    fn test_start_is_idempotent() {
        let engine = Rc::new(RefCell::new(Engine::default()));
        let driver = Driver::new(Box::new(OnStartCommand::new(engine.clone())));
        driver.execute();
        driver.execute();
        assert!(engine.borrow().is_running());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Engine { state: false }",
                "Engine { state: true }",
                "Engine { state: false }",
            ]
        );
    }
}
