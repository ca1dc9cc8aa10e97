// Proxy: a stand-in that controls access to the real object.

use crate::console::{say, Console};

pub trait Door {
    fn open(&self, out: &mut dyn Console);
    fn close(&self, out: &mut dyn Console);
}

pub struct CarAccess;

impl Door for CarAccess {
    fn open(&self, out: &mut dyn Console) {
        say!(out, "Opening car door");
    }

    fn close(&self, out: &mut dyn Console) {
        say!(out, "Closing the car door");
    }
}

pub struct SecuritySystem<D> {
    door: D,
}

impl<D: Door> SecuritySystem<D> {
    const PASSWORD: &'static str = "Ilon";

    pub fn new(door: D) -> Self {
        Self { door }
    }

    pub fn authenticate(&self, password: &str) -> bool {
        password == Self::PASSWORD
    }

    /// Opens the door only for the right password. Returns whether it opened.
    pub fn open(&self, password: &str, out: &mut dyn Console) -> bool {
        if self.authenticate(password) {
            self.door.open(out);
            true
        } else {
            say!(out, "Access denied!");
            false
        }
    }

    pub fn close(&self, out: &mut dyn Console) {
        self.door.close(out);
    }
}

pub fn demo(out: &mut dyn Console) {
    let door = SecuritySystem::new(CarAccess);
    door.open("Jack", out);
    door.open("Ilon", out);
    door.close(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_password_is_case_sensitive() {
        let door = SecuritySystem::new(CarAccess);
        assert!(door.authenticate("Ilon"));
        assert!(!door.authenticate("ilon"));
        assert!(!door.authenticate(""));
    }

    #[test]
    fn test_denied_never_reaches_door() {
        let mut out = Transcript::new();
        let opened = SecuritySystem::new(CarAccess).open("Jack", &mut out);
        assert!(!opened);
        assert_eq!(out.lines(), ["Access denied!"]);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            ["Access denied!", "Opening car door", "Closing the car door"]
        );
    }
}
