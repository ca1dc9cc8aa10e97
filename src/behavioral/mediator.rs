// Mediator: colleagues talk to one coordinator instead of to each other.

use std::cell::RefCell;
use std::rc::Rc;

use crate::console::{say, Console};

#[derive(Debug, Default)]
pub struct OfficialDealer {
    customers: Vec<String>,
}

impl OfficialDealer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_auto(
        &mut self,
        customer: &Customer,
        auto: &str,
        info: &str,
        out: &mut dyn Console,
    ) {
        let name = customer.name();
        say!(out, "Order name: {name}. Order auto is {auto}");
        say!(out, "Additional info: {info}");
        self.customers.push(name.to_string());
    }

    pub fn customers(&self) -> &[String] {
        &self.customers
    }
}

pub struct Customer {
    name: String,
    dealer: Rc<RefCell<OfficialDealer>>,
}

impl Customer {
    pub fn new(name: &str, dealer: Rc<RefCell<OfficialDealer>>) -> Self {
        Self {
            name: name.to_string(),
            dealer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn make_order(&self, auto: &str, info: &str, out: &mut dyn Console) {
        self.dealer.borrow_mut().order_auto(self, auto, info, out);
    }
}

pub fn demo(out: &mut dyn Console) {
    let mediator = Rc::new(RefCell::new(OfficialDealer::new()));
    let bob = Customer::new("Bob", mediator.clone());
    let anna = Customer::new("Anna", mediator.clone());

    bob.make_order("BMW", "With autopilot", out);
    anna.make_order("Audi", "With parktronik", out);

    say!(out, "Customers: {}", mediator.borrow().customers().join(", "));
}
