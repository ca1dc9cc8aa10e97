// Strategy: swap the algorithm at runtime; here a discount is just a function.

use crate::console::{say, Console};

pub type Discount = fn(u64) -> u64;

pub fn base_strategy(amount: u64) -> u64 {
    amount
}

pub fn premium_strategy(amount: u64) -> u64 {
    percent_of(amount, 85)
}

pub fn platinum_strategy(amount: u64) -> u64 {
    percent_of(amount, 65)
}

/// `amount * percent / 100` rounded down, without overflowing for large amounts.
fn percent_of(amount: u64, percent: u64) -> u64 {
    amount / 100 * percent + amount % 100 * percent / 100
}

pub struct AutoCart {
    discount: Discount,
    amount: u64,
}

impl AutoCart {
    pub fn new(discount: Discount) -> Self {
        Self {
            discount,
            amount: 0,
        }
    }

    pub fn set_amount(&mut self, amount: u64) {
        self.amount = amount;
    }

    pub fn set_discount(&mut self, discount: Discount) {
        self.discount = discount;
    }

    pub fn checkout(&self) -> u64 {
        (self.discount)(self.amount)
    }
}

pub fn demo(out: &mut dyn Console) {
    let strategies: [Discount; 3] = [base_strategy, premium_strategy, platinum_strategy];

    for strategy in strategies {
        let mut cart = AutoCart::new(strategy);
        cart.set_amount(50_000);
        say!(out, "{}", cart.checkout());
    }
}
