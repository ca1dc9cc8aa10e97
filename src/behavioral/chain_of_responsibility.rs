// Chain of Responsibility: pass a request along until someone handles it.

use crate::console::{say, Console};

pub struct Account {
    name: String,
    balance: u32,
    next: Option<Box<Account>>,
}

impl Account {
    pub fn new(name: &str, balance: u32) -> Self {
        Self {
            name: name.to_string(),
            balance,
            next: None,
        }
    }

    pub fn master(balance: u32) -> Self {
        Self::new("Master Card", balance)
    }

    pub fn paypal(balance: u32) -> Self {
        Self::new("Paypal", balance)
    }

    pub fn qiwi(balance: u32) -> Self {
        Self::new("Qiwi", balance)
    }

    pub fn with_next(mut self, account: Account) -> Self {
        self.next = Some(Box::new(account));
        self
    }

    pub fn can_pay(&self, amount: u32) -> bool {
        self.balance >= amount
    }

    /// Returns the name of the account that paid, if any did.
    pub fn pay(&self, amount: u32, out: &mut dyn Console) -> Option<&str> {
        if self.can_pay(amount) {
            say!(out, "Paid {amount} using {}", self.name);
            return Some(&self.name);
        }

        match &self.next {
            Some(next) => {
                say!(out, "Cannot pay using {}", self.name);
                next.pay(amount, out)
            }
            None => {
                say!(out, "Unfortunately, not enough money");
                None
            }
        }
    }
}

pub fn demo(out: &mut dyn Console) {
    let qiwi = Account::qiwi(500);
    let paypal = Account::paypal(200).with_next(qiwi);
    let master = Account::master(100).with_next(paypal);

    master.pay(438, out);
    master.pay(1000, out);
}
