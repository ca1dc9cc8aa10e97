//! Behavioral patterns: variations on how objects collaborate.

use crate::catalog::{Category, Pattern};

pub mod chain_of_responsibility;
pub mod command;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        slug: "chain-of-responsibility",
        name: "Chain of Responsibility",
        category: Category::Behavioral,
        summary: "Passes a request along a chain of handlers until one of them deals with \
                  it. Each account pays if its balance covers the order, otherwise it hands \
                  the payment to the next account in line.",
        source: include_str!("chain_of_responsibility.rs"),
        expected: &[
            "Cannot pay using Master Card",
            "Cannot pay using Paypal",
            "Paid 438 using Qiwi",
            "Cannot pay using Master Card",
            "Cannot pay using Paypal",
            "Unfortunately, not enough money",
        ],
        demo: chain_of_responsibility::demo,
    },
    Pattern {
        slug: "command",
        name: "Command",
        category: Category::Behavioral,
        summary: "Turns a request into an object. The driver executes whatever command it \
                  holds without knowing that the command starts or stops an engine.",
        source: include_str!("command.rs"),
        expected: &[
            "Engine { state: false }",
            "Engine { state: true }",
            "Engine { state: false }",
        ],
        demo: command::demo,
    },
    Pattern {
        slug: "iterator",
        name: "Iterator",
        category: Category::Behavioral,
        summary: "Gives sequential access to the elements of a collection without exposing \
                  how it is stored. The showroom iterator answers `has_next` and `next`, and \
                  is a regular Rust iterator too.",
        source: include_str!("iterator.rs"),
        expected: &[
            "Audi: black, 20000",
            "BMW: white, 30000",
            "Tesla: gray, 40000",
        ],
        demo: iterator::demo,
    },
    Pattern {
        slug: "mediator",
        name: "Mediator",
        category: Category::Behavioral,
        summary: "Routes the interaction between objects through one coordinator. Customers \
                  never talk to each other; they place orders through the dealer, which \
                  also keeps the customer list.",
        source: include_str!("mediator.rs"),
        expected: &[
            "Order name: Bob. Order auto is BMW",
            "Additional info: With autopilot",
            "Order name: Anna. Order auto is Audi",
            "Additional info: With parktronik",
            "Customers: Bob, Anna",
        ],
        demo: mediator::demo,
    },
    Pattern {
        slug: "memento",
        name: "Memento",
        category: Category::Behavioral,
        summary: "Captures an object's state so it can be restored later without exposing \
                  its internals. The caretaker keeps snapshots and hands back whichever one \
                  is asked for.",
        source: include_str!("memento.rs"),
        expected: &[
            "restored 1: hello world",
            "restored 0: hello",
            "nothing saved at 5",
        ],
        demo: memento::demo,
    },
    Pattern {
        slug: "observer",
        name: "Observer",
        category: Category::Behavioral,
        summary: "Defines a one-to-many dependency so that when one object changes, everyone \
                  subscribed to it is told. Readers who unsubscribe stop hearing the news.",
        source: include_str!("observer.rs"),
        expected: &[
            "Jack has been informed about: New Tesla price is 40 000",
            "Max has been informed about: New Tesla price is 40 000",
            "Jack has been informed about: Audi cuts prices",
        ],
        demo: observer::demo,
    },
    Pattern {
        slug: "state",
        name: "State",
        category: Category::Behavioral,
        summary: "Lets an object change its behaviour when its internal state changes. The \
                  traffic light delegates to its current state, and each state knows which \
                  one comes next: red, yellow, green, and back to red.",
        source: include_str!("state.rs"),
        expected: &["Red: stop", "Yellow: get ready", "Green: go", "Red: stop"],
        demo: state::demo,
    },
    Pattern {
        slug: "strategy",
        name: "Strategy",
        category: Category::Behavioral,
        summary: "Defines a family of interchangeable algorithms and picks one at runtime. \
                  The cart applies whichever discount it was given to the amount at \
                  checkout.",
        source: include_str!("strategy.rs"),
        expected: &["50000", "42500", "32500"],
        demo: strategy::demo,
    },
    Pattern {
        slug: "template-method",
        name: "Template Method",
        category: Category::Behavioral,
        summary: "Fixes the skeleton of an algorithm and lets implementors fill in the steps. \
                  Every builder runs the same four steps in the same order; only what each \
                  step does differs.",
        source: include_str!("template_method.rs"),
        expected: &[
            "Add electric engine",
            "Install Tesla chassis",
            "Add special electronic",
            "Collect accessories",
            "Add BMW engine",
            "Install BMW chassis",
            "Add electronic",
            "Collect accessories",
        ],
        demo: template_method::demo,
    },
    Pattern {
        slug: "visitor",
        name: "Visitor",
        category: Category::Behavioral,
        summary: "Adds new operations over a family of types without changing them. Every car \
                  accepts a visitor, and the export visitor decides what to do for each kind \
                  of car.",
        source: include_str!("visitor.rs"),
        expected: &[
            "Exported data: It is a Tesla car!",
            "Exported data: It is a BMW car!",
            "Exported data: It is an Audi car!",
        ],
        demo: visitor::demo,
    },
];
