//! Structural patterns: variations on how objects are composed.

use crate::catalog::{Category, Pattern};

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        slug: "adapter",
        name: "Adapter",
        category: Category::Structural,
        summary: "Converts the interface of a type into the one a client expects. The car \
                  only knows how to start a simple engine, so the V8 with its different \
                  interface is wrapped in an adapter that translates the call.",
        source: include_str!("adapter.rs"),
        expected: &["Engine 2.0 - tr-tr-tr", "Engine V8! - wroom wroom!"],
        demo: adapter::demo,
    },
    Pattern {
        slug: "bridge",
        name: "Bridge",
        category: Category::Structural,
        summary: "Splits an abstraction from its implementation so both can vary on their \
                  own. Car models hold a color instead of multiplying into one type per \
                  model and color combination.",
        source: include_str!("bridge.rs"),
        expected: &[
            "Auto: Bmw, Color: dark-black",
            "Auto: Audi, Color: Silbermetallic",
        ],
        demo: bridge::demo,
    },
    Pattern {
        slug: "composite",
        name: "Composite",
        category: Category::Structural,
        summary: "Composes objects into tree structures and lets clients treat single parts \
                  and whole assemblies uniformly. An assembly's price is the sum of \
                  everything inside it.",
        source: include_str!("composite.rs"),
        expected: &[
            "Engine: 800$",
            "Body: 3000$",
            "Tools: 4000$",
            "Audi price is 7800$",
        ],
        demo: composite::demo,
    },
    Pattern {
        slug: "decorator",
        name: "Decorator",
        category: Category::Structural,
        summary: "Attaches extra responsibilities to an object by wrapping it in another \
                  object with the same interface. Each option raises the price and extends \
                  the description of the car it wraps.",
        source: include_str!("decorator.rs"),
        expected: &[
            "33000 Tesla with autopilot with parktronic",
            "30000 Tesla with autopilot",
        ],
        demo: decorator::demo,
    },
    Pattern {
        slug: "facade",
        name: "Facade",
        category: Category::Structural,
        summary: "Puts one simple interface in front of a complex subsystem. Assembling a car \
                  takes seven conveyor steps in a fixed order; the facade runs them all \
                  behind a single call.",
        source: include_str!("facade.rs"),
        expected: &[
            "Body set!",
            "Engine set!",
            "Added interior!",
            "Added exterior!",
            "Wheels!",
            "Added electronics!",
            "Car painted!",
        ],
        demo: facade::demo,
    },
    Pattern {
        slug: "flyweight",
        name: "Flyweight",
        category: Category::Structural,
        summary: "Shares fine-grained objects instead of duplicating them. The factory builds \
                  each model once and hands the same instance to everyone who asks for it \
                  again.",
        source: include_str!("flyweight.rs"),
        expected: &[
            "created: BMW",
            "created: Audi",
            "created: Tesla",
            "reused: Tesla",
            "models in factory: Audi, BMW, Tesla",
            "both Tesla requests share one model: true",
        ],
        demo: flyweight::demo,
    },
    Pattern {
        slug: "proxy",
        name: "Proxy",
        category: Category::Structural,
        summary: "Provides a stand-in that controls access to another object. The security \
                  system forwards to the car door only when the right password is given.",
        source: include_str!("proxy.rs"),
        expected: &["Access denied!", "Opening car door", "Closing the car door"],
        demo: proxy::demo,
    },
];
