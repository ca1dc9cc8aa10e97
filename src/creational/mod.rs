//! Creational patterns: variations on how objects get constructed.

use crate::catalog::{Category, Pattern};

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        slug: "abstract-factory",
        name: "Abstract Factory",
        category: Category::Creational,
        summary: "Provides an interface for creating families of related objects without \
                  naming their concrete types. The client asks a producer for a factory and \
                  every car it gets back belongs to that factory's family.",
        source: include_str!("abstract_factory.rs"),
        expected: &[
            "Sport factory produced: BMW Z4",
            "Family factory produced: BMW i3",
        ],
        demo: abstract_factory::demo,
    },
    Pattern {
        slug: "factory-method",
        name: "Factory Method",
        category: Category::Creational,
        summary: "Moves the decision of which object to construct into a single creation \
                  method. Callers name the model they want and the factory fills in price and \
                  top speed, or produces nothing for a model it does not know.",
        source: include_str!("factory_method.rs"),
        expected: &[
            "X5: price 108000, max speed 300",
            "X6: price 111000, max speed 320",
            "X7: not produced by this factory",
        ],
        demo: factory_method::demo,
    },
    Pattern {
        slug: "builder",
        name: "Builder",
        category: Category::Creational,
        summary: "Separates the construction of a complex object from its representation. \
                  Optional equipment is added one chained call at a time and `build` hands \
                  back the finished car.",
        source: include_str!("builder.rs"),
        expected: &[
            "autopilot: true",
            "parktronic: true",
            "signaling: false",
            "engine: V8",
        ],
        demo: builder::demo,
    },
    Pattern {
        slug: "prototype",
        name: "Prototype",
        category: Category::Creational,
        summary: "Creates new objects by copying a configured prototype. Each produced car is \
                  an independent copy, so customising one never touches the prototype or its \
                  siblings.",
        source: include_str!("prototype.rs"),
        expected: &[
            "prototype: Tesla S, 80000, black interior, autopilot: false",
            "car1: Tesla S, 80000, white interior, autopilot: true",
            "car2: Tesla S, 80000, black interior, autopilot: false",
        ],
        demo: prototype::demo,
    },
    Pattern {
        slug: "singleton",
        name: "Singleton",
        category: Category::Creational,
        summary: "Guarantees a type has exactly one instance and gives global access to it. \
                  Both handles point at the same counter, so increments made through either \
                  one are visible through both.",
        source: include_str!("singleton.rs"),
        expected: &[
            "same instance: true",
            "count via counter1: 4",
            "count via counter2: 4",
        ],
        demo: singleton::demo,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_creational() {
        assert_eq!(PATTERNS.len(), 5);
        assert!(PATTERNS.iter().all(|p| p.category == Category::Creational));
    }
}
