use crate::{animal::Animal, person::Person, plant::Plant};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
    Plant(Plant),
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Person(p) => write!(f, "{}", p),
            TestData::Animal(a) => write!(f, "{}", a),
            TestData::Plant(p) => write!(f, "{}", p),
        }
    }
}

pub fn person_alice() -> TestData {
    TestData::Person(Person::new("Alice".to_string(), 31))
}

pub fn person_bob() -> TestData {
    TestData::Person(Person::new("Bob".to_string(), 27))
}

pub fn person_carol() -> TestData {
    TestData::Person(Person::new("Carol".to_string(), 45))
}

pub fn person_dana() -> TestData {
    TestData::Person(Person::new("Dana".to_string(), 38))
}

pub fn animal_owl() -> TestData {
    TestData::Animal(Animal::new("Owl".to_string(), 2))
}

pub fn animal_fox() -> TestData {
    TestData::Animal(Animal::new("Fox".to_string(), 4))
}

pub fn plant_ivy() -> TestData {
    TestData::Plant(Plant::new("Ivy".to_string(), 60))
}

pub fn plant_maple() -> TestData {
    TestData::Plant(Plant::new("Maple".to_string(), 900))
}

pub fn person(name: &str, age: u32) -> TestData {
    TestData::Person(Person::new(name.to_string(), age))
}

pub fn animal(species: &str, legs: u32) -> TestData {
    TestData::Animal(Animal::new(species.to_string(), legs))
}

pub fn plant(name: &str, height_cm: u32) -> TestData {
    TestData::Plant(Plant::new(name.to_string(), height_cm))
}
