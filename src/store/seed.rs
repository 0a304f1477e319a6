//! Built-in seed catalogs

use super::catalog::{Catalog, CatalogCategory, CatalogItem};

fn item(name: &str, description: &str) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// The categorized inventory used by the two- and three-column layouts
#[must_use]
pub fn inventory() -> Catalog {
    Catalog {
        categories: vec![
            CatalogCategory {
                name: "Sports".to_string(),
                items: vec![
                    item("Football", "Really handy for playing football"),
                    item("Badminton racket", "My trusty old racket"),
                    item(
                        "Skateboard",
                        "Gathering dust in the closet because I never use it",
                    ),
                    item(
                        "Tennis racket",
                        "If only I could play tennis this would be perfect",
                    ),
                    item("Swimming goggles", "Protecting my eyes from the water"),
                ],
            },
            CatalogCategory {
                name: "Services".to_string(),
                items: vec![
                    item("Electricity", "Needed for everything"),
                    item("Water", "Needed for drinking"),
                    item("Gas", "Needed for cooking"),
                    item("Food", "Needed for eating"),
                    item("Cleaning", "Needed for keeping things clean"),
                ],
            },
            CatalogCategory {
                name: "Animals".to_string(),
                items: vec![
                    item("Guinea pig", "Really cute"),
                    item("Cat", "Meow"),
                    item("Dog", "Bark"),
                    item("Bird", "Tweet"),
                    item("Fish", "Swim"),
                ],
            },
        ],
        items: Vec::new(),
    }
}

/// The flat list of people used by the simple layout
#[must_use]
pub fn people() -> Catalog {
    Catalog {
        categories: Vec::new(),
        items: vec![
            item("Henkie Test", "Really nice guy"),
            item("Some Dude", "Really short guy"),
            item("More Guy", "Really long guy"),
            item("Another Guy", "Really handsome guy"),
            item("Yet Another Guy", "Really smart guy"),
        ],
    }
}
