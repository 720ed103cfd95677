//! The catalog the restaurant opens with.

use crate::model::MenuItemCreate;

/// Default dishes, in display order.
pub fn seed_menu() -> Vec<MenuItemCreate> {
    vec![
        MenuItemCreate::new(
            "Chicken Satay",
            "Grilled chicken skewers with peanut dipping sauce",
            "Starters",
            &["peanuts", "chicken", "gluten-free"],
            9.5,
        ),
        MenuItemCreate::new(
            "Fresh Spring Rolls",
            "Rice paper rolls with herbs, tofu and hoisin",
            "Starters",
            &["vegan", "soy"],
            7.0,
        ),
        MenuItemCreate::new(
            "Green Curry",
            "Coconut green curry with bamboo shoots and Thai basil",
            "Mains",
            &["coconut", "spicy", "shrimp paste"],
            14.0,
        ),
        MenuItemCreate::new(
            "Garlic Butter Salmon",
            "Pan-seared salmon with garlic butter and greens",
            "Mains",
            &["fish", "dairy"],
            21.0,
        ),
        MenuItemCreate::new(
            "Pad Thai",
            "Stir-fried rice noodles with tamarind, egg and crushed peanuts",
            "Noodles",
            &["peanuts", "noodles", "egg"],
            13.5,
        ),
        MenuItemCreate::new(
            "Beef Pho",
            "Slow-simmered beef broth with rice noodles and herbs",
            "Noodles",
            &["beef", "noodles"],
            15.0,
        ),
        MenuItemCreate::new(
            "Mango Sticky Rice",
            "Sweet coconut sticky rice with ripe mango",
            "Desserts",
            &["coconut", "vegan", "sugar"],
            8.0,
        ),
        MenuItemCreate::new(
            "Thai Iced Tea",
            "Strong black tea with condensed milk over ice",
            "Drinks",
            &["dairy", "sugar", "caffeine"],
            5.0,
        ),
    ]
}
