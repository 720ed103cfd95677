use crate::model::{CustomizationOptions, MenuItem};

/// Frames the model as head chef and food-safety officer and lays out the dish and the
/// customer's requests.
pub fn build_prompt(item: &MenuItem, customization: &CustomizationOptions) -> String {
    format!(
        "You are an expert Head Chef and Food Safety Officer.
Review the following order for potential conflicts between the Menu Item and the Customer's Customizations (especially allergies and dietary restrictions).

Menu Item: {name}
Description: {description}
Ingredients/Tags: {tags}

Customer Customization:
- Low Salt: {low_salt}
- Low Sugar: {low_sugar}
- Low Oil: {low_oil}
- Spice Level (0-4): {spice}
- Allergy Notes: \"{allergy}\"
- Special Requests: \"{requests}\"

Task 1: Determine if there is a conflict (e.g., the customer is allergic to nuts but the item contains nuts, or wants vegan but the item is meat-heavy and cannot easily be made vegan).
Task 2: Create a concise \"Kitchen Ticket\" string that highlights the modifications in standardized kitchen shorthand.

Return JSON.
",
        name = item.name,
        description = item.description,
        tags = item.tags.join(", "),
        low_salt = customization.low_salt,
        low_sugar = customization.low_sugar,
        low_oil = customization.low_oil,
        spice = customization.spice_level,
        allergy = customization.allergy_notes,
        requests = customization.special_requests,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemId, SpiceLevel};

    #[test]
    fn prompt_embeds_dish_and_every_option() {
        let item = MenuItem {
            id: MenuItemId(5),
            name: "Pad Thai".into(),
            description: "Rice noodles, tamarind, crushed peanuts".into(),
            category: "Noodles".into(),
            tags: vec!["peanuts".into(), "noodles".into()],
            price: 14.0,
        };
        let customization = CustomizationOptions {
            low_oil: true,
            ..Default::default()
        }
        .with_spice(SpiceLevel::Hot)
        .with_allergy("peanut allergy")
        .with_request("extra lime");

        let prompt = build_prompt(&item, &customization);
        assert!(prompt.contains("Menu Item: Pad Thai"));
        assert!(prompt.contains("Ingredients/Tags: peanuts, noodles"));
        assert!(prompt.contains("- Low Salt: false"));
        assert!(prompt.contains("- Low Oil: true"));
        assert!(prompt.contains("- Spice Level (0-4): 3"));
        assert!(prompt.contains("- Allergy Notes: \"peanut allergy\""));
        assert!(prompt.contains("- Special Requests: \"extra lime\""));
        assert!(prompt.trim_end().ends_with("Return JSON."));
    }
}
