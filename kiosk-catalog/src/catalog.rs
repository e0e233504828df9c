use crate::item::MenuItem;
use crate::menu::Menu;

/// The menu the kiosk starts with when nothing else is configured
pub fn default_catalog() -> Vec<Menu> {
    let sections: [(&str, [(&str, f64, &str); 4]); 3] = [
        (
            "Burgers",
            [
                ("ShackBurger", 6.9, "Cheeseburger topped with tomato, lettuce and ShackSauce"),
                ("SmokeShack", 8.9, "Cheeseburger topped with bacon, cherry peppers and ShackSauce"),
                ("Cheeseburger", 6.9, "Potato bun, beef patty and cheese"),
                ("Hamburger", 5.4, "Beef patty with fresh vegetables"),
            ],
        ),
        (
            "Drinks",
            [
                ("Shack-made Lemonade", 3.9, "Fresh lemonade made in store"),
                ("Fresh Brewed Iced Tea", 3.4, "Iced tea brewed from organic black tea"),
                ("Fifty/Fifty", 3.5, "Half lemonade, half iced tea"),
                ("Fountain Soda", 2.7, "Choice of cola, Sprite or Fanta"),
            ],
        ),
        (
            "Desserts",
            [
                ("Classic Hand-Spun Shakes", 5.9, "Vanilla, chocolate or salted caramel"),
                ("Floats", 5.9, "Root beer, purple cow or creamsicle"),
                ("Cup & Cone", 4.9, "Vanilla or chocolate"),
                ("Concretes", 5.9, "Dense frozen custard blended with mix-ins"),
            ],
        ),
    ];

    sections
        .into_iter()
        .map(|(category, items)| {
            let mut menu = Menu::new(category);
            for (name, price, description) in items {
                menu.add_item(MenuItem::new(name, price, description));
            }
            menu
        })
        .collect()
}

/// Check a catalog loaded from configuration before the kiosk uses it
pub fn validate_catalog(menus: &[Menu]) -> Result<(), CatalogError> {
    if menus.is_empty() {
        return Err(CatalogError::NoCategories);
    }

    for menu in menus {
        if menu.category().trim().is_empty() {
            return Err(CatalogError::UnnamedCategory);
        }
        if menu.is_empty() {
            return Err(CatalogError::EmptyCategory(menu.category().to_string()));
        }
        for item in menu.items() {
            if !item.price().is_finite() || item.price() < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    item: item.name().to_string(),
                    price: item.price(),
                });
            }
        }
    }

    Ok(())
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no categories")]
    NoCategories,

    #[error("Catalog contains a category without a name")]
    UnnamedCategory,

    #[error("Category has no items: {0}")]
    EmptyCategory(String),

    #[error("Invalid price {price} for item {item}")]
    InvalidPrice {
        item: String,
        price: f64,
    },
}
