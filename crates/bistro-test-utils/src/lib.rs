//! Testing utilities for the bistro workspace
//!
//! Shared dishes, menus and fixtures.

#![allow(missing_docs)]

use bistro_menu::{
    Appetizer, CookingMethod, Cuisine, Dessert, Dish, DishCore, FlavorProfile, MainCourse,
    ServingStyle, SideCategory, SideDish,
};

/// Header line of every menu source
pub const MENU_HEADER: &str =
    "dish_type,name,ingredients,prep_time,price,cuisine_type,additional_attributes";

/// Three records, one per course
pub const SMALL_MENU: &str = "\
dish_type,name,ingredients,prep_time,price,cuisine_type,additional_attributes
APPETIZER,Buffalo Wings,Chicken;Butter;Hot Sauce;Garlic;Flour,65,9.99,AMERICAN,FAMILY_STYLE;4;false
MAINCOURSE,Chicken Parmesan,Chicken;Bread;Cheese;Tomato;Basil,45,18.50,ITALIAN,BAKED;Chicken;Spaghetti:PASTA|Garden Salad:SALAD;false
DESSERT,Pecan Pie,Pecans;Sugar;Butter;Eggs;Crust;Cream,75,6.25,AMERICAN,SWEET;8;true
";

/// Build a menu source from data lines
pub fn menu_with(records: &[&str]) -> String {
    let mut text = String::from(MENU_HEADER);
    text.push('\n');
    for record in records {
        text.push_str(record);
        text.push('\n');
    }
    text
}

pub fn sample_appetizer() -> Dish {
    Dish::appetizer(
        DishCore::new(
            "Shrimp Cocktail",
            ["Shrimp", "Lemon", "Horseradish"],
            15,
            12.0,
            Cuisine::American,
        ),
        Appetizer::new(ServingStyle::Plated, 2, false),
    )
}

pub fn sample_main_course() -> Dish {
    Dish::main_course(
        DishCore::new(
            "Beef Bourguignon",
            ["Beef", "Wine", "Carrot", "Bacon", "Pork", "Butter"],
            180,
            28.0,
            Cuisine::French,
        ),
        MainCourse::new(
            CookingMethod::Boiled,
            "Beef",
            vec![
                SideDish::new("Baguette", SideCategory::Bread),
                SideDish::new("Green Beans", SideCategory::Vegetable),
            ],
            false,
        ),
    )
}

pub fn sample_dessert() -> Dish {
    Dish::dessert(
        DishCore::new(
            "Pistachio Gelato",
            ["Pistachios", "Milk", "Sugar", "Cream"],
            40,
            5.5,
            Cuisine::Italian,
        ),
        Dessert::new(FlavorProfile::Sweet, 6, true),
    )
}

/// Appetizer with the given name, prep time, ingredient count and cuisine
pub fn dish_with(name: &str, prep_time: u32, ingredient_count: usize, cuisine: Cuisine) -> Dish {
    let ingredients = (0..ingredient_count).map(|i| format!("Ingredient {i}"));
    Dish::appetizer(
        DishCore::new(name, ingredients, prep_time, 4.0, cuisine),
        Appetizer::default(),
    )
}

/// A dish that meets both elaborate thresholds
pub fn elaborate_dish(name: &str) -> Dish {
    dish_with(name, 90, 6, Cuisine::Other)
}

/// A dish that meets neither elaborate threshold
pub fn simple_dish(name: &str) -> Dish {
    dish_with(name, 10, 2, Cuisine::Other)
}
