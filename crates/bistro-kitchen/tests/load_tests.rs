use std::io::Write;

use bistro_ingest::IngestError;
use bistro_kitchen::{InvalidRecordPolicy, Kitchen, KitchenConfig};
use bistro_menu::{Course, DietaryRequest};
use bistro_test_utils::{menu_with, SMALL_MENU};
use pretty_assertions::assert_eq;

#[test]
fn small_menu_report() {
    let kitchen = Kitchen::load_str(SMALL_MENU, KitchenConfig::default()).unwrap();

    assert_eq!(kitchen.len(), 3);
    assert_eq!(kitchen.prep_time_sum(), 185);
    assert_eq!(kitchen.elaborate_count(), 2);
    assert_eq!(
        kitchen.report(),
        "ITALIAN: 1\n\
         MEXICAN: 0\n\
         CHINESE: 0\n\
         INDIAN: 0\n\
         AMERICAN: 2\n\
         FRENCH: 0\n\
         OTHER: 0\n\
         \n\
         AVERAGE PREP TIME: 62\n\
         ELABORATE DISHES: 66.67%\n"
    );
}

#[test]
fn full_dietary_adjustment_on_small_menu() {
    let mut kitchen = Kitchen::load_str(SMALL_MENU, KitchenConfig::default()).unwrap();
    kitchen.apply_dietary_adjustment(&DietaryRequest::all());

    let parmesan = kitchen
        .dishes()
        .find(|d| d.name() == "Chicken Parmesan")
        .unwrap();
    assert_eq!(
        parmesan.render(),
        "Dish Name: Chicken Parmesan\n\
         Ingredients: Beans, Bread, Tomato, Basil\n\
         Preparation Time: 45 minutes\n\
         Price: $18.50\n\
         Cuisine Type: ITALIAN\n\
         Cooking Method: Baked\n\
         Protein Type: Tofu\n\
         Side Dishes: Garden Salad (Category: Salad)\n\
         Gluten-Free: Yes\n"
    );

    let pie = kitchen.dishes().find(|d| d.name() == "Pecan Pie").unwrap();
    assert_eq!(pie.ingredients(), ["Sugar", "Crust"]);
    match pie.course() {
        Course::Dessert(dessert) => {
            assert_eq!(dessert.sweetness_level, 5);
            assert!(!dessert.contains_nuts);
        }
        other => panic!("expected dessert, got {other:?}"),
    }

    let wings = kitchen.dishes().find(|d| d.name() == "Buffalo Wings").unwrap();
    assert_eq!(wings.ingredients(), ["Beans", "Butter", "Hot Sauce", "Garlic"]);

    assert_eq!(kitchen.elaborate_count(), 0);
    assert!(kitchen.report().ends_with("ELABORATE DISHES: 0.00%\n"));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SMALL_MENU.as_bytes()).unwrap();

    let kitchen = Kitchen::load(file.path(), KitchenConfig::default()).unwrap();
    assert_eq!(kitchen.len(), 3);
    assert_eq!(kitchen.tally_cuisine("AMERICAN"), 2);
}

#[test]
fn missing_file_yields_empty_kitchen() {
    let dir = tempfile::tempdir().unwrap();
    let kitchen = Kitchen::load(dir.path().join("nope.csv"), KitchenConfig::default()).unwrap();
    assert!(kitchen.is_empty());
    assert_eq!(kitchen.average_prep_time(), 0);
}

#[test]
fn invalid_record_skipped_or_aborts() {
    let menu = menu_with(&[
        "DESSERT,Sorbet,Lemon;Sugar,20,3.50,FRENCH,SOUR;4;false",
        "DESSERT,Broken,Lemon,twenty,3.50,FRENCH,SOUR;4;false",
        "APPETIZER,Edamame,Soybeans;Salt,5,4.00,OTHER,PLATED;0;true",
    ]);

    let kitchen = Kitchen::load_str(&menu, KitchenConfig::default()).unwrap();
    assert_eq!(kitchen.len(), 2);
    assert_eq!(kitchen.prep_time_sum(), 25);

    let abort = KitchenConfig::new().with_invalid_record_policy(InvalidRecordPolicy::Abort);
    let err = Kitchen::load_str(&menu, abort).unwrap_err();
    assert!(matches!(err, IngestError::InvalidRecord { line: 3, .. }));
}

#[test]
fn duplicate_records_ordered_once() {
    let record = "APPETIZER,Olives,Olives,2,3.00,OTHER,PLATED;0;true";
    let kitchen =
        Kitchen::load_str(&menu_with(&[record, record]), KitchenConfig::default()).unwrap();
    assert_eq!(kitchen.len(), 1);
}

#[test]
fn unknown_dish_types_are_not_ordered() {
    let menu = menu_with(&[
        "BEVERAGE,Espresso,Coffee,3,2.50,ITALIAN,HOT",
        "DESSERT,Gelato,Milk;Sugar,30,4.00,ITALIAN,SWEET;6;false",
    ]);
    let kitchen = Kitchen::load_str(&menu, KitchenConfig::default()).unwrap();
    assert_eq!(kitchen.tally_cuisine("ITALIAN"), 1);
}

#[test]
fn non_utf8_record_follows_invalid_record_policy() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let head = menu_with(&["DESSERT,Sorbet,Lemon;Sugar,20,3.50,FRENCH,SOUR;4;false"]);
    file.write_all(head.as_bytes()).unwrap();
    file.write_all(b"DESSERT,Cr\xe8me Br\xfbl\xe9e,Cream;Sugar,50,7.00,FRENCH,SWEET;7;false\n")
        .unwrap();
    file.write_all(b"DESSERT,Gelato,Milk;Sugar,30,4.00,ITALIAN,SWEET;6;false\n")
        .unwrap();

    let kitchen = Kitchen::load(file.path(), KitchenConfig::default()).unwrap();
    let mut names: Vec<&str> = kitchen.dishes().map(|d| d.name()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Gelato", "Sorbet"]);
    assert_eq!(kitchen.prep_time_sum(), 50);

    let abort = KitchenConfig::new().with_invalid_record_policy(InvalidRecordPolicy::Abort);
    let err = Kitchen::load(file.path(), abort).unwrap_err();
    assert!(matches!(err, IngestError::InvalidRecord { line: 3, .. }));
}
