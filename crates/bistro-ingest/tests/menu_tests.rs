use std::io::Write;

use bistro_ingest::{read_menu_path, read_menu_str, IngestError};
use bistro_menu::{Course, Cuisine, DishKind, ServingStyle, SideCategory, SideDish};
use bistro_test_utils::{menu_with, SMALL_MENU};
use pretty_assertions::assert_eq;

#[test]
fn small_menu_decodes_each_course() {
    let dishes: Vec<_> = read_menu_str(SMALL_MENU)
        .collect::<Result<_, _>>()
        .unwrap();

    let kinds: Vec<_> = dishes.iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, [DishKind::Appetizer, DishKind::MainCourse, DishKind::Dessert]);

    match dishes[0].course() {
        Course::Appetizer(a) => {
            assert_eq!(a.serving_style, ServingStyle::FamilyStyle);
            assert_eq!(a.spiciness_level, 4);
            assert!(!a.vegetarian);
        }
        other => panic!("expected appetizer, got {other:?}"),
    }

    match dishes[1].course() {
        Course::MainCourse(m) => {
            assert_eq!(m.protein_type, "Chicken");
            assert_eq!(
                m.side_dishes,
                [
                    SideDish::new("Spaghetti", SideCategory::Pasta),
                    SideDish::new("Garden Salad", SideCategory::Salad),
                ]
            );
        }
        other => panic!("expected main course, got {other:?}"),
    }

    assert_eq!(dishes[2].cuisine(), Cuisine::American);
    assert!(dishes[2].is_elaborate());
}

#[test]
fn reads_menu_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SMALL_MENU.as_bytes()).unwrap();

    let names: Vec<String> = read_menu_path(file.path())
        .unwrap()
        .map(|dish| dish.unwrap().name().to_string())
        .collect();
    assert_eq!(names, ["Buffalo Wings", "Chicken Parmesan", "Pecan Pie"]);
}

#[test]
fn errors_carry_line_numbers() {
    let menu = menu_with(&[
        "APPETIZER,Calamari,Squid;Flour,15,9.00,ITALIAN,PLATED;1;false",
        "MAINCOURSE,Steak,Beef,40",
        "DESSERT,Brownie,Cocoa;Flour,35,$4,AMERICAN,BITTER;6;true",
    ]);
    let results: Vec<_> = read_menu_str(&menu).collect();

    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(IngestError::InvalidRecord { line: 3, .. })));
    assert!(matches!(results[2], Err(IngestError::InvalidRecord { line: 4, .. })));
}
