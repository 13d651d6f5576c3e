//! Dish
//!
//! A dish is the shared fields in [`DishCore`] plus exactly one [`Course`]
//! payload. Dietary accommodation and rendering dispatch over the course by
//! exhaustive match.
//!
//! Equality is structural over every field, shared and course-specific.

use std::fmt;

use crate::dietary::DietaryRequest;
use crate::token::{Cuisine, DishKind};
use crate::types::{Appetizer, Dessert, MainCourse};

/// Minimum ingredient count for an elaborate dish
pub const ELABORATE_MIN_INGREDIENTS: usize = 5;

/// Minimum preparation time, in minutes, for an elaborate dish
pub const ELABORATE_MIN_PREP_MINUTES: u32 = 60;

/// Fields every course shares
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishCore {
    /// Dish name
    pub name: String,
    /// Ingredients; order matters to the dietary rules, duplicates allowed
    pub ingredients: Vec<String>,
    /// Preparation time in minutes
    pub prep_time_minutes: u32,
    /// Price in dollars
    pub price: f64,
    /// Cuisine
    pub cuisine: Cuisine,
}

impl DishCore {
    /// Create shared dish fields
    pub fn new<I, S>(
        name: impl Into<String>,
        ingredients: I,
        prep_time_minutes: u32,
        price: f64,
        cuisine: Cuisine,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            prep_time_minutes,
            price,
            cuisine,
        }
    }
}

/// Course-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum Course {
    /// Appetizer payload
    Appetizer(Appetizer),
    /// Main course payload
    MainCourse(MainCourse),
    /// Dessert payload
    Dessert(Dessert),
}

impl Course {
    /// Discriminator for this payload
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DishKind {
        match self {
            Self::Appetizer(_) => DishKind::Appetizer,
            Self::MainCourse(_) => DishKind::MainCourse,
            Self::Dessert(_) => DishKind::Dessert,
        }
    }
}

impl From<Appetizer> for Course {
    fn from(value: Appetizer) -> Self {
        Self::Appetizer(value)
    }
}

impl From<MainCourse> for Course {
    fn from(value: MainCourse) -> Self {
        Self::MainCourse(value)
    }
}

impl From<Dessert> for Course {
    fn from(value: Dessert) -> Self {
        Self::Dessert(value)
    }
}

/// A dish on the menu
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    core: DishCore,
    course: Course,
}

impl Dish {
    /// Create dish from shared fields and a course payload
    #[inline]
    pub fn new(core: DishCore, course: impl Into<Course>) -> Self {
        Self {
            core,
            course: course.into(),
        }
    }

    /// Create an appetizer
    #[inline]
    #[must_use]
    pub fn appetizer(core: DishCore, appetizer: Appetizer) -> Self {
        Self::new(core, appetizer)
    }

    /// Create a main course
    #[inline]
    #[must_use]
    pub fn main_course(core: DishCore, main_course: MainCourse) -> Self {
        Self::new(core, main_course)
    }

    /// Create a dessert
    #[inline]
    #[must_use]
    pub fn dessert(core: DishCore, dessert: Dessert) -> Self {
        Self::new(core, dessert)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.core.name
    }

    #[inline]
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.core.ingredients
    }

    #[inline]
    #[must_use]
    pub fn prep_time(&self) -> u32 {
        self.core.prep_time_minutes
    }

    #[inline]
    #[must_use]
    pub fn price(&self) -> f64 {
        self.core.price
    }

    #[inline]
    #[must_use]
    pub fn cuisine(&self) -> Cuisine {
        self.core.cuisine
    }

    /// Shared fields
    #[inline]
    #[must_use]
    pub fn core(&self) -> &DishCore {
        &self.core
    }

    /// Course payload
    #[inline]
    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Course discriminator
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DishKind {
        self.course.kind()
    }

    /// Replace the ingredient list
    pub fn set_ingredients<I, S>(&mut self, ingredients: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core.ingredients = ingredients.into_iter().map(Into::into).collect();
    }

    /// Elaborate: at least 5 ingredients and at least 60 minutes of preparation
    ///
    /// Always recomputed from the current fields.
    #[inline]
    #[must_use]
    pub fn is_elaborate(&self) -> bool {
        self.core.ingredients.len() >= ELABORATE_MIN_INGREDIENTS
            && self.core.prep_time_minutes >= ELABORATE_MIN_PREP_MINUTES
    }

    /// Rewrite this dish in place to honour `request`
    ///
    /// The course's handlers run in their fixed order, each against the
    /// ingredient list left by the one before.
    pub fn dietary_accommodate(&mut self, request: &DietaryRequest) {
        let ingredients = &mut self.core.ingredients;
        match &mut self.course {
            Course::Appetizer(appetizer) => appetizer.accommodate(ingredients, request),
            Course::MainCourse(main_course) => main_course.accommodate(ingredients, request),
            Course::Dessert(dessert) => dessert.accommodate(ingredients, request),
        }
    }

    /// Dish details, one attribute per line
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dish Name: {}", self.core.name)?;
        writeln!(f, "Ingredients: {}", self.core.ingredients.join(", "))?;
        writeln!(f, "Preparation Time: {} minutes", self.core.prep_time_minutes)?;
        writeln!(f, "Price: ${:.2}", self.core.price)?;
        writeln!(f, "Cuisine Type: {}", self.core.cuisine.as_token())?;
        match &self.course {
            Course::Appetizer(appetizer) => write!(f, "{appetizer}"),
            Course::MainCourse(main_course) => write!(f, "{main_course}"),
            Course::Dessert(dessert) => write!(f, "{dessert}"),
        }
    }
}
