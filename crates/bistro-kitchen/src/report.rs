//! Kitchen report
//!
//! ```text
//! ITALIAN: 2
//! MEXICAN: 3
//! CHINESE: 2
//! INDIAN: 1
//! AMERICAN: 1
//! FRENCH: 2
//! OTHER: 2
//!
//! AVERAGE PREP TIME: 62
//! ELABORATE DISHES: 53.85%
//! ```

use std::fmt;

use bistro_menu::Cuisine;

use crate::kitchen::Kitchen;

/// Point-in-time summary of a kitchen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenReport {
    /// Dish count per cuisine, in [`Cuisine::ALL`] order
    pub tallies: Vec<(Cuisine, usize)>,
    /// Mean preparation time in whole minutes
    pub average_prep_time: u64,
    /// Elaborate share in hundredths of a percent
    pub elaborate_basis_points: u64,
}

impl From<&Kitchen> for KitchenReport {
    fn from(kitchen: &Kitchen) -> Self {
        Self {
            tallies: Cuisine::ALL
                .iter()
                .map(|&cuisine| (cuisine, kitchen.count_cuisine(cuisine)))
                .collect(),
            average_prep_time: kitchen.average_prep_time(),
            elaborate_basis_points: kitchen.elaborate_basis_points(),
        }
    }
}

impl fmt::Display for KitchenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cuisine, count) in &self.tallies {
            writeln!(f, "{}: {count}", cuisine.as_token())?;
        }
        writeln!(f)?;
        writeln!(f, "AVERAGE PREP TIME: {}", self.average_prep_time)?;
        writeln!(
            f,
            "ELABORATE DISHES: {}.{:02}%",
            self.elaborate_basis_points / 100,
            self.elaborate_basis_points % 100
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_kitchen_report() {
        assert_eq!(
            Kitchen::new().report(),
            "ITALIAN: 0\nMEXICAN: 0\nCHINESE: 0\nINDIAN: 0\nAMERICAN: 0\nFRENCH: 0\nOTHER: 0\n\
             \n\
             AVERAGE PREP TIME: 0\n\
             ELABORATE DISHES: 0.00%\n"
        );
    }

    #[test]
    fn percentage_keeps_trailing_zero() {
        let report = KitchenReport {
            tallies: Vec::new(),
            average_prep_time: 7,
            elaborate_basis_points: 5050,
        };
        assert_eq!(report.to_string(), "\nAVERAGE PREP TIME: 7\nELABORATE DISHES: 50.50%\n");
    }
}
