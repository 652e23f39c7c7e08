use std::fmt;
use std::io::{self, Write};

/// An ingredient line of a recipe.
///
/// The quantity entered at creation is kept as the original quantity and
/// never changes afterwards; scaling only touches the current quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    quantity: f64,
    pub unit: String,
    original_quantity: f64,
    pub calories: f64,
    pub food_group: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: f64,
        food_group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            original_quantity: quantity,
            calories,
            food_group: food_group.into(),
        }
    }

    /// Current (possibly scaled) quantity.
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Quantity as entered when the ingredient was created.
    #[inline]
    pub fn original_quantity(&self) -> f64 {
        self.original_quantity
    }

    /// Multiply the current quantity by `factor`.
    ///
    /// Zero and negative factors are accepted as-is.
    pub fn scale(&mut self, factor: f64) {
        self.quantity *= factor;
    }

    /// Restore the current quantity to the original quantity.
    pub fn reset(&mut self) {
        self.quantity = self.original_quantity;
    }

    /// Write the current and original quantities, one per line.
    pub fn display_quantities<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Current Quantity of {}: {} {}",
            self.name, self.quantity, self.unit
        )?;
        writeln!(
            out,
            "Original Quantity of {}: {} {}",
            self.name, self.original_quantity, self.unit
        )
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}, {} calories, Food Group: {}",
            self.name, self.quantity, self.unit, self.calories, self.food_group
        )
    }
}
