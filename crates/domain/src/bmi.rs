use std::fmt;

use crate::{Height, Weight};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi(f32);

impl Bmi {
    #[must_use]
    pub fn new(weight: Weight, height: Height) -> Self {
        let meters = f32::from(height) / 100.0;
        Self(f32::from(weight) / (meters * meters))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn category(self) -> BmiCategory {
        match self.0 {
            v if v < 18.5 => BmiCategory::Underweight,
            v if v < 25.0 => BmiCategory::Normal,
            v if v < 30.0 => BmiCategory::Overweight,
            _ => BmiCategory::Obese,
        }
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BMI: {:.1} — {}", self.0, self.category())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}
