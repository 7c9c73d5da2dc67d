//! Vehicle form state management

use super::field::FormField;
use crate::state::PredictionRequest;

/// Allowed fuel types, as the prediction service spells them
pub const FUEL_TYPES: &[&str] = &["Essence", "Diesel", "Hybrid"];

/// Allowed transmissions, as the prediction service spells them
pub const TRANSMISSIONS: &[&str] = &["Manuelle", "Automatique"];

/// The vehicle attribute form: seven input fields plus the submit button row
#[derive(Debug, Clone)]
pub struct VehicleForm {
    pub year: FormField,
    pub brand: FormField,
    pub model: FormField,
    pub mileage: FormField,
    pub cv: FormField,
    pub fuel_type: FormField,
    pub transmission: FormField,
    pub active_field_index: usize,
}

/// Index of the submit button row (after the seven fields)
pub const SUBMIT_INDEX: usize = 7;

impl VehicleForm {
    pub fn new() -> Self {
        Self {
            year: FormField::number("year", "Year", 2015, 1990, 2025),
            brand: FormField::text("brand", "Brand"),
            model: FormField::text("model", "Model"),
            mileage: FormField::number("mileage", "Mileage (km)", 0, 0, 2_000_000),
            cv: FormField::number("cv", "Horsepower (CV)", 4, 1, 50),
            fuel_type: FormField::select("fuel_type", "Fuel Type", FUEL_TYPES),
            transmission: FormField::select("transmission", "Transmission", TRANSMISSIONS),
            active_field_index: 0,
        }
    }

    pub fn field_count(&self) -> usize {
        8 // seven fields + submit row
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.year),
            1 => Some(&self.brand),
            2 => Some(&self.model),
            3 => Some(&self.mileage),
            4 => Some(&self.cv),
            5 => Some(&self.fuel_type),
            6 => Some(&self.transmission),
            _ => None,
        }
    }

    /// Mutable access to the active field (None on the submit row)
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.year),
            1 => Some(&mut self.brand),
            2 => Some(&mut self.model),
            3 => Some(&mut self.mileage),
            4 => Some(&mut self.cv),
            5 => Some(&mut self.fuel_type),
            6 => Some(&mut self.transmission),
            _ => None,
        }
    }

    fn field_mut_by_name(&mut self, name: &str) -> Option<&mut FormField> {
        match name {
            "year" => Some(&mut self.year),
            "brand" => Some(&mut self.brand),
            "model" => Some(&mut self.model),
            "mileage" => Some(&mut self.mileage),
            "cv" => Some(&mut self.cv),
            "fuel_type" => Some(&mut self.fuel_type),
            "transmission" => Some(&mut self.transmission),
            _ => None,
        }
    }

    /// Apply a single field edit, returning a new form. The original is left
    /// untouched; unknown field names are a no-op.
    #[must_use]
    pub fn with_field(&self, name: &str, raw: &str) -> Self {
        let mut next = self.clone();
        if let Some(field) = next.field_mut_by_name(name) {
            field.set_value(raw);
        }
        next
    }

    /// Required-field validation, checked before any request is issued
    pub fn validate(&self) -> Result<(), String> {
        if self.brand.as_text().trim().is_empty() {
            return Err("Brand is required".to_string());
        }
        if self.model.as_text().trim().is_empty() {
            return Err("Model is required".to_string());
        }
        Ok(())
    }

    /// Freeze the current values into an immutable request snapshot.
    /// Numeric fields that fail to parse come out as 0.
    pub fn snapshot(&self) -> PredictionRequest {
        PredictionRequest {
            year: self.year.as_int(),
            brand: self.brand.as_text().to_string(),
            model: self.model.as_text().to_string(),
            mileage: self.mileage.as_int(),
            cv: self.cv.as_int(),
            fuel_type: self.fuel_type.selected_option().to_string(),
            transmission: self.transmission.selected_option().to_string(),
        }
    }
}

impl Default for VehicleForm {
    fn default() -> Self {
        Self::new()
    }
}
