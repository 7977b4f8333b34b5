//! Imperial/metric conversions used at the edges. The engine sees metric body
//! measurements, Celsius and millimetres, and pounds for pack weight.

pub const CM_PER_INCH: f64 = 2.54;
pub const MM_PER_INCH: f64 = 25.4;
pub const KG_PER_POUND: f64 = 0.453_592;
pub const FEET_PER_METRE: f64 = 3.280_84;

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

pub fn metres_to_feet(metres: f64) -> f64 {
    metres * FEET_PER_METRE
}
