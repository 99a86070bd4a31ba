/// Edge weight type. Flight durations are measured in hours.
pub type Weight = f64;
